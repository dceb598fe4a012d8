use serde::{Deserialize, Deserializer, Serialize};

/// Multi-station response (`station-set/all` endpoints).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StationData {
    /// Stations in the order the API returned them.
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub station: Vec<Station>,
}

/// One observation point and its readings.
///
/// Stations with broken sensors report `"value": null`; those decode to `None`
/// and are skipped by the presenters rather than treated as errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Station {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<Vec<Value>>,
}

impl Station {
    /// Readings of this station, empty when the API sent none.
    pub fn readings(&self) -> &[Value] {
        self.value.as_deref().unwrap_or(&[])
    }
}

/// A single observation. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Value {
    /// The reading exactly as transmitted. SMHI sends numbers as strings;
    /// parsing happens lazily in [`Value::reading`].
    #[serde(default, deserialize_with = "de_opt_string_from_string_or_number")]
    pub value: Option<String>,
    #[serde(default)]
    pub date: i64,
    #[serde(default)]
    pub from: i64,
    #[serde(default)]
    pub to: i64,
}

impl Value {
    /// The reading as a number, or `None` when it is missing or not numeric.
    pub fn reading(&self) -> Option<f64> {
        self.value.as_deref()?.trim().parse::<f64>().ok()
    }
}

fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde helper: accept the reading as a JSON string or a bare number and keep it as text.
fn de_opt_string_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct ReadingVisitor;

    impl<'de> Visitor<'de> for ReadingVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string, a number or null")
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(s.to_owned()))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(ReadingVisitor)
}
