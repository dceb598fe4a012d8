use chrono::{Local, TimeZone};
use smhi_weather::api::decode_station;
use smhi_weather::models::{Station, Value};
use smhi_weather::rainfall::{self, DATE_FORMAT, RainfallError};
use smhi_weather::term::Presentation;
use std::time::Duration;

fn val(raw: &str, from: i64, to: i64) -> Value {
    Value {
        value: Some(raw.into()),
        date: 0,
        from,
        to,
    }
}

fn lund(values: Option<Vec<Value>>) -> Station {
    Station {
        name: "Lund".into(),
        value: values,
    }
}

#[test]
fn single_value_spans_one_day() {
    let t0 = 1_696_204_800_000i64;
    let s = rainfall::summarize(&lund(Some(vec![val("5.0", t0, t0)]))).unwrap();
    let expected = Local.timestamp_millis_opt(t0).unwrap().date_naive();
    assert_eq!(s.total, 5.0);
    assert_eq!(s.start, expected);
    assert_eq!(s.end, expected);
}

#[test]
fn range_uses_first_from_and_last_to() {
    let day = 86_400_000i64;
    let t0 = 1_696_118_400_000i64;
    let values = vec![
        val("1.5", t0, t0 + day),
        val("0.0", t0 + day, t0 + 2 * day),
        val("2.5", t0 + 2 * day, t0 + 3 * day),
    ];
    let s = rainfall::summarize(&lund(Some(values))).unwrap();
    assert!((s.total - 4.0).abs() < 1e-9);
    assert_eq!(s.start, Local.timestamp_millis_opt(t0).unwrap().date_naive());
    assert_eq!(
        s.end,
        Local.timestamp_millis_opt(t0 + 3 * day).unwrap().date_naive()
    );
    assert_eq!(
        s.message(),
        format!(
            "The total rainfall in Lund between {} and {} was: 4 millimeters.",
            s.start.format(DATE_FORMAT),
            s.end.format(DATE_FORMAT)
        )
    );
}

#[test]
fn empty_value_list_is_an_error() {
    assert_eq!(rainfall::summarize(&lund(Some(vec![]))), Err(RainfallError::Empty));
    assert_eq!(rainfall::summarize(&lund(None)), Err(RainfallError::Empty));
}

#[test]
fn non_numeric_reading_fails_the_summary() {
    let values = vec![val("1.0", 0, 0), val("trace", 0, 0), val("2.0", 0, 0)];
    assert_eq!(
        rainfall::summarize(&lund(Some(values))),
        Err(RainfallError::BadReading {
            index: 1,
            raw: "trace".into()
        })
    );
}

#[test]
fn missing_readings_count_as_zero() {
    let station =
        decode_station(r#"{"name":"Lund","value":[{"value":"2.0"},{"value":null},{}]}"#).unwrap();
    let s = rainfall::summarize(&station).unwrap();
    assert_eq!(s.total, 2.0);
    assert!(s.message().contains("was: 2 millimeters."));
}

#[test]
fn dates_use_swedish_short_format() {
    let s = rainfall::RainfallSummary {
        total: 12.5,
        start: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        end: chrono::NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
    };
    let mut out = Vec::new();
    rainfall::present(&s, &mut out, &Presentation::plain(Duration::ZERO)).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "The total rainfall in Lund between 2024-03-01 and 2024-06-30 was: 12.5 millimeters.\n"
    );
}
