use crate::models::Station;
use crate::term::Presentation;
use chrono::{Local, NaiveDate, TimeZone};
use std::io::{self, Write};
use thiserror::Error;

/// Short Swedish (sv-SE) calendar date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq)]
pub enum RainfallError {
    #[error("station reported no rainfall values")]
    Empty,
    #[error("value {index} is not a number: {raw:?}")]
    BadReading { index: usize, raw: String },
    #[error("timestamp {0} ms is out of range")]
    BadTimestamp(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainfallSummary {
    /// Millimeters over the whole period.
    pub total: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RainfallSummary {
    pub fn message(&self) -> String {
        format!(
            "The total rainfall in Lund between {} and {} was: {} millimeters.",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT),
            self.total
        )
    }
}

/// Local calendar date of an epoch-millisecond timestamp.
pub fn local_date(ms: i64) -> Result<NaiveDate, RainfallError> {
    Local
        .timestamp_millis_opt(ms)
        .earliest()
        .map(|dt| dt.date_naive())
        .ok_or(RainfallError::BadTimestamp(ms))
}

/// Total every reading of `station` and derive the covered date range.
///
/// The value list must be non-empty and in chronological order: the range runs
/// from the first value's `from` to the last value's `to`. Unlike the
/// temperature scan, any non-numeric reading fails the whole summary; a
/// missing reading counts as 0 mm.
pub fn summarize(station: &Station) -> Result<RainfallSummary, RainfallError> {
    let values = station.readings();
    let (first, last) = match (values.first(), values.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(RainfallError::Empty),
    };

    let mut total = 0.0;
    for (index, v) in values.iter().enumerate() {
        let Some(raw) = v.value.as_deref() else {
            continue;
        };
        total += v.reading().ok_or_else(|| RainfallError::BadReading {
            index,
            raw: raw.to_string(),
        })?;
    }

    Ok(RainfallSummary {
        total,
        start: local_date(first.from)?,
        end: local_date(last.to)?,
    })
}

pub fn present<W: Write>(
    summary: &RainfallSummary,
    out: &mut W,
    style: &Presentation,
) -> io::Result<()> {
    style.begin_result(out)?;
    writeln!(out, "{}", summary.message())?;
    out.flush()
}
