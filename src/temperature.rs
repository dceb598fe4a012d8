//! Temperature presenter: nationwide average or a throttled per-station listing.
//!
//! Both modes walk every reading of every station and poll a cancellation
//! predicate before each one. A cancelled run reports the cancellation and
//! prints no average.

use crate::models::StationData;
use crate::term::Presentation;
use std::io::{self, Write};
use std::thread;

pub const CANCEL_HINT: &str = "Press escape to cancel printing.";
pub const CANCELLED: &str = "The task has been cancelled by the user.";
pub const NO_READINGS: &str = "No temperature readings available.";

/// Result of a scan that may have been stopped early.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Average,
    List,
}

/// Running sum and count of parseable readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregate {
    pub sum: f64,
    pub count: usize,
}

impl Aggregate {
    pub fn add(&mut self, v: f64) {
        self.sum += v;
        self.count += 1;
    }

    /// Arithmetic mean, undefined (`None`) for an empty set.
    pub fn mean(&self) -> Option<f64> {
        if self.count > 0 {
            Some(self.sum / self.count as f64)
        } else {
            None
        }
    }
}

/// Sum every parseable reading across all stations.
pub fn average(data: &StationData, mut cancelled: impl FnMut() -> bool) -> Outcome<Aggregate> {
    let mut agg = Aggregate::default();
    for station in &data.station {
        for value in station.readings() {
            if cancelled() {
                return Outcome::Cancelled;
            }
            if let Some(t) = value.reading() {
                agg.add(t);
            }
        }
    }
    Outcome::Completed(agg)
}

/// Print `"<station>: <raw reading>"` for every parseable reading, pausing
/// `style.delay` after each line. Returns the number of lines printed.
pub fn list<W: Write>(
    data: &StationData,
    out: &mut W,
    mut cancelled: impl FnMut() -> bool,
    style: &Presentation,
) -> io::Result<Outcome<usize>> {
    let mut printed = 0usize;
    for station in &data.station {
        for value in station.readings() {
            if cancelled() {
                return Ok(Outcome::Cancelled);
            }
            if value.reading().is_none() {
                continue;
            }
            if printed == 0 {
                style.notice(out, CANCEL_HINT)?;
            }
            // reading() succeeded, so the raw text is present
            writeln!(out, "{}: {}", station.name, value.value.as_deref().unwrap_or_default())?;
            out.flush()?;
            printed += 1;
            if !style.delay.is_zero() {
                thread::sleep(style.delay);
            }
        }
    }
    Ok(Outcome::Completed(printed))
}

pub fn format_average(agg: &Aggregate) -> String {
    match agg.mean() {
        Some(m) => format!("The average temperature: {:.2}°C", m),
        None => NO_READINGS.to_string(),
    }
}

/// Run one presenter pass and write its user-facing output.
pub fn present<W: Write>(
    data: &StationData,
    mode: Mode,
    out: &mut W,
    cancelled: impl FnMut() -> bool,
    style: &Presentation,
) -> io::Result<()> {
    let done = match mode {
        Mode::Average => match average(data, cancelled) {
            Outcome::Completed(agg) => {
                log::debug!("averaged {} readings", agg.count);
                style.begin_result(out)?;
                writeln!(out, "{}", format_average(&agg))?;
                true
            }
            Outcome::Cancelled => false,
        },
        Mode::List => matches!(list(data, out, cancelled, style)?, Outcome::Completed(_)),
    };
    if !done {
        log::info!("temperature scan cancelled");
        style.notice(out, CANCELLED)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_aggregate_has_no_mean() {
        assert_eq!(Aggregate::default().mean(), None);
        assert_eq!(format_average(&Aggregate::default()), NO_READINGS);
    }

    #[test]
    fn average_formats_two_decimals() {
        let agg = Aggregate { sum: 10.0, count: 3 };
        assert_eq!(format_average(&agg), "The average temperature: 3.33°C");
    }
}
