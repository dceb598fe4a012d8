use anyhow::{Result, bail};
use smhi_weather::api::{Endpoint, Source};
use smhi_weather::app::run_action;
use smhi_weather::menu::MenuAction;
use smhi_weather::temperature::CANCEL_HINT;
use smhi_weather::term::Presentation;
use std::time::Duration;

/// Canned responses keyed by endpoint path.
struct Fixture {
    temperatures: Option<&'static str>,
    rainfall: Option<&'static str>,
}

impl Source for Fixture {
    fn get_text(&self, path: &str) -> Result<String> {
        let body = if path == Endpoint::AllTemperaturesLatestHour.path() {
            self.temperatures
        } else if path == Endpoint::LundRainfallLatestMonths.path() {
            self.rainfall
        } else {
            None
        };
        match body {
            Some(b) => Ok(b.to_string()),
            None => bail!("request failed with HTTP 404 for {}", path),
        }
    }
}

const THREE_STATIONS: &str = r#"{"station":[{"name":"A","value":[{"value":"10"}]},{"name":"B","value":null},{"name":"C","value":[{"value":"x"}]}]}"#;

fn run(fixture: &Fixture, action: MenuAction) -> Result<String> {
    let mut out = Vec::new();
    run_action(fixture, action, &mut out, || false, &Presentation::plain(Duration::ZERO))?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn average_mode_skips_null_and_unparseable() {
    let f = Fixture {
        temperatures: Some(THREE_STATIONS),
        rainfall: None,
    };
    let text = run(&f, MenuAction::AverageTemperature).unwrap();
    assert!(text.contains("10.00"), "{}", text);
}

#[test]
fn list_mode_prints_only_parseable_station() {
    let f = Fixture {
        temperatures: Some(THREE_STATIONS),
        rainfall: None,
    };
    let text = run(&f, MenuAction::ListTemperatures).unwrap();
    let lines: Vec<&str> = text.lines().filter(|l| *l != CANCEL_HINT).collect();
    assert_eq!(lines, vec!["A: 10"]);
}

#[test]
fn rainfall_action_prints_total() {
    let f = Fixture {
        temperatures: None,
        rainfall: Some(r#"{"name":"Lund","value":[{"value":"1.25","from":0,"to":0},{"value":"2","from":0,"to":0}]}"#),
    };
    let text = run(&f, MenuAction::LundRainfall).unwrap();
    assert!(text.starts_with("The total rainfall in Lund between "));
    assert!(text.ends_with("was: 3.25 millimeters.\n"));
}

#[test]
fn fetch_and_decode_failures_are_returned_not_panicked() {
    let f = Fixture {
        temperatures: Some("not json"),
        rainfall: None,
    };
    let err = run(&f, MenuAction::AverageTemperature).unwrap_err();
    assert!(format!("{:#}", err).contains("decode station data"));

    let err = run(&f, MenuAction::LundRainfall).unwrap_err();
    assert!(format!("{:#}", err).contains("HTTP 404"));
}

#[test]
fn empty_rainfall_is_reported_as_error() {
    let f = Fixture {
        temperatures: None,
        rainfall: Some(r#"{"name":"Lund","value":[]}"#),
    };
    let err = run(&f, MenuAction::LundRainfall).unwrap_err();
    assert!(err.to_string().contains("no rainfall values"));
}

#[test]
fn cleared_screen_precedes_the_average() {
    let f = Fixture {
        temperatures: Some(THREE_STATIONS),
        rainfall: None,
    };
    let style = Presentation {
        clear_screen: true,
        ..Presentation::plain(Duration::ZERO)
    };
    let mut out = Vec::new();
    run_action(&f, MenuAction::AverageTemperature, &mut out, || false, &style).unwrap();
    let text = String::from_utf8(out).unwrap();
    let result_at = text.find("The average temperature: 10.00").unwrap();
    assert!(text[..result_at].contains("\u{1b}[2J"), "{:?}", text);
}

#[test]
fn exit_does_not_fetch() {
    let f = Fixture {
        temperatures: None,
        rainfall: None,
    };
    assert_eq!(run(&f, MenuAction::Exit).unwrap(), "");
}
