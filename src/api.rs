/// Synchronous client for the **SMHI meteorological observations API**.
///
/// Only two fixed queries are used: the latest-hour air temperature of every
/// station and the recent-months precipitation at Lund. Responses are decoded
/// into `models::StationData` / `models::Station`.
///
/// ### Notes
/// - Readings are transmitted as JSON strings; they are kept as text and parsed
///   by the presenters.
/// - There are no retries: a failed request is reported to the caller once.
/// - The request timeout defaults to 30s and is configurable from the CLI.
///
/// Typical usage:
/// ```no_run
/// # use smhi_weather::api::{Client, Endpoint, fetch_station_data};
/// let client = Client::default();
/// let data = fetch_station_data(&client, Endpoint::AllTemperaturesLatestHour)?;
/// println!("{} stations", data.station.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
use crate::models::{Station, StationData};
use anyhow::{Context, Result};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Root of every request; endpoint paths are appended verbatim.
pub const DEFAULT_BASE_URL: &str = "https://opendata-download-metobs.smhi.se/api/version/latest";

/// The queries this program knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Parameter 39 (air temperature), all stations, latest hour.
    AllTemperaturesLatestHour,
    /// Parameter 23 (precipitation), station 53430 (Lund), latest months.
    LundRainfallLatestMonths,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AllTemperaturesLatestHour => {
                "/parameter/39/station-set/all/period/latest-hour/data.json?measuringStations=all"
            }
            Endpoint::LundRainfallLatestMonths => {
                "/parameter/23/station/53430/period/latest-months/data.json"
            }
        }
    }
}

/// Anything that can answer a GET for a path below the API root.
pub trait Source {
    fn get_text(&self, path: &str) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Client {
    /// Build a client for `base_url` with the given total request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("smhi-weather/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(30)).expect("reqwest client build")
    }
}

impl Source for Client {
    fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let body = self
            .http
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .with_context(|| format!("GET {}", url))?;
        log::debug!("received {} bytes", body.len());
        Ok(body)
    }
}

/// Decode a multi-station response body.
pub fn decode_station_data(body: &str) -> Result<StationData> {
    serde_json::from_str(body).context("decode station data")
}

/// Decode a single-station response body.
pub fn decode_station(body: &str) -> Result<Station> {
    serde_json::from_str(body).context("decode station")
}

pub fn fetch_station_data(source: &dyn Source, endpoint: Endpoint) -> Result<StationData> {
    let data = decode_station_data(&source.get_text(endpoint.path())?)?;
    log::debug!("decoded {} stations", data.station.len());
    Ok(data)
}

pub fn fetch_station(source: &dyn Source, endpoint: Endpoint) -> Result<Station> {
    let station = decode_station(&source.get_text(endpoint.path())?)?;
    log::debug!(
        "decoded station {:?} with {} values",
        station.name,
        station.readings().len()
    );
    Ok(station)
}
