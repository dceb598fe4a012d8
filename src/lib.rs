//! smhi_weather
//!
//! A small client for SMHI's open meteorological observations API, with an
//! arrow-key terminal menu in the `smhi-weather` binary.
//!
//! ### Features
//! - Current average air temperature over every reporting Swedish station
//! - Throttled per-station temperature listing, cancellable with Escape
//! - Total rainfall in Lund over the latest months, with the covered dates
//!
//! ### Example
//! ```no_run
//! use smhi_weather::api::{Client, Endpoint, fetch_station_data};
//! use smhi_weather::temperature::{self, Outcome};
//!
//! let client = Client::default();
//! let data = fetch_station_data(&client, Endpoint::AllTemperaturesLatestHour)?;
//! if let Outcome::Completed(agg) = temperature::average(&data, || false) {
//!     println!("{}", temperature::format_average(&agg));
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod app;
pub mod cancel;
pub mod menu;
pub mod models;
pub mod rainfall;
pub mod temperature;
pub mod term;

pub use api::Client;
pub use models::{Station, StationData, Value};
