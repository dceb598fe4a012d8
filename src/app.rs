use crate::api::{self, Endpoint, Source};
use crate::menu::MenuAction;
use crate::term::Presentation;
use crate::{rainfall, temperature};
use anyhow::Result;
use std::io::Write;

/// Fetch, decode and present the data behind one menu selection.
///
/// Any transport, HTTP, decode or rainfall error is returned to the caller,
/// which reports it and goes back to the menu. `Exit` does nothing here.
pub fn run_action<W: Write>(
    source: &dyn Source,
    action: MenuAction,
    out: &mut W,
    cancelled: impl FnMut() -> bool,
    style: &Presentation,
) -> Result<()> {
    match action {
        MenuAction::AverageTemperature | MenuAction::ListTemperatures => {
            let data = api::fetch_station_data(source, Endpoint::AllTemperaturesLatestHour)?;
            let mode = if action == MenuAction::AverageTemperature {
                temperature::Mode::Average
            } else {
                temperature::Mode::List
            };
            temperature::present(&data, mode, out, cancelled, style)?;
        }
        MenuAction::LundRainfall => {
            let station = api::fetch_station(source, Endpoint::LundRainfallLatestMonths)?;
            let summary = rainfall::summarize(&station)?;
            rainfall::present(&summary, out, style)?;
        }
        MenuAction::Exit => {}
    }
    Ok(())
}
