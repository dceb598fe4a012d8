use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use crossterm::style::Color;
use smhi_weather::api::{Client, DEFAULT_BASE_URL};
use smhi_weather::app::run_action;
use smhi_weather::cancel::{CancelFlag, KeyListener};
use smhi_weather::menu::{Menu, MenuAction};
use smhi_weather::term::{self, Presentation, RawModeGuard, TermOut};
use std::io::{self, Write};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "smhi-weather",
    version,
    about = "Current temperatures and Lund rainfall from SMHI open data"
)]
struct Cli {
    #[command(flatten)]
    opts: Options,
    /// Run a single action and exit; without one the interactive menu starts.
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Args, Debug)]
struct Options {
    /// API root that endpoint paths are appended to.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Pause between lines when listing station temperatures, in milliseconds.
    #[arg(long, global = true, default_value_t = 100)]
    delay_ms: u64,
    /// Total timeout for each HTTP request, in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,
    /// Disable colored output and highlighting.
    #[arg(long, global = true, default_value_t = false)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current average temperature over all stations.
    Average,
    /// Print the current temperature of every station.
    List,
    /// Print the total rainfall in Lund over the latest months.
    Rainfall,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let client = Client::new(&cli.opts.base_url, Duration::from_secs(cli.opts.timeout_secs))?;
    let delay = Duration::from_millis(cli.opts.delay_ms);

    match cli.cmd {
        None => {
            let style = Presentation {
                delay,
                color: !cli.opts.no_color,
                clear_screen: true,
            };
            run_menu(&client, &style)
        }
        Some(cmd) => {
            let action = match cmd {
                Command::Average => MenuAction::AverageTemperature,
                Command::List => MenuAction::ListTemperatures,
                Command::Rainfall => MenuAction::LundRainfall,
            };
            let mut out = io::stdout().lock();
            run_action(&client, action, &mut out, || false, &Presentation::plain(delay))
        }
    }
}

fn run_menu(client: &Client, style: &Presentation) -> Result<()> {
    let color = style.color;
    let _raw = RawModeGuard::enable()?;
    let mut out = TermOut::new(io::stdout());
    let mut menu = Menu::new();
    term::clear(&mut out)?;

    loop {
        term::render_menu(&mut out, &menu, color)?;
        let key = term::read_key()?;
        term::clear(&mut out)?;

        let Some(action) = menu.handle(key) else {
            continue;
        };
        if action == MenuAction::Exit {
            return Ok(());
        }

        term::print_colored(
            &mut out,
            Color::Red,
            "\nCall has been made, please wait for a response from the API.",
            color,
        )?;

        let flag = CancelFlag::new();
        let listener = match action {
            MenuAction::AverageTemperature | MenuAction::ListTemperatures => {
                Some(KeyListener::spawn(flag.clone()))
            }
            _ => None,
        };
        let result = run_action(client, action, &mut out, || flag.is_cancelled(), style);
        if let Some(l) = listener {
            l.stop();
        }

        if let Err(e) = result {
            log::debug!("{} failed: {:#}", action.label(), e);
            let msg = format!("Request failed: {:#}", e);
            term::print_colored(&mut out, Color::DarkRed, &msg, color)?;
        }

        writeln!(out, "\nPress any key to return to the menu.")?;
        out.flush()?;
        term::read_key()?;
        term::clear(&mut out)?;
    }
}
