use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use skyview_core::{
    Config, PendingSearch, SunriseClock, WeatherProvider, WeatherViewController,
    provider_from_config,
};
use tracing::debug;

use crate::render::render;

const SEARCH: &str = "Search city";
const QUIT: &str = "Quit";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyview", version, about = "Current weather for a city, in your terminal")]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `search`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and display preferences.
    Configure,

    /// Render the weather screen once.
    Show {
        /// City to search for; the default city is shown if absent.
        city: Option<String>,

        /// Print the view state as JSON instead of drawing the screen.
        #[arg(long)]
        json: bool,
    },

    /// Interactive screen: search cities until you quit.
    Search,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Search) {
            Command::Configure => configure(),
            Command::Show { city, json } => show(city, json).await,
            Command::Search => interactive().await,
        }
    }
}

fn controller_from_config() -> anyhow::Result<WeatherViewController> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    Ok(WeatherViewController::new(Arc::from(provider)).with_sunrise_clock(config.sunrise_clock()))
}

fn configure() -> anyhow::Result<()> {
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let clocks = [SunriseClock::Device, SunriseClock::City];
    let start = clocks
        .iter()
        .position(|c| *c == config.sunrise_clock())
        .unwrap_or_default();
    let labels = clocks.iter().map(|c| clock_label(*c)).collect();
    let choice = Select::new("Show sunrise in the time zone of:", labels)
        .with_starting_cursor(start)
        .raw_prompt()
        .context("Failed to read sunrise clock")?;
    let clock = clocks[choice.index];
    config.display.sunrise_clock = clock;

    config.save_to(&path)?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

fn clock_label(clock: SunriseClock) -> &'static str {
    match clock {
        SunriseClock::Device => "this device",
        SunriseClock::City => "the searched city",
    }
}

async fn show(city: Option<String>, json: bool) -> anyhow::Result<()> {
    let mut controller = controller_from_config()?;

    if let Some(city) = city {
        controller.open_search();
        controller.set_input(city.as_str());
        controller.submit_search(&city).await;
    }

    if json {
        let out = serde_json::to_string_pretty(controller.state())
            .context("Failed to serialize view state")?;
        println!("{out}");
    } else {
        print!("{}", render(controller.state()));
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let mut controller = controller_from_config()?;

    loop {
        print!("{}", render(controller.state()));
        println!();

        let choice = match Select::new("What next?", vec![SEARCH, QUIT]).prompt() {
            Ok(choice) => choice,
            Err(err) if is_cancel(&err) => break,
            Err(err) => return Err(err).context("Failed to read menu choice"),
        };
        if choice == QUIT {
            break;
        }

        let input = match Text::new("City:").with_placeholder("Enter city name").prompt() {
            Ok(input) => Some(input),
            Err(err) if is_cancel(&err) => None,
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        let Some(pending) = take_search_input(&mut controller, input) else {
            continue;
        };
        print!("{}", render(controller.state()));
        println!();

        let result = controller.provider().current_conditions(&pending.city).await;
        controller.complete_search(pending.ticket, result);
    }

    Ok(())
}

/// Feed one answer of the city prompt into the controller.
///
/// A cancelled prompt (`None`) leaves the screen untouched; the search box
/// only opens once there is input to show in it.
fn take_search_input(
    controller: &mut WeatherViewController,
    input: Option<String>,
) -> Option<PendingSearch> {
    let Some(input) = input else {
        debug!("search cancelled");
        return None;
    };

    controller.open_search();
    controller.set_input(input.as_str());
    controller.begin_search(&input)
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyview_core::OpenWeatherProvider;

    fn controller() -> WeatherViewController {
        // No request is sent by these tests.
        let provider = OpenWeatherProvider::with_base_url("KEY".into(), "http://127.0.0.1:9");
        WeatherViewController::new(Arc::new(provider))
    }

    #[test]
    fn cancelled_prompt_leaves_search_box_closed() {
        let mut controller = controller();
        let before = controller.state().clone();

        assert!(take_search_input(&mut controller, None).is_none());
        assert_eq!(controller.state(), &before);
        assert!(!render(controller.state()).contains("(Go)"));
    }

    #[test]
    fn blank_answer_opens_box_without_searching() {
        let mut controller = controller();

        assert!(take_search_input(&mut controller, Some("  ".into())).is_none());
        assert!(controller.state().search.is_open);
        assert!(!controller.state().request.is_loading);
    }

    #[test]
    fn city_answer_starts_loading() {
        let mut controller = controller();

        let pending = take_search_input(&mut controller, Some(" Tokyo ".into())).unwrap();

        assert_eq!(pending.city, "Tokyo");
        assert!(controller.state().request.is_loading);
        assert_eq!(controller.state().search.input, " Tokyo ");
    }
}
