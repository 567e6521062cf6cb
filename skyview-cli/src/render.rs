use std::fmt::Write;

use skyview_core::{Screen, ViewState, WeatherSnapshot, static_forecast};

const LOADING: &str = "Loading...";
const SEARCH_PLACEHOLDER: &str = "Enter city name";

/// Draw the whole screen as plain text.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();

    if state.search.is_open {
        let input = if state.search.input.is_empty() {
            SEARCH_PLACEHOLDER
        } else {
            state.search.input.as_str()
        };
        let _ = writeln!(out, "[ {input} ] (Go)");
    }

    let snapshot = &state.snapshot;
    let _ = writeln!(out, "{}", snapshot.city);
    if !snapshot.region.is_empty() {
        let _ = writeln!(out, "{}", snapshot.region);
    }
    out.push('\n');

    let _ = writeln!(out, "  {}", snapshot.icon_symbol.glyph());
    match state.screen() {
        Screen::Loading => {
            let _ = writeln!(out, "{LOADING}");
        }
        Screen::Error(err) => {
            let _ = writeln!(out, "{err}");
        }
        Screen::Snapshot(snapshot) => render_snapshot(&mut out, snapshot),
    }
    out.push('\n');

    render_forecast(&mut out);
    out
}

fn render_snapshot(out: &mut String, snapshot: &WeatherSnapshot) {
    let _ = writeln!(out, "{}°", snapshot.temperature);
    let _ = writeln!(out, "{}", capitalize_words(&snapshot.condition));
    let _ = writeln!(
        out,
        "Wind {}  |  Humidity {}  |  Sunrise {}",
        snapshot.wind, snapshot.humidity, snapshot.sunrise
    );
}

fn render_forecast(out: &mut String) {
    let cards: Vec<String> = static_forecast()
        .iter()
        .map(|entry| format!("{} {}° {}", entry.icon.glyph(), entry.temperature_c, entry.day))
        .collect();
    let _ = writeln!(out, "{}", cards.join("   "));
}

/// Upper-case the first letter of every word ("light rain" -> "Light Rain").
fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
