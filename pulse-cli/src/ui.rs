use std::{fmt::Write as _, io::Write as _, sync::Arc};

use anyhow::bail;
use pulse_core::{
    ApplyOutcome, DisplayState, DisplayView, GroupStatus, WeatherProvider, WeatherService,
};
use tokio::io::{AsyncBufReadExt, BufReader};

const TITLE: &str = "🌤 Weather Pulse";
const QUIT: &str = ":q";

/// Render the whole screen as plain text.
pub fn render(view: &DisplayView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", view.location);
    let _ = writeln!(out, "  {}  {}", view.icon.glyph(), view.temperature);
    let _ = writeln!(out, "  {}", view.description);
    let _ = writeln!(out, "  🌬 {}   💧 {}", view.wind, view.humidity);

    if !view.forecast.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  5-Day Forecast");
        let mut days = String::from(" ");
        let mut temps = String::from(" ");
        for card in &view.forecast {
            let _ = write!(days, " {:<4}{:<5}", card.weekday, card.icon.glyph());
            let _ = write!(temps, " {:<9}", card.temperature);
        }
        let _ = writeln!(out, "{}", days.trim_end());
        let _ = writeln!(out, "{}", temps.trim_end());
    }

    if view.loading {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Loading...");
    }
    for notice in &view.notices {
        let _ = writeln!(out, "  ⚠ {notice}");
    }

    out
}

/// Run one search, wait for both fetches to settle and print the result.
pub async fn show(provider: Arc<dyn WeatherProvider>, place: &str) -> anyhow::Result<()> {
    let (service, mut rx) = WeatherService::new(provider);
    let mut state = DisplayState::new();

    let ticket = state.begin_search(place);
    service.search(place, ticket);

    while !state.is_settled() {
        let Some(update) = rx.recv().await else { break };
        state.apply(update);
    }

    print!("{}", render(&DisplayView::from_state(&state)));

    if matches!(state.current_status(), GroupStatus::Failed(_))
        && matches!(state.forecast_status(), GroupStatus::Failed(_))
    {
        bail!("No weather data available for '{}'", place.trim());
    }
    Ok(())
}

/// Single-screen loop: read place names from stdin, redraw whenever an update lands.
pub async fn interactive(provider: Arc<dyn WeatherProvider>) -> anyhow::Result<()> {
    let (service, mut rx) = WeatherService::new(provider);
    let mut state = DisplayState::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    redraw(&state)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let place = line.trim();
                if place == QUIT {
                    break;
                }
                if place.is_empty() {
                    redraw(&state)?;
                    continue;
                }
                let ticket = state.begin_search(place);
                service.search(place, ticket);
                redraw(&state)?;
            }
            Some(update) = rx.recv() => {
                if state.apply(update) != ApplyOutcome::Stale {
                    redraw(&state)?;
                }
            }
        }
    }

    Ok(())
}

fn redraw(state: &DisplayState) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    // Clear screen, cursor home.
    write!(stdout, "\x1b[2J\x1b[H")?;
    write!(stdout, "{}", render(&DisplayView::from_state(state)))?;
    write!(stdout, "\nEnter city ({QUIT} to quit): ")?;
    stdout.flush()?;
    Ok(())
}
