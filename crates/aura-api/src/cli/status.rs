//! Dashboard: today's date, session state, history size, and the exercise
//! catalog.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use aura_types::session::Page;

use crate::state::AppState;

use super::auth;

/// Long US-style date, e.g. "Saturday, October 17, 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Today's date in long form.
pub fn today() -> String {
    format_long_date(Local::now().date_naive())
}

/// Show the dashboard.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    if !auth::enter(state, Page::Dashboard, json).await {
        return Ok(());
    }

    let log = state.message_log().await;
    let carousel = state.carousel();
    let cards = carousel.as_ref().map(|c| c.cards()).unwrap_or_default();

    if json {
        let result = serde_json::json!({
            "date": today(),
            "logged_in": true,
            "messages": log.len(),
            "history_limit": log.limit(),
            "data_dir": state.data_dir.display().to_string(),
            "exercises": cards,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("Aura").cyan().bold());
    println!("  {}", style(today()).dim());
    println!();
    println!(
        "  {}  {} / {}",
        style("Coach history:").bold(),
        log.len(),
        log.limit()
    );
    println!(
        "  {}  {}",
        style("Data:").bold(),
        style(state.data_dir.display()).dim()
    );
    println!();

    if !cards.is_empty() {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_BORDERS_ONLY)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("#").fg(Color::DarkGrey),
                Cell::new("Exercise").fg(Color::Cyan),
                Cell::new("Target").fg(Color::Cyan),
                Cell::new("Cue").fg(Color::Cyan),
            ]);

        for (i, card) in cards.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1).fg(Color::DarkGrey),
                Cell::new(format!("{} {}", card.icon, card.title)),
                Cell::new(&card.badge),
                Cell::new(&card.summary),
            ]);
        }

        println!("{table}");
        println!();
    }

    Ok(())
}
