use super::ui;
use crate::core::config::{AppConfig, STATE_FILE_NAME};
use crate::core::{PersistedState, StateStore};
use crate::store::JsonFileStore;
use anyhow::Result;

/// Prints the last stored rate without touching the network.
pub fn run(config: &AppConfig) -> Result<Option<PersistedState>> {
    let store = JsonFileStore::new(config.data_dir()?.join(STATE_FILE_NAME));
    if !store.path().exists() {
        println!(
            "{}",
            ui::style_text("No exchange rate recorded yet", ui::StyleType::Subtle)
        );
        return Ok(None);
    }

    let state = store.load()?;
    println!(
        "Last USD to BRL rate: {}",
        ui::style_text(&format_rate(state.value), ui::StyleType::Rate)
    );
    Ok(Some(state))
}

/// Shortest exact form of `value`, padded to at least two decimals.
fn format_rate(value: f64) -> String {
    let text = value.to_string();
    let decimals = text.split_once('.').map_or(0, |(_, frac)| frac.len());
    if decimals < 2 {
        format!("{value:.2}")
    } else {
        text
    }
}
