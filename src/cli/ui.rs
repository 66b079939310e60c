use crate::core::{ComparisonResult, Direction, LoadingIndicator};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Banner,
    Highlight,
    Rate,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Banner => style(text).blue().bright().bold(),
        StyleType::Highlight => style(text).green().bold(),
        StyleType::Rate => style(text).yellow().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Banner printed before the request goes out.
pub fn banner(source_name: &str) -> String {
    format!(
        "{}{}",
        style_text("Fetching USD to BRL exchange rate from ", StyleType::Banner),
        style_text(source_name, StyleType::Highlight)
    )
}

/// Colored `<glyph> <rate>` line.
pub fn comparison_line(result: &ComparisonResult) -> String {
    let glyph = format!("{} ", result.direction.glyph());
    let glyph = match result.direction {
        Direction::Down => style(glyph).red().bright().bold(),
        Direction::Up => style(glyph).green().bright().bold(),
        Direction::Unchanged => style(glyph).white().bright().bold(),
    };
    format!(
        "{}{}",
        glyph,
        style_text(&result.display_rate, StyleType::Rate)
    )
}

/// Spinner shown while the page is downloading. Cleared on stop.
#[derive(Default)]
pub struct Spinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoadingIndicator for Spinner {
    fn start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner().tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        let mut bar = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = bar.replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn stop(&self) {
        let mut bar = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(pb) = bar.take() {
            pb.finish_and_clear();
        }
    }
}
