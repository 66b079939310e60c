use super::ui;
use crate::core::config::AppConfig;
use crate::core::{ComparisonResult, RateChecker, RateError};
use crate::providers::WiseProvider;
use crate::store::JsonFileStore;
use std::sync::Arc;
use tracing::debug;

/// Prints the banner, runs one check and prints the direction line.
pub async fn run(config: &AppConfig) -> anyhow::Result<ComparisonResult> {
    println!("{}", ui::banner(&config.source.name));

    let data_dir = config
        .data_dir()
        .map_err(|e| RateError::StorageUnavailable(format!("{e:#}")))?;
    let store = JsonFileStore::in_dir(&data_dir)?;
    debug!("Using state file {}", store.path().display());

    let source = WiseProvider::new(
        &config.source.url,
        &config.source.selector,
        config.source.timeout(),
        Arc::new(ui::Spinner::new()),
    )?;

    let checker = RateChecker::new(Arc::new(source), Arc::new(store), config.source.timeout());
    let result = checker.run().await?;

    println!("{}", ui::comparison_line(&result));
    Ok(result)
}
