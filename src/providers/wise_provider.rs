use crate::core::error::RateError;
use crate::core::rate::{LoadingGuard, LoadingIndicator, Rate, RateSource};
use async_trait::async_trait;
use reqwest::StatusCode;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Scrapes the rate out of a currency converter page.
pub struct WiseProvider {
    url: String,
    selector: Selector,
    client: reqwest::Client,
    indicator: Arc<dyn LoadingIndicator>,
}

impl WiseProvider {
    pub fn new(
        url: &str,
        selector: &str,
        timeout: Duration,
        indicator: Arc<dyn LoadingIndicator>,
    ) -> Result<Self, RateError> {
        let selector = Selector::parse(selector)
            .map_err(|e| RateError::ParseFailed(format!("invalid selector '{selector}': {e}")))?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("gousdbrl/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            url: url.to_string(),
            selector,
            client,
            indicator,
        })
    }
}

/// Pulls the trimmed text of the first element matching `selector`.
pub fn extract_rate(html: &str, selector: &Selector) -> Result<Rate, RateError> {
    if html.trim().is_empty() {
        return Err(RateError::ParseFailed("empty response body".to_string()));
    }

    let document = Html::parse_document(html);
    let text: String = document
        .select(selector)
        .next()
        .ok_or(RateError::ValueNotFound)?
        .text()
        .collect();

    let text = text.trim();
    if text.is_empty() {
        return Err(RateError::ValueNotFound);
    }
    Ok(Rate::new(text))
}

#[async_trait]
impl RateSource for WiseProvider {
    async fn fetch_rate(&self) -> Result<Rate, RateError> {
        debug!("Requesting exchange rate page from {}", self.url);

        let body = {
            let _loading = LoadingGuard::start(self.indicator.as_ref());
            let response = self.client.get(&self.url).send().await?;

            let status = response.status();
            if status != StatusCode::OK {
                return Err(RateError::unexpected_status(status.as_u16()));
            }

            response.text().await?
        };

        let rate = extract_rate(&body, &self.selector)?;
        debug!("Extracted exchange rate {}", rate);
        Ok(rate)
    }
}
