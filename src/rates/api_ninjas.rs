use serde::Deserialize;

use super::provider::{RateProvider, RateQuote};
use crate::http::client::HttpClient;
use async_trait::async_trait;

pub const DEFAULT_RATES_BASE_URL: &str = "https://api.api-ninjas.com";
pub const DEFAULT_RATE_SERIES: &str = "USD LIBOR - 3 months";

/// Interest-rate lookup against the API-Ninjas feed. Any failure mode
/// (missing key, non-200, transport error, malformed body) resolves to the
/// fallback quote; the feed being down must never surface to the user.
#[derive(Debug, Clone)]
pub struct ApiNinjasProvider {
    http: HttpClient,
    api_key: Option<String>,
    base_url: String,
    series: String,
}

impl ApiNinjasProvider {
    pub fn new(
        http: HttpClient,
        api_key: Option<String>,
        base_url: String,
        series: String,
    ) -> Self {
        Self {
            http,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
            series,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/interestrate", self.base_url)
    }

    fn parse_quote(body: &str) -> RateQuote {
        match serde_json::from_str::<RateResponse>(body) {
            Ok(RateResponse { rate: Some(rate) }) => RateQuote::live(rate),
            _ => RateQuote::fallback(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RateResponse {
    rate: Option<f64>,
}

#[async_trait]
impl RateProvider for ApiNinjasProvider {
    async fn current_rate(&self) -> RateQuote {
        let api_key = self.api_key.as_deref().unwrap_or("");
        let response = self
            .http
            .get_json(
                &self.endpoint(),
                &[("name", self.series.as_str())],
                &[("X-Api-Key", api_key)],
            )
            .await;

        match response {
            Ok(data) if data.status == 200 => Self::parse_quote(&data.body),
            _ => RateQuote::fallback(),
        }
    }
}
