use async_trait::async_trait;

/// Rate applied whenever the live feed cannot supply one. The same value can
/// also arrive as a genuine live rate; only [`RateSource`] tells them apart.
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateQuote {
    pub annual_rate_percent: f64,
    pub source: RateSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    Live,
    Fallback,
}

impl RateQuote {
    pub fn live(annual_rate_percent: f64) -> Self {
        Self {
            annual_rate_percent,
            source: RateSource::Live,
        }
    }

    pub fn fallback() -> Self {
        Self {
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
            source: RateSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RateSource::Fallback
    }
}

/// Source of the current annual interest rate. Infallible by contract:
/// implementations degrade to [`RateQuote::fallback`] instead of erroring,
/// so callers never block on feed availability.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn current_rate(&self) -> RateQuote;
}
