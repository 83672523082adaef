//! Per-run throttling and saturation settings.

use std::time::Duration;

use placegrid_core::AppConfig;

/// Throttling and saturation knobs shared by every stage of a run.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Delay before every text-search page request.
    pub request_delay: Duration,
    /// Extra delay before a request carrying a continuation token; upstream
    /// tokens are not valid immediately after they are issued.
    pub page_token_delay: Duration,
    /// Delay before every details request.
    pub details_delay: Duration,
    /// Unique results from one point that count as saturation.
    pub max_unique_per_point: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_millis(1_000),
            page_token_delay: Duration::from_millis(2_000),
            details_delay: Duration::from_millis(500),
            max_unique_per_point: 60,
        }
    }
}

impl SearchSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            request_delay: Duration::from_millis(config.request_delay_ms),
            page_token_delay: Duration::from_millis(config.page_token_delay_ms),
            details_delay: Duration::from_millis(config.details_delay_ms),
            max_unique_per_point: config.max_unique_per_point,
        }
    }

    /// Same cap, no throttling.
    #[must_use]
    pub fn without_delays(max_unique_per_point: usize) -> Self {
        Self {
            request_delay: Duration::ZERO,
            page_token_delay: Duration::ZERO,
            details_delay: Duration::ZERO,
            max_unique_per_point,
        }
    }
}

/// Sleeps for `delay` unless it is zero.
pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
