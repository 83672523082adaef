#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub api_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Delay before every text-search page request.
    pub request_delay_ms: u64,
    /// Extra delay before a request that carries a continuation token.
    pub page_token_delay_ms: u64,
    /// Delay before every details request.
    pub details_delay_ms: u64,
    pub max_unique_per_point: usize,
    pub grid_size: usize,
    pub radius_m: u32,
    pub max_depth: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("request_delay_ms", &self.request_delay_ms)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .field("details_delay_ms", &self.details_delay_ms)
            .field("max_unique_per_point", &self.max_unique_per_point)
            .field("grid_size", &self.grid_size)
            .field("radius_m", &self.radius_m)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
