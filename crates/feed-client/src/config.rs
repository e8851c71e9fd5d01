//! Feed configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Default storm report feed: IEM Local Storm Reports, trailing
/// 2-hour window.
pub const DEFAULT_FEED_URL: &str =
    "https://mesonet.agron.iastate.edu/geojson/lsr.geojson?hours=2";

/// Default refresh interval in seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 60;

/// Fixed timeout for one feed request.
pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent sent with feed requests.
pub(crate) const USER_AGENT: &str = "stormdeck/0.1";

/// Feed polling configuration.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed URL (replaceable at runtime via the refresher handle).
    pub url: String,
    /// How often the refresher polls the feed.
    pub refresh_interval: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
        }
    }
}

impl FeedConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `API_URL` | Feed URL | IEM LSR GeoJSON, 2-hour window |
    /// | `REFRESH_INTERVAL` | Refresh interval in seconds | `60` |
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
        let refresh_secs = env::var("REFRESH_INTERVAL")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_REFRESH_SECS);

        Self {
            url,
            refresh_interval: Duration::from_secs(refresh_secs),
        }
    }
}
