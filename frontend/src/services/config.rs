use log::LevelFilter;
use std::str::FromStr;

/// Runtime settings for the client, resolved at build time
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base_url: String,
    /// Delay before re-fetching expenses after a successful submit
    pub refresh_delay_ms: u32,
    /// How long the input highlight stays after a submit
    pub notice_duration_ms: u32,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read `EXPENSE_TRACKER_API_URL` and `EXPENSE_TRACKER_LOG` from the build environment
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("EXPENSE_TRACKER_API_URL"),
            option_env!("EXPENSE_TRACKER_LOG"),
        )
    }

    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            log_level: log_level
                .and_then(|level| LevelFilter::from_str(level.trim()).ok())
                .unwrap_or(defaults.log_level),
            ..defaults
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            refresh_delay_ms: 1000,
            notice_duration_ms: 2000,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
