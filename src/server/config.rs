use super::RequestsLoggingLevel;
use crate::config::MatchingSettings;
use crate::user::SessionLimits;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    /// Fixed pause in front of recommendation routes, 0 disables it.
    pub analysis_delay_ms: u64,
    pub matching: MatchingSettings,
    pub session_limits: SessionLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            content_cache_age_sec: 3600,
            frontend_dir_path: None,
            analysis_delay_ms: 0,
            matching: MatchingSettings::default(),
            session_limits: SessionLimits::default(),
        }
    }
}
