use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub catalog_path: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub content_cache_age_sec: Option<usize>,
    pub frontend_dir_path: Option<String>,
    pub analysis_delay_ms: Option<u64>,
    pub session_idle_timeout_sec: Option<u64>,
    pub max_sessions: Option<usize>,

    pub matching: Option<MatchingConfig>,
}

/// `[matching]` section, one sub-table per matcher flow.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct MatchingConfig {
    pub builder: Option<FlowConfig>,
    pub mood_match: Option<FlowConfig>,
    pub mood_recommendations: Option<FlowConfig>,
    pub smells_like: Option<FlowConfig>,
    pub chat: Option<FlowConfig>,
    pub jitter_enabled: Option<bool>,
    pub jitter_max_offset: Option<u8>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct FlowConfig {
    pub min_score: Option<u8>,
    pub max_results: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
