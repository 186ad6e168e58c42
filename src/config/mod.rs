mod file_config;

pub use file_config::{FileConfig, FlowConfig, MatchingConfig};

use crate::scent::{FlowSettings, MAX_SCORE};
use crate::server::RequestsLoggingLevel;
use crate::user::SessionLimits;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_JITTER_MAX_OFFSET: u8 = 5;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub catalog_path: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub analysis_delay_ms: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` serves the built-in fixture catalog.
    pub catalog_path: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub analysis_delay_ms: u64,

    pub matching: MatchingSettings,
    pub session_limits: SessionLimits,
}

/// Thresholds and caps for every call site of the matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingSettings {
    pub builder: FlowSettings,
    pub mood_match: FlowSettings,
    pub mood_recommendations: FlowSettings,
    pub smells_like: FlowSettings,
    pub chat: FlowSettings,
    pub jitter_enabled: bool,
    pub jitter_max_offset: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            builder: FlowSettings::BUILDER,
            mood_match: FlowSettings::MOOD_MATCH,
            mood_recommendations: FlowSettings::MOOD_RECOMMENDATIONS,
            smells_like: FlowSettings::SMELLS_LIKE,
            chat: FlowSettings::CHAT,
            jitter_enabled: false,
            jitter_max_offset: DEFAULT_JITTER_MAX_OFFSET,
        }
    }
}

impl MatchingSettings {
    fn resolve(file: MatchingConfig) -> Result<Self> {
        let defaults = Self::default();
        let flow = |name: &str, config: Option<FlowConfig>, default: FlowSettings| {
            resolve_flow(name, config.unwrap_or_default(), default)
        };
        Ok(Self {
            builder: flow("builder", file.builder, defaults.builder)?,
            mood_match: flow("mood_match", file.mood_match, defaults.mood_match)?,
            mood_recommendations: flow(
                "mood_recommendations",
                file.mood_recommendations,
                defaults.mood_recommendations,
            )?,
            smells_like: flow("smells_like", file.smells_like, defaults.smells_like)?,
            chat: flow("chat", file.chat, defaults.chat)?,
            jitter_enabled: file.jitter_enabled.unwrap_or(defaults.jitter_enabled),
            jitter_max_offset: file
                .jitter_max_offset
                .unwrap_or(defaults.jitter_max_offset),
        })
    }
}

fn resolve_flow(name: &str, file: FlowConfig, default: FlowSettings) -> Result<FlowSettings> {
    let settings = FlowSettings {
        min_score: file.min_score.unwrap_or(default.min_score),
        max_results: file.max_results.unwrap_or(default.max_results),
    };
    if settings.min_score > MAX_SCORE {
        bail!(
            "matching.{}.min_score must be at most {}, got {}",
            name,
            MAX_SCORE,
            settings.min_score
        );
    }
    if settings.max_results == 0 {
        bail!("matching.{}.max_results must be greater than 0", name);
    }
    Ok(settings)
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let catalog_path = file
            .catalog_path
            .map(PathBuf::from)
            .or_else(|| cli.catalog_path.clone());

        if let Some(path) = &catalog_path {
            if !path.exists() {
                bail!("Catalog file does not exist: {:?}", path);
            }
            if !path.is_file() {
                bail!("catalog_path is not a file: {:?}", path);
            }
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);
        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        let analysis_delay_ms = file.analysis_delay_ms.unwrap_or(cli.analysis_delay_ms);

        let matching = MatchingSettings::resolve(file.matching.unwrap_or_default())?;

        let default_limits = SessionLimits::default();
        let session_limits = SessionLimits {
            idle_timeout: file
                .session_idle_timeout_sec
                .map(Duration::from_secs)
                .unwrap_or(default_limits.idle_timeout),
            max_sessions: file.max_sessions.unwrap_or(default_limits.max_sessions),
        };
        if session_limits.idle_timeout.is_zero() {
            bail!("session_idle_timeout_sec must be greater than 0");
        }
        if session_limits.max_sessions == 0 {
            bail!("max_sessions must be greater than 0");
        }

        Ok(Self {
            catalog_path,
            port,
            logging_level,
            content_cache_age_sec,
            frontend_dir_path,
            analysis_delay_ms,
            matching,
            session_limits,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn make_temp_catalog() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();
        file
    }

    #[test]
    fn test_parse_logging_level() {
        assert!(matches!(
            parse_logging_level("none"),
            Some(RequestsLoggingLevel::None)
        ));
        assert!(matches!(
            parse_logging_level("path"),
            Some(RequestsLoggingLevel::Path)
        ));
        assert!(matches!(
            parse_logging_level("headers"),
            Some(RequestsLoggingLevel::Headers)
        ));
        assert!(matches!(
            parse_logging_level("body"),
            Some(RequestsLoggingLevel::Body)
        ));
        // Case insensitive
        assert!(matches!(
            parse_logging_level("PATH"),
            Some(RequestsLoggingLevel::Path)
        ));
        assert!(parse_logging_level("invalid").is_none());
    }

    #[test]
    fn test_resolve_cli_only() {
        let catalog = make_temp_catalog();
        let cli = CliConfig {
            catalog_path: Some(catalog.path().to_path_buf()),
            port: 3001,
            logging_level: RequestsLoggingLevel::Headers,
            content_cache_age_sec: 7200,
            frontend_dir_path: Some("/frontend".to_string()),
            analysis_delay_ms: 1500,
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.catalog_path.as_deref(), Some(catalog.path()));
        assert_eq!(config.port, 3001);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Headers);
        assert_eq!(config.content_cache_age_sec, 7200);
        assert_eq!(config.frontend_dir_path, Some("/frontend".to_string()));
        assert_eq!(config.analysis_delay_ms, 1500);
        assert_eq!(config.matching, MatchingSettings::default());
    }

    #[test]
    fn test_resolve_without_catalog_uses_builtin() {
        let config = AppConfig::resolve(&CliConfig::default(), None).unwrap();
        assert!(config.catalog_path.is_none());
        assert!(!config.matching.jitter_enabled);
        assert_eq!(config.matching.jitter_max_offset, DEFAULT_JITTER_MAX_OFFSET);
    }

    #[test]
    fn test_resolve_toml_overrides_cli() {
        let catalog = make_temp_catalog();
        let cli = CliConfig {
            catalog_path: Some(PathBuf::from("/should/be/overridden")),
            port: 3001,
            logging_level: RequestsLoggingLevel::Path,
            content_cache_age_sec: 3600,
            ..Default::default()
        };

        let file_config = FileConfig {
            catalog_path: Some(catalog.path().to_string_lossy().to_string()),
            port: Some(4000),
            logging_level: Some("body".to_string()),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, Some(file_config)).unwrap();

        assert_eq!(config.catalog_path.as_deref(), Some(catalog.path()));
        assert_eq!(config.port, 4000);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Body);
        // CLI value used when TOML doesn't specify
        assert_eq!(config.content_cache_age_sec, 3600);
    }

    #[test]
    fn test_resolve_matching_section_from_toml() {
        let file_config: FileConfig = toml::from_str(
            r#"
            port = 4001

            [matching]
            jitter_enabled = true
            jitter_max_offset = 3

            [matching.builder]
            min_score = 10

            [matching.chat]
            max_results = 5
            "#,
        )
        .unwrap();

        let config = AppConfig::resolve(&CliConfig::default(), Some(file_config)).unwrap();

        assert_eq!(config.port, 4001);
        assert_eq!(
            config.matching.builder,
            FlowSettings {
                min_score: 10,
                max_results: FlowSettings::BUILDER.max_results,
            }
        );
        assert_eq!(config.matching.chat.max_results, 5);
        assert_eq!(config.matching.chat.min_score, FlowSettings::CHAT.min_score);
        assert_eq!(config.matching.mood_match, FlowSettings::MOOD_MATCH);
        assert!(config.matching.jitter_enabled);
        assert_eq!(config.matching.jitter_max_offset, 3);
    }

    #[test]
    fn test_resolve_session_limits() {
        let config = AppConfig::resolve(&CliConfig::default(), None).unwrap();
        assert_eq!(config.session_limits, SessionLimits::default());

        let file_config: FileConfig = toml::from_str(
            r#"
            session_idle_timeout_sec = 600
            max_sessions = 50
            "#,
        )
        .unwrap();
        let config = AppConfig::resolve(&CliConfig::default(), Some(file_config)).unwrap();
        assert_eq!(config.session_limits.idle_timeout, Duration::from_secs(600));
        assert_eq!(config.session_limits.max_sessions, 50);

        let file_config = FileConfig {
            max_sessions: Some(0),
            ..Default::default()
        };
        let result = AppConfig::resolve(&CliConfig::default(), Some(file_config));
        assert!(result.unwrap_err().to_string().contains("max_sessions"));
    }

    #[test]
    fn test_resolve_nonexistent_catalog_error() {
        let cli = CliConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_resolve_catalog_is_directory_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = CliConfig {
            catalog_path: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a file"));
    }

    #[test]
    fn test_resolve_rejects_zero_max_results() {
        let file_config = FileConfig {
            matching: Some(MatchingConfig {
                smells_like: Some(FlowConfig {
                    min_score: None,
                    max_results: Some(0),
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = AppConfig::resolve(&CliConfig::default(), Some(file_config));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("matching.smells_like.max_results"));
    }

    #[test]
    fn test_resolve_rejects_unreachable_min_score() {
        let file_config = FileConfig {
            matching: Some(MatchingConfig {
                mood_match: Some(FlowConfig {
                    min_score: Some(MAX_SCORE + 1),
                    max_results: None,
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = AppConfig::resolve(&CliConfig::default(), Some(file_config));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("matching.mood_match.min_score"));
    }

    #[test]
    fn test_load_file_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "analysis_delay_ms = 250\n[matching.mood_recommendations]\nmin_score = 40").unwrap();
        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.analysis_delay_ms, Some(250));
        assert_eq!(
            config.matching.unwrap().mood_recommendations.unwrap().min_score,
            Some(40)
        );
        assert!(FileConfig::load(std::path::Path::new("/no/such/config.toml")).is_err());
    }
}
