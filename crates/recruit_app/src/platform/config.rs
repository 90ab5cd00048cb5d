use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use recruit_core::AnalysisTiming;
use recruit_engine::UploadDelay;
use recruit_logging::{recruit_info, recruit_warn};
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "recruit.ron";
pub(crate) const CONFIG_ENV: &str = "RECRUIT_CONFIG";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AnalysisConfig {
    pub step_delay_ms: u64,
    pub message_interval_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 500,
            message_interval_ms: 1210,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct DelayRangeConfig {
    pub min: u64,
    pub max: u64,
}

impl Default for DelayRangeConfig {
    fn default() -> Self {
        Self {
            min: 1500,
            max: 2500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub tick_interval_ms: u64,
    pub analysis: AnalysisConfig,
    pub upload_delay_ms: DelayRangeConfig,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 75,
            analysis: AnalysisConfig::default(),
            upload_delay_ms: DelayRangeConfig::default(),
            log_destination: LogDestination::Terminal,
        }
    }
}

impl AppConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn timing(&self) -> AnalysisTiming {
        AnalysisTiming {
            step_delay: Duration::from_millis(self.analysis.step_delay_ms),
            message_interval: Duration::from_millis(self.analysis.message_interval_ms),
        }
    }

    pub fn upload_delay(&self) -> UploadDelay {
        UploadDelay {
            min: Duration::from_millis(self.upload_delay_ms.min),
            max: Duration::from_millis(self.upload_delay_ms.max),
        }
    }

    /// Zero intervals and inverted ranges are replaced with usable values.
    fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if self.tick_interval_ms == 0 {
            self.tick_interval_ms = defaults.tick_interval_ms;
        }
        if self.analysis.step_delay_ms == 0 {
            self.analysis.step_delay_ms = defaults.analysis.step_delay_ms;
        }
        if self.analysis.message_interval_ms == 0 {
            self.analysis.message_interval_ms = defaults.analysis.message_interval_ms;
        }
        if self.upload_delay_ms.min > self.upload_delay_ms.max {
            std::mem::swap(&mut self.upload_delay_ms.min, &mut self.upload_delay_ms.max);
        }
        self
    }
}

/// Config path from `RECRUIT_CONFIG`, else `./recruit.ron`.
pub(crate) fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

pub(crate) fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let config: AppConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config.normalized()))
}

/// Resolves a [`read_config`] outcome, falling back to defaults when the file
/// is missing or broken. Call after logging is up so the warning is visible.
pub(crate) fn settle_config(
    path: &Path,
    loaded: Result<Option<AppConfig>, ConfigError>,
) -> AppConfig {
    match loaded {
        Ok(Some(config)) => {
            recruit_info!("Loaded config from {:?}", path);
            config
        }
        Ok(None) => AppConfig::default(),
        Err(err) => {
            recruit_warn!("{err}; using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        assert!(read_config(&path).unwrap().is_none());
        assert_eq!(settle_config(&path, read_config(&path)), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(analysis: (step_delay_ms: 20), log_destination: Both)").unwrap();

        let config = read_config(&path).unwrap().unwrap();
        assert_eq!(config.analysis.step_delay_ms, 20);
        assert_eq!(config.analysis.message_interval_ms, 1210);
        assert_eq!(config.tick_interval_ms, 75);
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.timing().step_delay, Duration::from_millis(20));
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(tick_interval_ms: \"fast\"").unwrap();

        assert!(matches!(read_config(&path), Err(ConfigError::Parse { .. })));
        assert_eq!(settle_config(&path, read_config(&path)), AppConfig::default());
    }

    #[test]
    fn invalid_values_are_normalized() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "(tick_interval_ms: 0, upload_delay_ms: (min: 900, max: 100))",
        )
        .unwrap();

        let config = read_config(&path).unwrap().unwrap();
        assert_eq!(config.tick_interval_ms, 75);
        assert_eq!(config.upload_delay().min, Duration::from_millis(100));
        assert_eq!(config.upload_delay().max, Duration::from_millis(900));
    }
}
