use super::classifier::{Classifier, MatchMode, SpeedPrecedence};
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const CONFIG_FILE_NAME: &str = "motion_config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub speed_precedence: SpeedPrecedence,
}

impl MotionConfig {
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.match_mode, self.speed_precedence)
    }
}

pub fn default_config_path() -> PathBuf {
    crate::config::app_data_dir().join(CONFIG_FILE_NAME)
}

/// Load the motion config. Any problem with the file leaves the classifier
/// on its compatibility policies.
pub fn load_config(path: &Path) -> MotionConfig {
    match crate::config::read_json_config::<MotionConfig>(path) {
        Ok(Some(config)) => {
            info!(
                path = %path.display(),
                match_mode = ?config.match_mode,
                speed_precedence = ?config.speed_precedence,
                "[Motion] Loaded config"
            );
            config
        }
        Ok(None) => {
            debug!(path = %path.display(), "[Motion] No config file, using defaults");
            MotionConfig::default()
        }
        Err(e) => {
            warn!("[Motion] {}, using defaults", e);
            MotionConfig::default()
        }
    }
}

pub fn save_config(path: &Path, config: &MotionConfig) -> Result<(), ConfigError> {
    crate::config::write_json_config(path, config)?;
    info!(path = %path.display(), "[Motion] Saved config");
    Ok(())
}
