use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Artifact location used when nothing overrides it, relative to the
/// function's working directory.
pub const DEFAULT_MODEL_PATH: &str = "./tmp/model.json";

/// Environment variable overriding `HandlerConfig::model_path`.
pub const MODEL_PATH_ENV: &str = "PREDICT_MODEL_PATH";

/// The single sample the handler classifies on every invocation.
pub const SAMPLE_FEATURES: [f32; 4] = [5.0, 3.2, 1.6, 0.4];

/// Runtime settings for the prediction handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    pub model_path: PathBuf,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl HandlerConfig {
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the known keys.
    /// Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(MODEL_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            config.model_path = PathBuf::from(path);
        }
        config
    }
}

/// Load a handler configuration from a JSON file.
pub fn load_handler_config<P: AsRef<Path>>(path: P) -> Result<HandlerConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: HandlerConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_bundled_artifact() {
        assert_eq!(
            HandlerConfig::default().model_path,
            PathBuf::from("./tmp/model.json")
        );
    }

    #[test]
    fn lookup_overrides_model_path() {
        let config = HandlerConfig::from_lookup(|key| {
            (key == MODEL_PATH_ENV).then(|| "/opt/models/iris.json".to_string())
        });
        assert_eq!(config.model_path, PathBuf::from("/opt/models/iris.json"));
    }

    #[test]
    fn blank_lookup_keeps_default() {
        let config = HandlerConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, HandlerConfig::default());
    }

    #[test]
    fn config_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("handler.json");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(load_handler_config(&path).unwrap(), HandlerConfig::default());

        std::fs::write(&path, r#"{"model_path": "models/m.json"}"#).unwrap();
        assert_eq!(
            load_handler_config(&path).unwrap().model_path,
            PathBuf::from("models/m.json")
        );
    }

    #[test]
    fn malformed_config_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("handler.json");
        std::fs::write(&path, "model_path = 1").unwrap();
        let err = load_handler_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config"));
    }
}
