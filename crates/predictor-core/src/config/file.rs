use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::constants::{CONFIG_PATH_ENV, PREDICTOR_CONFIG_CANDIDATES};
use super::types::PredictorConfig;
use super::util::{env_non_empty, non_empty};

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileConfig {
    pub(super) artifacts: Option<FileArtifactsConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileArtifactsConfig {
    pub(super) baseline_path: Option<String>,
    pub(super) model_path: Option<String>,
    pub(super) label_column: Option<String>,
}

impl PredictorConfig {
    pub(super) fn apply_file_config(&mut self) -> Result<bool> {
        let Some(path) = resolve_config_path() else {
            return Ok(false);
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        let file_cfg: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;

        self.apply_file_artifacts(file_cfg.artifacts);
        Ok(true)
    }

    pub(super) fn apply_file_artifacts(&mut self, artifacts: Option<FileArtifactsConfig>) {
        let Some(artifacts) = artifacts else {
            return;
        };

        if let Some(v) = non_empty(artifacts.baseline_path) {
            self.baseline_path = PathBuf::from(v);
        }
        if let Some(v) = non_empty(artifacts.model_path) {
            self.model_path = PathBuf::from(v);
        }
        if let Some(v) = non_empty(artifacts.label_column) {
            self.label_column = v;
        }
    }
}

/// Explicit path from the environment wins; otherwise the first existing
/// candidate location is used.
fn resolve_config_path() -> Option<PathBuf> {
    if let Some(explicit) = env_non_empty(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(explicit));
    }
    PREDICTOR_CONFIG_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}
