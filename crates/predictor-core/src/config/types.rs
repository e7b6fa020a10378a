use std::path::PathBuf;

use super::constants::{DEFAULT_BASELINE_PATH, DEFAULT_LABEL_COLUMN, DEFAULT_MODEL_PATH};

/// Runtime settings for the predictor binary.
///
/// Built from defaults, then an optional TOML config file, then
/// environment overrides — later layers win.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Feature baseline CSV the scaler is refit from at startup.
    pub baseline_path: PathBuf,
    /// Serialized classifier artifact.
    pub model_path: PathBuf,
    /// Name of the outcome column dropped from the baseline table.
    pub label_column: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            baseline_path: PathBuf::from(DEFAULT_BASELINE_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
        }
    }
}
