use std::path::PathBuf;

use super::types::PredictorConfig;
use super::util::env_non_empty;

impl PredictorConfig {
    pub(super) fn apply_env_overrides(&mut self) {
        if let Some(v) = env_non_empty("GRADGUARD_BASELINE_PATH") {
            self.baseline_path = PathBuf::from(v);
        }
        if let Some(v) = env_non_empty("GRADGUARD_MODEL_PATH") {
            self.model_path = PathBuf::from(v);
        }
        if let Some(v) = env_non_empty("GRADGUARD_LABEL_COLUMN") {
            self.label_column = v;
        }
    }
}
