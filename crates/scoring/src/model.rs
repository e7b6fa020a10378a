use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::math::{dot, sigmoid};
use crate::record::{FEATURE_COUNT, FEATURE_NAMES};

/// Serialized classifier weights — loaded from JSON at startup, immutable
/// and stateless afterwards.
///
/// The artifact is produced by the offline training job; this crate only
/// loads, validates, and evaluates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifier {
    /// Human-readable model identifier.
    pub model_id: String,
    /// Semantic version of the trained artifact.
    pub model_version: String,
    /// Weight vector (length = FEATURE_COUNT), in `FEATURE_NAMES` order.
    pub weights: Vec<f64>,
    /// Bias (intercept) term.
    pub bias: f64,
    /// Decision threshold: probability ≥ threshold → Graduate.
    pub threshold: f64,
    /// Feature names (for validation; must match FEATURE_NAMES order).
    #[serde(default)]
    pub feature_names: Vec<String>,
}

impl Classifier {
    /// Load and validate a classifier from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json).map_err(ModelError::ParseJson)?;
        model.validate()?;
        Ok(model)
    }

    /// Load and validate a classifier from a JSON file path.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(ModelError::Io)?;
        Self::from_json(&content)
    }

    /// Validate that the artifact is structurally sound.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(ModelError::DimensionMismatch {
                expected: FEATURE_COUNT,
                got: self.weights.len(),
            });
        }
        if self.threshold < 0.0 || self.threshold > 1.0 {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        for (i, &w) in self.weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(ModelError::NonFiniteWeight { index: i, value: w });
            }
        }
        if !self.bias.is_finite() {
            return Err(ModelError::NonFiniteBias(self.bias));
        }
        if !self.feature_names.is_empty() {
            for (i, expected) in FEATURE_NAMES.iter().copied().enumerate() {
                match self.feature_names.get(i) {
                    Some(name) if name == expected => {}
                    other => {
                        return Err(ModelError::FeatureNameMismatch {
                            index: i,
                            expected,
                            got: other.cloned(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Probability that the student graduates, given an already-normalized
    /// feature vector. Pure: identical input always yields the identical
    /// probability.
    pub fn probability(&self, values: &[f64; FEATURE_COUNT]) -> f64 {
        sigmoid(dot(&self.weights, values) + self.bias)
    }
}

#[derive(Debug)]
pub enum ModelError {
    DimensionMismatch {
        expected: usize,
        got: usize,
    },
    InvalidThreshold(f64),
    NonFiniteWeight {
        index: usize,
        value: f64,
    },
    NonFiniteBias(f64),
    FeatureNameMismatch {
        index: usize,
        expected: &'static str,
        got: Option<String>,
    },
    ParseJson(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "weight dimension mismatch: expected {expected}, got {got}"
                )
            }
            Self::InvalidThreshold(t) => write!(f, "threshold {t} not in [0, 1]"),
            Self::NonFiniteWeight { index, value } => {
                write!(f, "non-finite weight at index {index}: {value}")
            }
            Self::NonFiniteBias(b) => write!(f, "non-finite bias: {b}"),
            Self::FeatureNameMismatch {
                index,
                expected,
                got,
            } => {
                write!(
                    f,
                    "feature name at index {index} is {got:?}, expected {expected:?}"
                )
            }
            Self::ParseJson(e) => write!(f, "model JSON parse error: {e}"),
            Self::Io(e) => write!(f, "model file IO error: {e}"),
        }
    }
}

impl std::error::Error for ModelError {}
