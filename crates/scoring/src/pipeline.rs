use std::fmt;
use std::path::{Path, PathBuf};

use baseline::{BaselineError, FeatureBaseline};
use serde::Serialize;

use crate::model::{Classifier, ModelError};
use crate::record::{StudentRecord, FEATURE_NAMES};
use crate::scaler::{Scaler, ScalerError};

/// Binary prediction outcome. Encodes as 1 = Graduate, 0 = Dropout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Graduate,
    Dropout,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Self::Graduate => 1,
            Self::Dropout => 0,
        }
    }

    /// User-facing message for the form boundary to display.
    pub fn message(self) -> &'static str {
        match self {
            Self::Graduate => "The model predicts this student is likely to graduate.",
            Self::Dropout => "The model predicts this student is at risk of dropping out.",
        }
    }
}

/// Result of scoring one student record.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub outcome: Outcome,
    /// Model probability of graduating, in [0, 1].
    pub probability: f64,
    /// Top contributing features on the normalized record, signed.
    pub top_features: Vec<(String, f64)>,
}

/// The prediction pipeline: the standardization transform fitted once
/// from the feature baseline plus the frozen classifier.
///
/// Both artifacts are loaded at construction and read-only afterwards;
/// `predict` is stateless and can be called any number of times.
#[derive(Debug, Clone)]
pub struct Pipeline {
    scaler: Scaler,
    classifier: Classifier,
    baseline_rows: usize,
}

impl Pipeline {
    /// Load both artifacts and fit the standardization transform.
    ///
    /// Halts before accepting any record if either artifact is absent:
    /// inference must never run against missing state.
    pub fn load(
        baseline_path: &Path,
        model_path: &Path,
        label_column: &str,
    ) -> Result<Self, PipelineError> {
        if !baseline_path.exists() {
            return Err(PipelineError::MissingArtifact {
                kind: ArtifactKind::Baseline,
                path: baseline_path.to_path_buf(),
            });
        }
        if !model_path.exists() {
            return Err(PipelineError::MissingArtifact {
                kind: ArtifactKind::Model,
                path: model_path.to_path_buf(),
            });
        }

        let baseline = FeatureBaseline::load_csv(baseline_path, label_column)?;
        let scaler = Scaler::fit(&baseline)?;
        let classifier = Classifier::from_file(model_path)?;

        Ok(Self {
            scaler,
            classifier,
            baseline_rows: baseline.row_count(),
        })
    }

    /// Assemble a pipeline from already-constructed parts.
    pub fn from_parts(scaler: Scaler, classifier: Classifier) -> Result<Self, PipelineError> {
        classifier.validate()?;
        Ok(Self {
            scaler,
            classifier,
            baseline_rows: 0,
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn baseline_rows(&self) -> usize {
        self.baseline_rows
    }

    /// Score one record: scale, classify, label.
    pub fn predict(&self, record: &StudentRecord) -> Prediction {
        let scaled = self.scaler.transform(&record.values);
        let probability = self.classifier.probability(&scaled);
        let outcome = if probability >= self.classifier.threshold {
            Outcome::Graduate
        } else {
            Outcome::Dropout
        };

        // Top contributing features (for the audit trail)
        let mut contributions: Vec<(String, f64)> = FEATURE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let contribution = self.classifier.weights[i] * scaled[i];
                (name.to_string(), contribution)
            })
            .filter(|(_, c)| c.abs() > 0.01)
            .collect();
        contributions
            .sort_by(|a, b| b.1.abs().partial_cmp(&a.1.abs()).unwrap_or(std::cmp::Ordering::Equal));
        contributions.truncate(5);

        Prediction {
            outcome,
            probability,
            top_features: contributions,
        }
    }
}

/// Which startup artifact a load failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Baseline,
    Model,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => write!(f, "feature baseline"),
            Self::Model => write!(f, "classifier model"),
        }
    }
}

#[derive(Debug)]
pub enum PipelineError {
    MissingArtifact { kind: ArtifactKind, path: PathBuf },
    Baseline(BaselineError),
    Scaler(ScalerError),
    Model(ModelError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArtifact { kind, path } => {
                write!(f, "{kind} artifact missing: {}", path.display())
            }
            Self::Baseline(e) => write!(f, "{e}"),
            Self::Scaler(e) => write!(f, "{e}"),
            Self::Model(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<BaselineError> for PipelineError {
    fn from(e: BaselineError) -> Self {
        Self::Baseline(e)
    }
}

impl From<ScalerError> for PipelineError {
    fn from(e: ScalerError) -> Self {
        Self::Scaler(e)
    }
}

impl From<ModelError> for PipelineError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}
