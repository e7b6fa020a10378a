use std::fmt;

use baseline::FeatureBaseline;

use crate::record::{FEATURE_COUNT, FEATURE_NAMES};

/// Per-column standardization transform fitted from the feature baseline.
///
/// Reproduces the normalization applied when the classifier was trained:
/// subtract the column mean, divide by the column's population standard
/// deviation. Fitted once per baseline load and reused for every
/// prediction in the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl Scaler {
    /// Fit the transform from a loaded baseline.
    ///
    /// The baseline columns must match `FEATURE_NAMES` in count and order;
    /// nothing beyond that is (or can be) checked. Deterministic: the same
    /// baseline yields bit-identical parameters on every fit.
    pub fn fit(baseline: &FeatureBaseline) -> Result<Self, ScalerError> {
        let columns = baseline.columns();
        if columns.len() != FEATURE_COUNT {
            return Err(ScalerError::ColumnCountMismatch {
                expected: FEATURE_COUNT,
                got: columns.len(),
            });
        }
        for (index, expected) in FEATURE_NAMES.iter().copied().enumerate() {
            if columns[index] != expected {
                return Err(ScalerError::ColumnOrderMismatch {
                    index,
                    expected,
                    got: columns[index].clone(),
                });
            }
        }

        let stats = baseline.column_stats();
        let mut mean = [0.0f64; FEATURE_COUNT];
        let mut scale = [1.0f64; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            mean[i] = stats.mean[i];
            // A constant column carries no information; unit scale keeps
            // the transform finite.
            scale[i] = if stats.stddev[i] == 0.0 {
                1.0
            } else {
                stats.stddev[i]
            };
        }

        Ok(Self { mean, scale })
    }

    /// Apply the fitted transform to one record's values.
    pub fn transform(&self, values: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut out = [0.0f64; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            out[i] = (values[i] - self.mean[i]) / self.scale[i];
        }
        out
    }

    pub fn mean(&self) -> &[f64; FEATURE_COUNT] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64; FEATURE_COUNT] {
        &self.scale
    }
}

#[derive(Debug)]
pub enum ScalerError {
    ColumnCountMismatch {
        expected: usize,
        got: usize,
    },
    ColumnOrderMismatch {
        index: usize,
        expected: &'static str,
        got: String,
    },
}

impl fmt::Display for ScalerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnCountMismatch { expected, got } => {
                write!(f, "baseline has {got} feature columns, expected {expected}")
            }
            Self::ColumnOrderMismatch {
                index,
                expected,
                got,
            } => {
                write!(
                    f,
                    "baseline column {index} is {got:?}, expected {expected:?}"
                )
            }
        }
    }
}

impl std::error::Error for ScalerError {}
