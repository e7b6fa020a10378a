pub mod categories;
mod math;
pub mod model;
pub mod pipeline;
pub mod record;
pub mod scaler;

pub use categories::{
    application_mode_code, gender_code, marital_status_code, CategoryError,
    APPLICATION_MODE_CODES, GENDER_CODES, MARITAL_STATUS_CODES,
};
pub use model::{Classifier, ModelError};
pub use pipeline::{ArtifactKind, Outcome, Pipeline, PipelineError, Prediction};
pub use record::{Selections, StudentRecord, FEATURE_COUNT, FEATURE_NAMES};
pub use scaler::{Scaler, ScalerError};
