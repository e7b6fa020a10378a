use std::fmt;

use serde::Serialize;

use scoring::{CategoryError, Outcome, Pipeline, Selections, StudentRecord};

/// One evaluated submission, as written back to the form boundary.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub label: Outcome,
    pub message: &'static str,
    pub probability: f64,
    pub top_features: Vec<(String, f64)>,
}

/// A submission the boundary refused; the run continues with the next one.
#[derive(Debug, Serialize)]
pub struct RejectionResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum SubmissionError {
    Parse(serde_json::Error),
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    Category(CategoryError),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "malformed submission: {e}"),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "{field} = {value} outside allowed range {min}..={max}")
            }
            Self::Category(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Parse, validate, and score one submission line.
pub fn evaluate(pipeline: &Pipeline, line: &str) -> Result<PredictionResponse, SubmissionError> {
    let selections: Selections = serde_json::from_str(line).map_err(SubmissionError::Parse)?;
    check_bounds(&selections)?;
    let record = StudentRecord::assemble(&selections).map_err(SubmissionError::Category)?;
    let prediction = pipeline.predict(&record);

    Ok(PredictionResponse {
        label: prediction.outcome,
        message: prediction.outcome.message(),
        probability: prediction.probability,
        top_features: prediction.top_features,
    })
}

pub fn rejection(err: &SubmissionError) -> RejectionResponse {
    RejectionResponse {
        error: err.to_string(),
    }
}

/// Integer bounds the enrollment form widgets enforce, reproduced at the
/// submission boundary so a record outside them never reaches the model.
fn check_bounds(s: &Selections) -> Result<(), SubmissionError> {
    let checks: [(&'static str, u32, u32, u32); 11] = [
        ("age_at_enrollment", s.age_at_enrollment, 17, 70),
        (
            "previous_qualification_grade",
            s.previous_qualification_grade,
            0,
            200,
        ),
        ("admission_grade", s.admission_grade, 0, 200),
        (
            "curricular_units_1st_sem_enrolled",
            s.curricular_units_1st_sem_enrolled,
            0,
            26,
        ),
        (
            "curricular_units_1st_sem_approved",
            s.curricular_units_1st_sem_approved,
            0,
            26,
        ),
        (
            "curricular_units_1st_sem_grade",
            s.curricular_units_1st_sem_grade,
            0,
            20,
        ),
        (
            "curricular_units_2nd_sem_enrolled",
            s.curricular_units_2nd_sem_enrolled,
            0,
            23,
        ),
        (
            "curricular_units_2nd_sem_evaluations",
            s.curricular_units_2nd_sem_evaluations,
            0,
            33,
        ),
        (
            "curricular_units_2nd_sem_approved",
            s.curricular_units_2nd_sem_approved,
            0,
            20,
        ),
        (
            "curricular_units_2nd_sem_grade",
            s.curricular_units_2nd_sem_grade,
            0,
            20,
        ),
        (
            "curricular_units_2nd_sem_without_evaluations",
            s.curricular_units_2nd_sem_without_evaluations,
            0,
            12,
        ),
    ];

    for (field, value, min, max) in checks {
        if value < min || value > max {
            return Err(SubmissionError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
    }
    Ok(())
}
