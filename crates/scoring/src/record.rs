use serde::Deserialize;

use crate::categories::{
    application_mode_code, gender_code, marital_status_code, CategoryError,
};

/// Number of features in the classifier's input vector.
pub const FEATURE_COUNT: usize = 18;

/// Feature names in model input order.
///
/// This order is the training schema; the baseline CSV header must match
/// it exactly. The classifier and scaler are order-sensitive, not
/// name-sensitive, so a reordering would corrupt predictions silently.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Marital_status",
    "Application_mode",
    "Previous_qualification_grade",
    "Admission_grade",
    "Displaced",
    "Debtor",
    "Tuition_fees_up_to_date",
    "Gender",
    "Scholarship_holder",
    "Age_at_enrollment",
    "Curricular_units_1st_sem_enrolled",
    "Curricular_units_1st_sem_approved",
    "Curricular_units_1st_sem_grade",
    "Curricular_units_2nd_sem_enrolled",
    "Curricular_units_2nd_sem_evaluations",
    "Curricular_units_2nd_sem_approved",
    "Curricular_units_2nd_sem_grade",
    "Curricular_units_2nd_sem_without_evaluations",
];

/// Raw form selections as supplied by the form boundary.
///
/// Categorical fields arrive as the human-readable labels the form
/// presents; numeric fields arrive within the bounds the form widgets
/// enforce. Bound enforcement belongs to the form boundary, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct Selections {
    pub gender: String,
    pub marital_status: String,
    pub application_mode: String,
    pub previous_qualification_grade: u32,
    pub admission_grade: u32,
    pub displaced: bool,
    pub debtor: bool,
    pub tuition_fees_up_to_date: bool,
    pub scholarship_holder: bool,
    pub age_at_enrollment: u32,
    pub curricular_units_1st_sem_enrolled: u32,
    pub curricular_units_1st_sem_approved: u32,
    pub curricular_units_1st_sem_grade: u32,
    pub curricular_units_2nd_sem_enrolled: u32,
    pub curricular_units_2nd_sem_evaluations: u32,
    pub curricular_units_2nd_sem_approved: u32,
    pub curricular_units_2nd_sem_grade: u32,
    pub curricular_units_2nd_sem_without_evaluations: u32,
}

/// One student's profile in model input order.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub values: [f64; FEATURE_COUNT],
}

impl StudentRecord {
    /// Assemble the fixed-order record from raw form selections.
    ///
    /// Category labels are looked up fail-closed: an unknown label is an
    /// error, never a silently defaulted field.
    pub fn assemble(selections: &Selections) -> Result<Self, CategoryError> {
        let mut values = [0.0f64; FEATURE_COUNT];

        // Categorical codes
        values[0] = marital_status_code(&selections.marital_status)? as f64;
        values[1] = application_mode_code(&selections.application_mode)? as f64;

        // Entry grades
        values[2] = f64::from(selections.previous_qualification_grade);
        values[3] = f64::from(selections.admission_grade);

        // Binary indicators (1 or 0)
        values[4] = if selections.displaced { 1.0 } else { 0.0 };
        values[5] = if selections.debtor { 1.0 } else { 0.0 };
        values[6] = if selections.tuition_fees_up_to_date {
            1.0
        } else {
            0.0
        };
        values[7] = gender_code(&selections.gender)? as f64;
        values[8] = if selections.scholarship_holder { 1.0 } else { 0.0 };

        values[9] = f64::from(selections.age_at_enrollment);

        // Semester performance counters and grades
        values[10] = f64::from(selections.curricular_units_1st_sem_enrolled);
        values[11] = f64::from(selections.curricular_units_1st_sem_approved);
        values[12] = f64::from(selections.curricular_units_1st_sem_grade);
        values[13] = f64::from(selections.curricular_units_2nd_sem_enrolled);
        values[14] = f64::from(selections.curricular_units_2nd_sem_evaluations);
        values[15] = f64::from(selections.curricular_units_2nd_sem_approved);
        values[16] = f64::from(selections.curricular_units_2nd_sem_grade);
        values[17] = f64::from(selections.curricular_units_2nd_sem_without_evaluations);

        Ok(Self { values })
    }
}
