use std::fmt;

/// Static label → code tables for the categorical form fields.
///
/// Codes follow the institutional dataset encoding the classifier was
/// trained against; they are fixed, non-contiguous, and never updated at
/// runtime. Label spellings are the exact strings the enrollment form
/// presents, including historical quirks.
pub const GENDER_CODES: [(&str, i64); 2] = [("Male", 1), ("Female", 0)];

pub const MARITAL_STATUS_CODES: [(&str, i64); 6] = [
    ("Single", 1),
    ("Married", 2),
    ("Widower", 3),
    ("Divorced", 4),
    ("Facto Union", 5),
    ("Legally Seperated", 6),
];

pub const APPLICATION_MODE_CODES: [(&str, i64); 18] = [
    ("1st Phase - General Contingent", 1),
    ("1st Phase - Special Contingent (Azores Island)", 5),
    ("1st Phase - Special Contingent (Madeira Island)", 16),
    ("2nd Phase - General Contingent", 17),
    ("3rd Phase - General Contingent", 18),
    ("Ordinance No. 612/93", 2),
    ("Ordinance No. 854-B/99", 10),
    ("Ordinance No. 533-A/99, Item B2 (Different Plan)", 26),
    ("Ordinance No. 533-A/99, Item B3 (Other Institution)", 27),
    ("International Student (Bachelor)", 15),
    ("Over 23 Years Old", 39),
    ("Transfer", 42),
    ("Change of Course", 43),
    ("Holders of Other Higher Courses", 7),
    ("Short Cycle Diploma Holders", 53),
    ("Technological Specialization Diploma Holders", 44),
    ("Change of Institution/Course", 51),
    ("Change of Institution/Course (International)", 57),
];

/// A categorical label that is not present in its lookup table.
///
/// Lookups fail closed: an unknown label is reported here instead of
/// flowing downstream as a silently undefined field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryError {
    pub field: &'static str,
    pub label: String,
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no {} code for label {:?}", self.field, self.label)
    }
}

impl std::error::Error for CategoryError {}

fn lookup(table: &[(&str, i64)], field: &'static str, label: &str) -> Result<i64, CategoryError> {
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, code)| *code)
        .ok_or_else(|| CategoryError {
            field,
            label: label.to_string(),
        })
}

pub fn gender_code(label: &str) -> Result<i64, CategoryError> {
    lookup(&GENDER_CODES, "gender", label)
}

pub fn marital_status_code(label: &str) -> Result<i64, CategoryError> {
    lookup(&MARITAL_STATUS_CODES, "marital_status", label)
}

pub fn application_mode_code(label: &str) -> Result<i64, CategoryError> {
    lookup(&APPLICATION_MODE_CODES, "application_mode", label)
}
