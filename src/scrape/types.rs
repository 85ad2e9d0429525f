use crate::models::NOT_FOUND;

/// Outcome of a single field-extraction attempt. Failures keep their cause
/// until the record is formatted, where both misses collapse to the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Found(String),
    NotFound,
    Failed(String),
}

impl FieldOutcome {
    pub fn as_cell(&self) -> &str {
        match self {
            FieldOutcome::Found(value) => value,
            FieldOutcome::NotFound | FieldOutcome::Failed(_) => NOT_FOUND,
        }
    }

    pub fn into_cell(self) -> String {
        match self {
            FieldOutcome::Found(value) => value,
            FieldOutcome::NotFound | FieldOutcome::Failed(_) => NOT_FOUND.to_string(),
        }
    }
}

/// Contact fields recovered from one page. The website is always the URL the
/// extraction was asked for, even when the fetch itself failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub website: String,
    pub address: FieldOutcome,
    pub email: FieldOutcome,
    pub phone: FieldOutcome,
    pub departments: FieldOutcome,
}

impl ContactInfo {
    pub fn failed(url: &str, cause: &str) -> Self {
        Self {
            website: url.to_string(),
            address: FieldOutcome::Failed(cause.to_string()),
            email: FieldOutcome::Failed(cause.to_string()),
            phone: FieldOutcome::Failed(cause.to_string()),
            departments: FieldOutcome::Failed(cause.to_string()),
        }
    }
}
