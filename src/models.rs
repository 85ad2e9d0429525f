use serde::{Deserialize, Serialize};

use crate::scrape::types::ContactInfo;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Universal sentinel for a field that could not be determined.
pub const NOT_FOUND: &str = "Not found";

/// One output row. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollegeRecord {
    #[serde(rename = "College Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Departments")]
    pub departments: String,
    #[serde(rename = "Website")]
    pub website: String,
}

impl CollegeRecord {
    /// Collapses per-field outcomes to the sentinel at the output boundary.
    pub fn resolved(name: &str, contact: ContactInfo) -> Self {
        Self {
            name: name.to_string(),
            address: contact.address.into_cell(),
            email: contact.email.into_cell(),
            phone: contact.phone.into_cell(),
            departments: contact.departments.into_cell(),
            website: contact.website,
        }
    }

    /// Record for a name whose website could not be resolved. Website stays
    /// empty; every contact field carries the sentinel.
    pub fn unresolved(name: &str) -> Self {
        Self {
            name: name.to_string(),
            address: NOT_FOUND.to_string(),
            email: NOT_FOUND.to_string(),
            phone: NOT_FOUND.to_string(),
            departments: NOT_FOUND.to_string(),
            website: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::types::{ContactInfo, FieldOutcome};

    #[test]
    fn unresolved_record_has_empty_website_and_sentinels() {
        let record = CollegeRecord::unresolved("Ghost College");
        assert_eq!(record.name, "Ghost College");
        assert_eq!(record.website, "");
        assert_eq!(record.address, NOT_FOUND);
        assert_eq!(record.email, NOT_FOUND);
        assert_eq!(record.phone, NOT_FOUND);
        assert_eq!(record.departments, NOT_FOUND);
    }

    #[test]
    fn resolved_record_collapses_failures_to_sentinel() {
        let contact = ContactInfo {
            website: "https://school.edu".to_string(),
            address: FieldOutcome::Failed("timeout".to_string()),
            email: FieldOutcome::Found("a@school.edu".to_string()),
            phone: FieldOutcome::NotFound,
            departments: FieldOutcome::Found("Arts".to_string()),
        };
        let record = CollegeRecord::resolved("School", contact);
        assert_eq!(record.website, "https://school.edu");
        assert_eq!(record.address, NOT_FOUND);
        assert_eq!(record.email, "a@school.edu");
        assert_eq!(record.phone, NOT_FOUND);
        assert_eq!(record.departments, "Arts");
    }
}
