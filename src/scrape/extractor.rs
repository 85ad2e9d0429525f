// src/scrape/extractor.rs
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use scraper::Html;
use tracing::{debug, info, warn};

use crate::config::{FetchConfig, HttpConfig};
use crate::scrape::types::{ContactInfo, FieldOutcome};

const DEPARTMENT_KEYWORDS: [&str; 12] = [
    "Engineering",
    "Science",
    "Math",
    "Arts",
    "Business",
    "Psychology",
    "Education",
    "Health",
    "Nursing",
    "Computer",
    "Programs",
    "Departments",
];

pub struct ContactExtractor {
    client: Client,
    email_regex: Regex,
    phone_regex: Regex,
    address_regex: Regex,
}

impl ContactExtractor {
    pub fn new(http: &HttpConfig, config: &FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(http.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            email_regex: Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap(),
            phone_regex: Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap(),
            // Street number, street words, 2-letter state, 5-digit zip.
            // Knowingly narrow; inherited heuristic.
            address_regex: Regex::new(r"\d{2,5}\s[\w\s]+,\s?[A-Z]{2}\s\d{5}").unwrap(),
        }
    }

    /// Fetches the page and runs field extraction over its visible text.
    /// Transport errors and non-2xx responses come back as a fully-failed
    /// ContactInfo; the batch never sees an Err from here.
    pub async fn extract(&self, url: &str) -> ContactInfo {
        debug!("Fetching: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("❌ Failed to access {}: {}", url, e);
                return ContactInfo::failed(url, &e.to_string());
            }
        };

        if !response.status().is_success() {
            warn!("❌ HTTP {} from {}", response.status(), url);
            return ContactInfo::failed(url, &format!("HTTP {}", response.status()));
        }

        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                warn!("❌ Failed to read body of {}: {}", url, e);
                return ContactInfo::failed(url, &e.to_string());
            }
        };

        let contact = self.extract_from_html(url, &html);
        info!(
            "📋 Extracted from {}: email={}, phone={}, address={}, departments={}",
            url,
            contact.email.as_cell(),
            contact.phone.as_cell(),
            contact.address.as_cell(),
            contact.departments.as_cell(),
        );
        contact
    }

    pub fn extract_from_html(&self, url: &str, html: &str) -> ContactInfo {
        let text = visible_text(html);
        self.extract_from_text(url, &text)
    }

    /// Independent single-match searches; each field takes the first match
    /// anywhere in the text.
    pub fn extract_from_text(&self, url: &str, text: &str) -> ContactInfo {
        ContactInfo {
            website: url.to_string(),
            email: first_match(&self.email_regex, text),
            phone: first_match(&self.phone_regex, text),
            address: first_match(&self.address_regex, text),
            departments: departments(text),
        }
    }
}

fn first_match(regex: &Regex, text: &str) -> FieldOutcome {
    match regex.find(text) {
        Some(found) => FieldOutcome::Found(found.as_str().to_string()),
        None => FieldOutcome::NotFound,
    }
}

/// Case-insensitive keyword scan. Keyword-list order is kept so the joined
/// value is deterministic.
fn departments(text: &str) -> FieldOutcome {
    let haystack = text.to_lowercase();
    let hits: Vec<&str> = DEPARTMENT_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .collect();

    if hits.is_empty() {
        FieldOutcome::NotFound
    } else {
        FieldOutcome::Found(hits.join(", "))
    }
}

/// Flattens the document to its text nodes, joined with single spaces and
/// whitespace-normalized.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FetchConfig, HttpConfig};

    fn extractor() -> ContactExtractor {
        ContactExtractor::new(&HttpConfig::default(), &FetchConfig::default())
    }

    #[test]
    fn visible_text_strips_tags_and_normalizes_whitespace() {
        let html = "<html><body><h1>Test   University</h1>\n<p>Contact <b>us</b></p></body></html>";
        assert_eq!(visible_text(html), "Test University Contact us");
    }

    #[test]
    fn extracts_single_email_verbatim() {
        let extractor = extractor();
        let contact =
            extractor.extract_from_text("https://school.edu", "Write to contact@school.edu today");
        assert_eq!(
            contact.email,
            FieldOutcome::Found("contact@school.edu".to_string())
        );
    }

    #[test]
    fn department_case_variants_dedupe() {
        let extractor = extractor();
        let contact = extractor.extract_from_text(
            "https://school.edu",
            "Engineering department. Also engineering clubs.",
        );
        assert_eq!(
            contact.departments,
            FieldOutcome::Found("Engineering".to_string())
        );
    }

    #[test]
    fn address_pattern_matches_state_and_zip() {
        let extractor = extractor();
        let contact = extractor.extract_from_text(
            "https://school.edu",
            "Visit 123 Main Street, CA 90210 for a tour",
        );
        assert_eq!(
            contact.address,
            FieldOutcome::Found("123 Main Street, CA 90210".to_string())
        );
    }

    #[test]
    fn empty_text_yields_not_found_everywhere() {
        let extractor = extractor();
        let contact = extractor.extract_from_text("https://school.edu", "");
        assert_eq!(contact.website, "https://school.edu");
        assert_eq!(contact.email, FieldOutcome::NotFound);
        assert_eq!(contact.phone, FieldOutcome::NotFound);
        assert_eq!(contact.address, FieldOutcome::NotFound);
        assert_eq!(contact.departments, FieldOutcome::NotFound);
    }

    #[test]
    fn sample_page_extracts_expected_fields() {
        let extractor = extractor();
        let text = "Reach us at info@testuniversity.edu or call (555) 123-4567. \
                    Programs in Engineering and Business.";
        let contact = extractor.extract_from_text("https://testuniversity.edu", text);
        assert_eq!(
            contact.email,
            FieldOutcome::Found("info@testuniversity.edu".to_string())
        );
        assert_eq!(
            contact.phone,
            FieldOutcome::Found("(555) 123-4567".to_string())
        );
        assert_eq!(contact.address, FieldOutcome::NotFound);
        assert_eq!(
            contact.departments,
            FieldOutcome::Found("Engineering, Business, Programs".to_string())
        );
    }
}
