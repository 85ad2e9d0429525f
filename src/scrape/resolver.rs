// src/scrape/resolver.rs
use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::{HttpConfig, SearchConfig};

pub struct WebsiteResolver {
    client: Client,
    endpoint: String,
    max_results: usize,
    allowed_suffixes: Vec<String>,
    blacklist: Vec<String>,
    result_selector: Selector,
}

impl WebsiteResolver {
    pub fn new(http: &HttpConfig, config: &SearchConfig) -> Self {
        let client = Client::builder()
            .user_agent(http.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
            max_results: config.max_results,
            allowed_suffixes: config.allowed_suffixes.clone(),
            blacklist: config.blacklist.clone(),
            // Bing organic results
            result_selector: Selector::parse("li.b_algo h2 a").unwrap(),
        }
    }

    /// Best-effort website lookup. Any transport or HTTP failure is logged
    /// and reported as not-found; nothing propagates and nothing retries.
    pub async fn resolve(&self, name: &str) -> Option<String> {
        let query = format!("{} official site", name);
        info!("🔍 Searching for: {}", query);

        let response = match self
            .client
            .get(&self.endpoint)
            .query(&[("q", query.as_str())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("❌ Search failed for {}: {}", name, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("❌ Search returned HTTP {} for {}", response.status(), name);
            return None;
        }

        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                warn!("❌ Failed to read search results for {}: {}", name, e);
                return None;
            }
        };

        let candidate = self.select_candidate(&html);
        if candidate.is_none() {
            info!("🔍 No matching result found for {}", name);
        }
        candidate
    }

    /// Walks the first `max_results` organic results and returns the first
    /// link whose host passes the domain filters.
    pub fn select_candidate(&self, results_html: &str) -> Option<String> {
        let document = Html::parse_document(results_html);

        for link in document.select(&self.result_selector).take(self.max_results) {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let Some(host) = host_of(href) else {
                debug!("⛔ Skipped (unparseable): {}", href);
                continue;
            };

            if !self.suffix_allowed(&host) {
                debug!("⛔ Skipped (not allowed domain): {}", href);
            } else if self.is_blacklisted(&host) {
                debug!("⛔ Skipped (blacklisted): {}", href);
            } else {
                info!("✅ Found: {}", href);
                return Some(href.to_string());
            }
        }

        None
    }

    /// Trailing-characters match only; `host` is already lowercased.
    pub fn suffix_allowed(&self, host: &str) -> bool {
        self.allowed_suffixes
            .iter()
            .any(|suffix| host.ends_with(suffix.as_str()))
    }

    /// Substring match anywhere in the host. Blacklist beats the allow list.
    pub fn is_blacklisted(&self, host: &str) -> bool {
        self.blacklist.iter().any(|bad| host.contains(bad.as_str()))
    }
}

fn host_of(href: &str) -> Option<String> {
    Url::parse(href)
        .ok()
        .and_then(|url| url.host_str().map(|host| host.to_lowercase()))
}
