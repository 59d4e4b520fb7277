//! Wikipedia district list source.
//!
//! Backup source: the "List of school districts in Texas" article links
//! every district that has an article. Names only; no domains.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use tracing::{info, warn};

use super::clean_text;
use crate::error::{SourceError, SourceResult};
use crate::traits::DistrictSource;
use crate::types::DistrictRecord;

const LIST_URL: &str = "https://en.wikipedia.org/wiki/List_of_school_districts_in_Texas";

/// Link texts that identify a district article.
const DISTRICT_MARKERS: &[&str] = &["ISD", "CISD", "Independent School District", "Consolidated"];

pub struct WikipediaProvider {
    client: reqwest::Client,
    list_url: String,
    rate_limit_ms: u64,
}

impl Default for WikipediaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WikipediaProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            list_url: LIST_URL.to_string(),
            rate_limit_ms: 500,
        }
    }

    /// Point the provider at a different list URL (test servers).
    pub fn with_list_url(mut self, list_url: impl Into<String>) -> Self {
        self.list_url = list_url.into();
        self
    }

    pub fn with_rate_limit(mut self, ms: u64) -> Self {
        self.rate_limit_ms = ms;
        self
    }
}

/// Extract district names from the list article's wiki links.
fn parse_district_links(html: &str) -> Vec<String> {
    let link_pattern =
        Regex::new(r#"(?s)<a[^>]*href\s*=\s*["'](/wiki/[^"']+)["'][^>]*>(.*?)</a>"#).unwrap();

    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::new();

    for cap in link_pattern.captures_iter(html) {
        let href = cap[1].to_lowercase();
        if href.contains("disambiguation") {
            continue;
        }

        let text = clean_text(&cap[2]);
        if text.is_empty() || !DISTRICT_MARKERS.iter().any(|m| text.contains(m)) {
            continue;
        }

        if seen.insert(text.clone()) {
            names.push(text);
        }
    }

    names
}

#[async_trait]
impl DistrictSource for WikipediaProvider {
    async fn discover(&self) -> SourceResult<Vec<DistrictRecord>> {
        info!(url = %self.list_url, "Scraping Wikipedia district list");

        if self.rate_limit_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.rate_limit_ms)).await;
        }

        let resp = self
            .client
            .get(&self.list_url)
            .send()
            .await
            .map_err(|e| SourceError::Http(Box::new(e)))?;

        if !resp.status().is_success() {
            warn!(status = %resp.status(), "Wikipedia list returned non-success");
            return Ok(Vec::new());
        }

        let html = resp
            .text()
            .await
            .map_err(|e| SourceError::Http(Box::new(e)))?;

        let districts: Vec<DistrictRecord> = parse_district_links(&html)
            .into_iter()
            .map(|name| DistrictRecord::new(name).with_source_tag(self.name()))
            .collect();

        info!(count = districts.len(), "Wikipedia scrape complete");
        Ok(districts)
    }

    fn name(&self) -> &str {
        "wikipedia"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_district_links() {
        let html = r#"
            <a href="/wiki/Frisco_Independent_School_District">Frisco ISD</a>
            <a href="/wiki/Texas">Texas</a>
            <a href="/wiki/Hays_CISD">Hays CISD</a>
            <a href="/wiki/ISD_(disambiguation)">Frisco ISD</a>
            <a href="/wiki/Frisco_Independent_School_District">Frisco ISD</a>
        "#;

        let names = parse_district_links(html);

        assert_eq!(names, vec!["Frisco ISD", "Hays CISD"]);
    }
}
