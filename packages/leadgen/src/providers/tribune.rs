//! Texas Tribune schools explorer source.
//!
//! The Tribune indexes every Texas public school district, paginated by
//! first letter. Each district also has a detail page carrying enrollment,
//! an external website link, and a location line.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, info, warn};
use url::Url;

use super::clean_text;
use crate::error::SourceResult;
use crate::traits::DistrictSource;
use crate::types::DistrictRecord;

const BASE_URL: &str = "https://schools.texastribune.org";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Navigation link texts on the index pages that are not districts.
const NAV_LINK_TEXTS: &[&str] = &["Districts", "Schools", "?"];

pub struct TribuneProvider {
    client: reqwest::Client,
    base_url: String,
    rate_limit_ms: u64,
    /// Also fetch each district's detail page (slow).
    fetch_details: bool,
}

impl Default for TribuneProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TribuneProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: BASE_URL.to_string(),
            rate_limit_ms: 500,
            fetch_details: false,
        }
    }

    /// Point the provider at a different base URL (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_rate_limit(mut self, ms: u64) -> Self {
        self.rate_limit_ms = ms;
        self
    }

    /// Fetch per-district detail pages for enrollment/website/city.
    pub fn with_details(mut self, fetch_details: bool) -> Self {
        self.fetch_details = fetch_details;
        self
    }

    async fn pause(&self) {
        if self.rate_limit_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.rate_limit_ms)).await;
        }
    }

    async fn fetch_letter(&self, letter: char) -> SourceResult<Vec<(String, String)>> {
        let url = format!("{}/districts/?letter={}", self.base_url, letter);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| crate::error::SourceError::Http(Box::new(e)))?;

        if !resp.status().is_success() {
            debug!(letter = %letter, status = %resp.status(), "Index page returned non-success");
            return Ok(Vec::new());
        }

        let html = resp
            .text()
            .await
            .map_err(|e| crate::error::SourceError::Http(Box::new(e)))?;

        Ok(parse_index_links(&html))
    }

    async fn fetch_detail(&self, record: &mut DistrictRecord, detail_url: &str) {
        self.pause().await;

        let resp = match self.client.get(detail_url).send().await {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                debug!(url = %detail_url, status = %resp.status(), "Detail page returned non-success");
                return;
            }
            Err(e) => {
                debug!(url = %detail_url, error = %e, "Detail fetch failed");
                return;
            }
        };

        let html = match resp.text().await {
            Ok(html) => html,
            Err(e) => {
                debug!(url = %detail_url, error = %e, "Detail body read failed");
                return;
            }
        };

        apply_detail_fields(record, &html);
    }
}

/// Extract (district name, detail href) pairs from an index page.
fn parse_index_links(html: &str) -> Vec<(String, String)> {
    let link_pattern =
        Regex::new(r#"(?s)<a[^>]*href\s*=\s*["']([^"']*/districts/[^"']+)["'][^>]*>(.*?)</a>"#)
            .unwrap();

    let mut links = Vec::new();
    for cap in link_pattern.captures_iter(html) {
        let href = cap[1].to_string();
        let name = clean_text(&cap[2]);

        if name.is_empty() || NAV_LINK_TEXTS.contains(&name.as_str()) {
            continue;
        }
        let slug = href
            .split("/districts/")
            .next_back()
            .unwrap_or_default()
            .trim_matches('/');
        if slug.is_empty() {
            continue;
        }

        links.push((name, href));
    }
    links
}

/// Fill enrollment, website, and city from a detail page.
fn apply_detail_fields(record: &mut DistrictRecord, html: &str) {
    let enrollment_pattern = Regex::new(r"(?i)([\d,]+)\s*students").unwrap();
    if let Some(cap) = enrollment_pattern.captures(html) {
        if let Ok(enrollment) = cap[1].replace(',', "").parse::<u32>() {
            record.enrollment = enrollment;
        }
    }

    let website_pattern =
        Regex::new(r#"<a[^>]*href\s*=\s*["'](https?://[^"']+)["'][^>]*target\s*=\s*["']_blank["']"#)
            .unwrap();
    for cap in website_pattern.captures_iter(html) {
        let href = &cap[1];
        if !href.contains("texastribune") && !href.contains("facebook") {
            record.website = Some(href.to_string());
            break;
        }
    }

    let location_pattern =
        Regex::new(r#"(?s)class\s*=\s*["'][^"']*location[^"']*["'][^>]*>(.*?)<"#).unwrap();
    if let Some(cap) = location_pattern.captures(html) {
        let city = clean_text(&cap[1]);
        if !city.is_empty() {
            record.city = Some(city);
        }
    }
}

#[async_trait]
impl DistrictSource for TribuneProvider {
    async fn discover(&self) -> SourceResult<Vec<DistrictRecord>> {
        info!("Scraping Texas Tribune district index");

        let base = Url::parse(&self.base_url).map_err(|_| crate::error::SourceError::InvalidUrl {
            url: self.base_url.clone(),
        })?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut districts: Vec<(DistrictRecord, String)> = Vec::new();

        for letter in 'A'..='Z' {
            debug!(letter = %letter, "Fetching index page");
            self.pause().await;

            match self.fetch_letter(letter).await {
                Ok(links) => {
                    for (name, href) in links {
                        if !seen.insert(name.clone()) {
                            continue;
                        }
                        let Ok(detail_url) = base.join(&href) else {
                            continue;
                        };
                        let record = DistrictRecord::new(name).with_source_tag(self.name());
                        districts.push((record, detail_url.to_string()));
                    }
                }
                Err(e) => {
                    warn!(letter = %letter, error = %e, "Index page fetch failed");
                }
            }
        }

        info!(count = districts.len(), "Tribune index scrape complete");

        if self.fetch_details {
            info!("Fetching district detail pages");
            let total = districts.len();
            for (i, (record, detail_url)) in districts.iter_mut().enumerate() {
                if i % 20 == 0 {
                    debug!(progress = %format!("{}/{}", i, total), "Detail fetch progress");
                }
                self.fetch_detail(record, detail_url).await;
                record.derive_domain_from_website();
            }
        }

        Ok(districts.into_iter().map(|(record, _)| record).collect())
    }

    fn name(&self) -> &str {
        "tribune"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_links() {
        let html = r#"
            <nav><a href="/districts/">Districts</a></nav>
            <a href="/districts/frisco-isd/">Frisco ISD</a>
            <a href="/districts/allen-isd/"><span>Allen ISD</span></a>
            <a href="/districts/">?</a>
        "#;

        let links = parse_index_links(html);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0], ("Frisco ISD".to_string(), "/districts/frisco-isd/".to_string()));
        assert_eq!(links[1].0, "Allen ISD");
    }

    #[test]
    fn test_apply_detail_fields() {
        let html = r#"
            <p>Serving 67,000 students across Collin County.</p>
            <a href="https://www.texastribune.org/about" target="_blank">About</a>
            <a href="https://www.friscoisd.org" target="_blank">District website</a>
            <div class="district-location">Frisco</div>
        "#;

        let mut record = DistrictRecord::new("Frisco ISD");
        apply_detail_fields(&mut record, html);

        assert_eq!(record.enrollment, 67_000);
        assert_eq!(record.website.as_deref(), Some("https://www.friscoisd.org"));
        assert_eq!(record.city.as_deref(), Some("Frisco"));
    }

    #[test]
    fn test_detail_fields_absent() {
        let mut record = DistrictRecord::new("Frisco ISD");
        apply_detail_fields(&mut record, "<html><body>Nothing here</body></html>");

        assert_eq!(record.enrollment, 0);
        assert!(record.website.is_none());
        assert!(record.city.is_none());
    }
}
