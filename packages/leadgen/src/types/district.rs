use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::ContactRecord;

/// One school district, assembled from one or more discovery sources.
///
/// Created when first observed by any source, filled in by fusion and
/// domain resolution, and finally given contacts by enrichment. Never
/// deleted within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictRecord {
    /// Display name; the dedup key after normalization.
    pub name: String,
    /// Canonical internet domain, once known.
    pub domain: Option<String>,
    /// Full website URL when a source provided one.
    pub website: Option<String>,
    pub city: Option<String>,
    /// Student enrollment; 0 when unknown.
    #[serde(default)]
    pub enrollment: u32,
    /// Two-letter state code, applied at finalization.
    pub state: Option<String>,
    /// Which sources contributed data. Provenance only, never a dedup key.
    #[serde(default)]
    pub source_tags: BTreeSet<String>,
    #[serde(default)]
    pub contacts: Vec<ContactRecord>,
    /// Stamped by the pipeline when the record is finalized.
    pub scraped_at: Option<DateTime<Utc>>,
}

impl DistrictRecord {
    /// A bare record carrying only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: None,
            website: None,
            city: None,
            enrollment: 0,
            state: None,
            source_tags: BTreeSet::new(),
            contacts: Vec::new(),
            scraped_at: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_enrollment(mut self, enrollment: u32) -> Self {
        self.enrollment = enrollment;
        self
    }

    pub fn with_source_tag(mut self, tag: impl Into<String>) -> Self {
        self.source_tags.insert(tag.into());
        self
    }

    /// The dedup key for this record.
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    /// Fill `domain` from `website` if the domain is not already set.
    pub fn derive_domain_from_website(&mut self) {
        if self.domain.is_none() {
            if let Some(website) = &self.website {
                self.domain = domain_from_url(website);
            }
        }
    }
}

/// Normalize a district name into its dedup key: trim, collapse internal
/// whitespace, lowercase.
///
/// Exact-match only. Differently formatted names for the same district
/// ("Frisco ISD" vs "Frisco Independent School District") produce distinct
/// keys and therefore distinct records.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Extract the bare domain from a URL: strip scheme and a leading `www.`.
pub fn domain_from_url(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = rest.split('/').next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_collapses() {
        assert_eq!(normalize_name("  Frisco   ISD "), "frisco isd");
        assert_eq!(normalize_name("Frisco ISD"), "frisco isd");
    }

    #[test]
    fn test_normalize_keeps_distinct_formattings_distinct() {
        assert_ne!(
            normalize_name("Frisco ISD"),
            normalize_name("Frisco Independent School District")
        );
    }

    #[test]
    fn test_domain_from_url() {
        assert_eq!(
            domain_from_url("https://www.friscoisd.org/about"),
            Some("friscoisd.org".to_string())
        );
        assert_eq!(
            domain_from_url("http://leanderisd.org"),
            Some("leanderisd.org".to_string())
        );
        assert_eq!(domain_from_url("https://"), None);
    }

    #[test]
    fn test_derive_domain_respects_existing() {
        let mut record = DistrictRecord::new("Keller ISD")
            .with_domain("kellerisd.net")
            .with_website("https://www.other.org");
        record.derive_domain_from_website();
        assert_eq!(record.domain.as_deref(), Some("kellerisd.net"));
    }
}
