//! Best-effort domain resolution for district names.
//!
//! Resolution order, first success wins: curated override table, then
//! generated candidate domains tested with a lightweight existence probe.
//! Not-found is a valid outcome, never an error.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::traits::DomainProbe;
use crate::types::ResolverConfig;

/// Resolves a district name to a best-guess internet domain.
pub struct DomainResolver<P: DomainProbe> {
    config: ResolverConfig,
    probe: P,
}

impl<P: DomainProbe> DomainResolver<P> {
    pub fn new(config: ResolverConfig, probe: P) -> Self {
        Self { config, probe }
    }

    /// Resolve a district name to a domain, or `None` when unknown.
    ///
    /// Overrides are returned without probing. Candidate probes run in
    /// the configured pattern order with a fixed pause before each one.
    pub async fn resolve(&self, name: &str) -> Option<String> {
        if let Some(domain) = self.config.override_for(name) {
            debug!(name, domain, "Domain resolved from override table");
            return Some(domain.to_string());
        }

        let slug = make_slug(name, &self.config.substitutions);
        if slug.is_empty() {
            return None;
        }

        for pattern in &self.config.patterns {
            let candidate = pattern.replace("{slug}", &slug);

            if self.config.probe_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.probe_delay_ms)).await;
            }

            if self.probe.exists(&candidate).await {
                debug!(name, domain = %candidate, "Domain resolved from candidate probe");
                return Some(candidate);
            }
        }

        debug!(name, slug, "No domain candidate answered");
        None
    }
}

/// Turn a district name into a candidate slug: lowercase, apply the phrase
/// substitutions in order, strip everything non-alphanumeric.
pub fn make_slug(name: &str, substitutions: &[(String, String)]) -> String {
    let mut slug = name.to_lowercase();
    for (phrase, replacement) in substitutions {
        slug = slug.replace(phrase.as_str(), replacement);
    }
    slug.retain(|c| c.is_ascii_alphanumeric());
    slug
}

/// Live existence probe: header-only request with a short timeout,
/// redirects followed, any status below 400 counts as existing.
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

#[async_trait]
impl DomainProbe for HttpProbe {
    async fn exists(&self, domain: &str) -> bool {
        let url = if domain.starts_with("www.") {
            format!("https://{}", domain)
        } else {
            format!("https://www.{}", domain)
        };

        match self.client.head(&url).send().await {
            Ok(resp) => resp.status().as_u16() < 400,
            Err(e) => {
                debug!(domain, error = %e, "Domain probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticProbe;
    use crate::types::ResolverConfig;

    fn fast_config() -> ResolverConfig {
        let mut config = ResolverConfig::texas_defaults();
        config.probe_delay_ms = 0;
        config
    }

    #[test]
    fn test_make_slug_isd() {
        let config = ResolverConfig::new();
        assert_eq!(make_slug("Frisco ISD", &config.substitutions), "friscoisd");
        assert_eq!(
            make_slug("Frisco Independent School District", &config.substitutions),
            "friscoisd"
        );
    }

    #[test]
    fn test_make_slug_cisd_applies_before_isd() {
        let config = ResolverConfig::new();
        assert_eq!(
            make_slug(
                "Hays Consolidated Independent School District",
                &config.substitutions
            ),
            "hayscisd"
        );
    }

    #[test]
    fn test_make_slug_strips_punctuation() {
        let config = ResolverConfig::new();
        assert_eq!(
            make_slug("Grapevine-Colleyville ISD", &config.substitutions),
            "grapevinecolleyvilleisd"
        );
    }

    #[tokio::test]
    async fn test_override_wins_without_probing() {
        let probe = StaticProbe::new();
        let resolver = DomainResolver::new(fast_config(), probe.clone());

        let domain = resolver.resolve("Leander ISD").await;

        assert_eq!(domain.as_deref(), Some("leanderisd.org"));
        assert!(probe.probed().is_empty());
    }

    #[tokio::test]
    async fn test_candidate_order_first_success_wins() {
        let probe = StaticProbe::new()
            .with_live("unknownisd.net")
            .with_live("unknownisd.us");
        let resolver = DomainResolver::new(fast_config(), probe.clone());

        let domain = resolver.resolve("Unknown ISD").await;

        assert_eq!(domain.as_deref(), Some("unknownisd.net"));
        // .org probed first and missed; .us never reached.
        assert_eq!(probe.probed(), vec!["unknownisd.org", "unknownisd.net"]);
    }

    #[tokio::test]
    async fn test_all_candidates_fail_yields_none() {
        let probe = StaticProbe::new();
        let resolver = DomainResolver::new(fast_config(), probe.clone());

        let domain = resolver.resolve("Unknown ISD").await;

        assert!(domain.is_none());
        assert_eq!(probe.probed().len(), 7);
    }
}
