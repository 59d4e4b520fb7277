//! Contact enrichment: attaches named contacts to districts that have a
//! resolved domain.
//!
//! Every external call is preceded by a fixed pause and every failure is
//! caught per call, logged, and treated as "no data for this item". A
//! single district's failure never aborts the batch.

use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::traits::{ContactEnricher, PeopleSearch};
use crate::types::{ContactChannels, ContactRecord, DistrictRecord, EnrichmentConfig, Persona};

/// End-of-run counters for the enrichment stage.
#[derive(Debug, Default, Clone, Serialize)]
pub struct EnrichmentSummary {
    pub districts: usize,
    pub skipped_no_domain: usize,
    pub contacts: usize,
    pub superintendents: usize,
    pub safety_directors: usize,
}

/// Drives people search and per-person contact lookup for a batch of
/// districts.
pub struct Enricher<S: PeopleSearch, E: ContactEnricher> {
    config: EnrichmentConfig,
    search: S,
    contacts: E,
}

impl<S: PeopleSearch, E: ContactEnricher> Enricher<S, E> {
    pub fn new(config: EnrichmentConfig, search: S, contacts: E) -> Self {
        Self {
            config,
            search,
            contacts,
        }
    }

    /// Enrich one district in place.
    ///
    /// A district without a domain is skipped entirely: no external call,
    /// empty contact list, informational log only.
    pub async fn enrich_district(&self, district: &mut DistrictRecord) {
        let Some(domain) = district.domain.clone() else {
            info!(district = %district.name, "No domain, skipping enrichment");
            district.contacts = Vec::new();
            return;
        };

        info!(district = %district.name, domain = %domain, "Enriching district");

        self.pause().await;
        let stubs = match self
            .search
            .find_people(&domain, &self.config.target_titles, self.config.limit)
            .await
        {
            Ok(stubs) => stubs,
            Err(e) => {
                warn!(district = %district.name, domain = %domain, error = %e, "People search failed");
                Vec::new()
            }
        };

        let mut contacts = Vec::with_capacity(stubs.len());
        for stub in stubs {
            let persona = Persona::from_title(&stub.title);

            self.pause().await;
            let channels = match self.contacts.enrich(&stub, &domain).await {
                Ok(channels) => channels,
                Err(e) => {
                    warn!(person = %stub.full_name, domain = %domain, error = %e, "Contact enrichment failed");
                    ContactChannels::default()
                }
            };

            contacts.push(ContactRecord {
                full_name: stub.full_name,
                first_name: stub.first_name,
                last_name: stub.last_name,
                title: stub.title,
                persona,
                email: channels.email,
                phone: channels.phone,
                linkedin_url: channels.linkedin_url,
            });
        }

        district.contacts = contacts;
    }

    /// Enrich every district in sequence and return run counters.
    pub async fn run(&self, districts: &mut [DistrictRecord]) -> EnrichmentSummary {
        info!(count = districts.len(), "Starting enrichment");

        let total = districts.len();
        let mut summary = EnrichmentSummary::default();

        for (i, district) in districts.iter_mut().enumerate() {
            info!(
                progress = %format!("{}/{}", i + 1, total),
                district = %district.name,
                "Processing district"
            );

            let had_domain = district.domain.is_some();
            self.enrich_district(district).await;

            summary.districts += 1;
            if !had_domain {
                summary.skipped_no_domain += 1;
            }
            summary.contacts += district.contacts.len();
            summary.superintendents += district
                .contacts
                .iter()
                .filter(|c| c.persona == Persona::Superintendent)
                .count();
            summary.safety_directors += district
                .contacts
                .iter()
                .filter(|c| c.persona == Persona::SafetyDirector)
                .count();
        }

        info!(
            districts = summary.districts,
            contacts = summary.contacts,
            superintendents = summary.superintendents,
            safety_directors = summary.safety_directors,
            "Enrichment complete"
        );

        summary
    }

    async fn pause(&self) {
        if self.config.rate_limit_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.rate_limit_ms)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DirectoryPeopleSearch, StaticEnricher};
    use crate::types::PersonStub;

    fn fast_config() -> EnrichmentConfig {
        EnrichmentConfig {
            rate_limit_ms: 0,
            ..EnrichmentConfig::default()
        }
    }

    #[tokio::test]
    async fn test_missing_domain_skips_external_calls() {
        let search = DirectoryPeopleSearch::new();
        let enricher = Enricher::new(fast_config(), search.clone(), StaticEnricher::new());

        let mut district = DistrictRecord::new("Nowhere ISD");
        enricher.enrich_district(&mut district).await;

        assert!(district.contacts.is_empty());
        assert!(search.searched_domains().is_empty());
    }

    #[tokio::test]
    async fn test_contacts_get_personas_and_channels() {
        let search = DirectoryPeopleSearch::new().with_people(
            "leanderisd.org",
            vec![
                PersonStub {
                    full_name: "Bruce Gearing".into(),
                    first_name: "Bruce".into(),
                    last_name: "Gearing".into(),
                    title: "Superintendent".into(),
                },
                PersonStub {
                    full_name: "Sha Rogers".into(),
                    first_name: "Sha".into(),
                    last_name: "Rogers".into(),
                    title: "Chief of Safety & Security".into(),
                },
            ],
        );
        let enricher = Enricher::new(fast_config(), search, StaticEnricher::new());

        let mut district = DistrictRecord::new("Leander ISD").with_domain("leanderisd.org");
        enricher.enrich_district(&mut district).await;

        assert_eq!(district.contacts.len(), 2);
        assert_eq!(district.contacts[0].persona, Persona::Superintendent);
        assert_eq!(district.contacts[1].persona, Persona::SafetyDirector);
        assert_eq!(
            district.contacts[0].email.as_deref(),
            Some("bruce.gearing@leanderisd.org")
        );
    }

    #[tokio::test]
    async fn test_search_failure_yields_empty_contacts() {
        let search = DirectoryPeopleSearch::new().failing();
        let enricher = Enricher::new(fast_config(), search, StaticEnricher::new());

        let mut district = DistrictRecord::new("Keller ISD").with_domain("kellerisd.net");
        enricher.enrich_district(&mut district).await;

        assert!(district.contacts.is_empty());
    }

    #[tokio::test]
    async fn test_run_counts_personas() {
        let search = DirectoryPeopleSearch::new().with_people(
            "friscoisd.org",
            vec![PersonStub {
                full_name: "Mike Waldrip".into(),
                first_name: "Mike".into(),
                last_name: "Waldrip".into(),
                title: "Superintendent".into(),
            }],
        );
        let enricher = Enricher::new(fast_config(), search, StaticEnricher::new());

        let mut districts = vec![
            DistrictRecord::new("Frisco ISD").with_domain("friscoisd.org"),
            DistrictRecord::new("Nowhere ISD"),
        ];
        let summary = enricher.run(&mut districts).await;

        assert_eq!(summary.districts, 2);
        assert_eq!(summary.skipped_no_domain, 1);
        assert_eq!(summary.contacts, 1);
        assert_eq!(summary.superintendents, 1);
        assert_eq!(summary.safety_directors, 0);
    }
}
