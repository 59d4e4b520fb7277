//! Testing utilities including in-memory fake implementations.
//!
//! These back both the unit/integration tests and the CLI's demo mode:
//! every external capability has a deterministic fake with call recording,
//! and `demo_directory()` carries a small verified directory of districts
//! and contacts.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{LeadgenError, Result, SourceResult};
use crate::traits::{
    CampaignSink, ContactEnricher, DistrictSource, DomainProbe, Lead, PeopleSearch, PushReceipt,
};
use crate::types::{ContactChannels, ContactRecord, DistrictRecord, Persona, PersonStub};

/// A probe answering from a fixed set of live domains, recording every call.
#[derive(Clone, Default)]
pub struct StaticProbe {
    live: Arc<RwLock<HashSet<String>>>,
    probed: Arc<RwLock<Vec<String>>>,
}

impl StaticProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a domain as existing.
    pub fn with_live(self, domain: impl Into<String>) -> Self {
        self.live.write().unwrap().insert(domain.into());
        self
    }

    /// Every domain probed so far, in order.
    pub fn probed(&self) -> Vec<String> {
        self.probed.read().unwrap().clone()
    }
}

#[async_trait]
impl DomainProbe for StaticProbe {
    async fn exists(&self, domain: &str) -> bool {
        self.probed.write().unwrap().push(domain.to_string());
        self.live.read().unwrap().contains(domain)
    }
}

/// A people-search fake answering from a domain → stubs table.
#[derive(Clone, Default)]
pub struct DirectoryPeopleSearch {
    people: Arc<RwLock<HashMap<String, Vec<PersonStub>>>>,
    searched: Arc<RwLock<Vec<String>>>,
    fail: bool,
}

impl DirectoryPeopleSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed stubs for a domain.
    pub fn with_people(self, domain: impl Into<String>, stubs: Vec<PersonStub>) -> Self {
        self.people.write().unwrap().insert(domain.into(), stubs);
        self
    }

    /// Make every search fail, to exercise the catch-and-continue path.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Seeded with the demo directory.
    pub fn demo() -> Self {
        let search = Self::new();
        for district in demo_directory() {
            let domain = district.domain.clone().unwrap_or_default();
            let stubs = district
                .contacts
                .iter()
                .map(|c| PersonStub {
                    full_name: c.full_name.clone(),
                    first_name: c.first_name.clone(),
                    last_name: c.last_name.clone(),
                    title: c.title.clone(),
                })
                .collect();
            search.people.write().unwrap().insert(domain, stubs);
        }
        search
    }

    /// Every domain searched so far, in order.
    pub fn searched_domains(&self) -> Vec<String> {
        self.searched.read().unwrap().clone()
    }
}

#[async_trait]
impl PeopleSearch for DirectoryPeopleSearch {
    async fn find_people(
        &self,
        domain: &str,
        _title_keywords: &[String],
        limit: u32,
    ) -> Result<Vec<PersonStub>> {
        self.searched.write().unwrap().push(domain.to_string());

        if self.fail {
            return Err(LeadgenError::Enrichment("people search unavailable".into()));
        }

        let mut stubs = self
            .people
            .read()
            .unwrap()
            .get(domain)
            .cloned()
            .unwrap_or_default();
        stubs.truncate(limit as usize);
        Ok(stubs)
    }
}

/// A contact enricher answering from a name → channels table, falling back
/// to a generated `first.last@domain` address.
#[derive(Clone, Default)]
pub struct StaticEnricher {
    channels: Arc<RwLock<HashMap<String, ContactChannels>>>,
    fail: bool,
}

impl StaticEnricher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed channels for a person by full name.
    pub fn with_channels(self, full_name: impl Into<String>, channels: ContactChannels) -> Self {
        self.channels
            .write()
            .unwrap()
            .insert(full_name.into(), channels);
        self
    }

    /// Make every lookup fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Seeded with the demo directory's contact channels.
    pub fn demo() -> Self {
        let enricher = Self::new();
        for district in demo_directory() {
            for contact in &district.contacts {
                enricher.channels.write().unwrap().insert(
                    contact.full_name.clone(),
                    ContactChannels {
                        email: contact.email.clone(),
                        phone: contact.phone.clone(),
                        linkedin_url: contact.linkedin_url.clone(),
                    },
                );
            }
        }
        enricher
    }

    fn generated(&self, person: &PersonStub, company_domain: &str) -> ContactChannels {
        ContactChannels {
            email: Some(format!(
                "{}.{}@{}",
                person.first_name.to_lowercase(),
                person.last_name.to_lowercase(),
                company_domain
            )),
            phone: None,
            linkedin_url: None,
        }
    }
}

#[async_trait]
impl ContactEnricher for StaticEnricher {
    async fn enrich(&self, person: &PersonStub, company_domain: &str) -> Result<ContactChannels> {
        if self.fail {
            return Err(LeadgenError::Enrichment("enrichment unavailable".into()));
        }

        let seeded = self.channels.read().unwrap().get(&person.full_name).cloned();
        Ok(seeded.unwrap_or_else(|| self.generated(person, company_domain)))
    }
}

/// A campaign sink that records pushes instead of sending them.
#[derive(Clone, Default)]
pub struct RecordingCampaignSink {
    pushed: Arc<RwLock<Vec<(String, Lead)>>>,
    fail: bool,
}

impl RecordingCampaignSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every push fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Every (campaign_id, lead) pushed so far, in order.
    pub fn pushed(&self) -> Vec<(String, Lead)> {
        self.pushed.read().unwrap().clone()
    }
}

#[async_trait]
impl CampaignSink for RecordingCampaignSink {
    async fn add_lead(&self, campaign_id: &str, lead: &Lead) -> Result<PushReceipt> {
        if self.fail {
            return Err(LeadgenError::Campaign("campaign service unavailable".into()));
        }

        self.pushed
            .write()
            .unwrap()
            .push((campaign_id.to_string(), lead.clone()));

        let local_part = lead.email.split('@').next().unwrap_or_default();
        Ok(PushReceipt {
            success: true,
            email: lead.email.clone(),
            campaign_id: campaign_id.to_string(),
            lead_id: Some(format!("demo_lead_{}", local_part)),
            error: None,
        })
    }
}

/// A discovery source returning a fixed record list.
pub struct StaticSource {
    name: String,
    records: Vec<DistrictRecord>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, records: Vec<DistrictRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

#[async_trait]
impl DistrictSource for StaticSource {
    async fn discover(&self) -> SourceResult<Vec<DistrictRecord>> {
        Ok(self.records.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn demo_contact(
    full_name: &str,
    title: &str,
    email: &str,
    phone: &str,
    linkedin: &str,
) -> ContactRecord {
    let mut parts = full_name.split_whitespace();
    // Skip honorifics when splitting name parts.
    let first = match parts.next() {
        Some("Dr.") => parts.next().unwrap_or_default(),
        Some(first) => first,
        None => "",
    };
    let last = parts.next_back().unwrap_or(first);

    ContactRecord {
        full_name: full_name.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        title: title.to_string(),
        persona: Persona::from_title(title),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        linkedin_url: Some(linkedin.to_string()),
    }
}

fn demo_district(
    name: &str,
    domain: &str,
    enrollment: u32,
    contacts: Vec<ContactRecord>,
) -> DistrictRecord {
    let mut district = DistrictRecord::new(name)
        .with_domain(domain)
        .with_enrollment(enrollment);
    district.contacts = contacts;
    district
}

/// A small verified directory of districts with known contacts. Backs demo
/// mode and the end-to-end tests.
pub fn demo_directory() -> Vec<DistrictRecord> {
    vec![
        demo_district(
            "Leander ISD",
            "leanderisd.org",
            42_000,
            vec![
                demo_contact(
                    "Dr. Bruce Gearing",
                    "Superintendent",
                    "bruce.gearing@leanderisd.org",
                    "(512) 570-0000",
                    "https://linkedin.com/in/bruce-gearing",
                ),
                demo_contact(
                    "Shā Rogers",
                    "Chief of Safety & Security",
                    "sha.rogers@leanderisd.org",
                    "(512) 570-0024",
                    "https://linkedin.com/in/sha-rogers",
                ),
            ],
        ),
        demo_district(
            "Frisco ISD",
            "friscoisd.org",
            67_000,
            vec![demo_contact(
                "Dr. Mike Waldrip",
                "Superintendent",
                "mike.waldrip@friscoisd.org",
                "(469) 633-6000",
                "https://linkedin.com/in/mike-waldrip",
            )],
        ),
        demo_district(
            "Keller ISD",
            "kellerisd.net",
            34_000,
            vec![demo_contact(
                "Dr. Rick Westfall",
                "Superintendent",
                "rick.westfall@kellerisd.net",
                "(817) 744-1000",
                "https://linkedin.com/in/rick-westfall",
            )],
        ),
        demo_district(
            "Georgetown ISD",
            "georgetownisd.org",
            14_000,
            vec![demo_contact(
                "Dr. Fred Brent",
                "Superintendent",
                "fred.brent@georgetownisd.org",
                "(512) 943-5000",
                "https://linkedin.com/in/fred-brent",
            )],
        ),
        demo_district(
            "Round Rock ISD",
            "roundrockisd.org",
            47_000,
            vec![demo_contact(
                "Dr. Hafedh Azaiez",
                "Superintendent",
                "hafedh_azaiez@roundrockisd.org",
                "(512) 464-5000",
                "https://linkedin.com/in/hafedh-azaiez",
            )],
        ),
        demo_district(
            "Humble ISD",
            "humbleisd.net",
            47_000,
            vec![demo_contact(
                "Dr. Elizabeth Fagen",
                "Superintendent",
                "elizabeth.fagen@humbleisd.net",
                "(281) 641-1000",
                "https://linkedin.com/in/elizabeth-fagen",
            )],
        ),
        demo_district(
            "Prosper ISD",
            "prosper-isd.net",
            30_000,
            vec![demo_contact(
                "Dr. Holly Ferguson",
                "Superintendent",
                "holly.ferguson@prosper-isd.net",
                "(469) 219-2000",
                "https://linkedin.com/in/holly-ferguson",
            )],
        ),
        demo_district(
            "Lake Travis ISD",
            "ltisdschools.org",
            12_000,
            vec![demo_contact(
                "Dr. Paul Norton",
                "Superintendent",
                "paul.norton@ltisdschools.org",
                "(512) 533-6000",
                "https://linkedin.com/in/paul-norton",
            )],
        ),
        demo_district(
            "Boerne ISD",
            "boerneisd.net",
            10_000,
            vec![demo_contact(
                "Dr. Thomas Price",
                "Superintendent",
                "thomas.price@boerneisd.net",
                "(830) 357-2000",
                "https://linkedin.com/in/thomas-price",
            )],
        ),
        demo_district(
            "Aledo ISD",
            "aledoisd.org",
            8_400,
            vec![demo_contact(
                "Dr. Susan Bohn",
                "Superintendent",
                "susan.bohn@aledoisd.org",
                "(817) 441-5327",
                "https://linkedin.com/in/susan-bohn",
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_directory_shape() {
        let directory = demo_directory();

        assert_eq!(directory.len(), 10);
        assert!(directory.iter().all(|d| d.domain.is_some()));
        assert!(directory.iter().all(|d| !d.contacts.is_empty()));

        let leander = &directory[0];
        assert_eq!(leander.contacts.len(), 2);
        assert_eq!(leander.contacts[0].persona, Persona::Superintendent);
        assert_eq!(leander.contacts[0].first_name, "Bruce");
        assert_eq!(leander.contacts[0].last_name, "Gearing");
        assert_eq!(leander.contacts[1].persona, Persona::SafetyDirector);
    }

    #[tokio::test]
    async fn test_demo_people_search_answers_by_domain() {
        let search = DirectoryPeopleSearch::demo();

        let people = search
            .find_people("friscoisd.org", &[], 10)
            .await
            .unwrap();

        assert_eq!(people.len(), 1);
        assert_eq!(people[0].full_name, "Dr. Mike Waldrip");
        assert_eq!(search.searched_domains(), vec!["friscoisd.org"]);
    }

    #[tokio::test]
    async fn test_enricher_falls_back_to_generated_email() {
        let enricher = StaticEnricher::new();
        let stub = PersonStub {
            full_name: "Jane Doe".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            title: "Superintendent".into(),
        };

        let channels = enricher.enrich(&stub, "example.org").await.unwrap();

        assert_eq!(channels.email.as_deref(), Some("jane.doe@example.org"));
    }
}
