//! People-search and contact-enrichment capability traits.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ContactChannels, PersonStub};

/// "Find people at domain" capability.
#[async_trait]
pub trait PeopleSearch: Send + Sync {
    /// Search for people at a company domain whose titles match the given
    /// keywords, up to `limit` results.
    async fn find_people(
        &self,
        domain: &str,
        title_keywords: &[String],
        limit: u32,
    ) -> Result<Vec<PersonStub>>;
}

/// Per-person contact-channel lookup capability.
#[async_trait]
pub trait ContactEnricher: Send + Sync {
    /// Fetch contact channels for one person at a company domain. Any or
    /// all channels may come back absent.
    async fn enrich(&self, person: &PersonStub, company_domain: &str) -> Result<ContactChannels>;
}
