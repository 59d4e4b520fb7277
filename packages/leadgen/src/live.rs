//! Live implementations of the external capability traits, backed by the
//! Clay and Instantly API clients.

use async_trait::async_trait;
use clay_client::{ClayClient, EnrichRequest};
use instantly_client::{InstantlyClient, LeadPayload};

use crate::error::{LeadgenError, Result};
use crate::traits::{CampaignSink, ContactEnricher, Lead, PeopleSearch, PushReceipt};
use crate::types::{ContactChannels, PersonStub};

/// Clay-backed people search and enrichment.
#[derive(Clone)]
pub struct ClayDirectory {
    client: ClayClient,
}

impl ClayDirectory {
    pub fn new(client: ClayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PeopleSearch for ClayDirectory {
    async fn find_people(
        &self,
        domain: &str,
        title_keywords: &[String],
        limit: u32,
    ) -> Result<Vec<PersonStub>> {
        let people = self
            .client
            .find_people(domain, title_keywords, limit)
            .await
            .map_err(|e| LeadgenError::Enrichment(Box::new(e)))?;

        let stubs = people
            .into_iter()
            .filter_map(|p| {
                let first_name = p.first_name.unwrap_or_default();
                let last_name = p.last_name.unwrap_or_default();
                if first_name.is_empty() && last_name.is_empty() {
                    return None;
                }
                let full_name = p
                    .full_name
                    .unwrap_or_else(|| format!("{} {}", first_name, last_name).trim().to_string());
                Some(PersonStub {
                    full_name,
                    first_name,
                    last_name,
                    title: p.title.unwrap_or_default(),
                })
            })
            .collect();

        Ok(stubs)
    }
}

#[async_trait]
impl ContactEnricher for ClayDirectory {
    async fn enrich(&self, person: &PersonStub, company_domain: &str) -> Result<ContactChannels> {
        let request = EnrichRequest {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            company_domain: company_domain.to_string(),
            title: Some(person.title.clone()),
        };

        let response = self
            .client
            .enrich_person(&request)
            .await
            .map_err(|e| LeadgenError::Enrichment(Box::new(e)))?;

        Ok(ContactChannels {
            email: response.email,
            phone: response.phone,
            linkedin_url: response.linkedin_url,
        })
    }
}

/// Instantly-backed campaign sink.
pub struct InstantlyCampaigns {
    client: InstantlyClient,
}

impl InstantlyCampaigns {
    pub fn new(client: InstantlyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CampaignSink for InstantlyCampaigns {
    async fn add_lead(&self, campaign_id: &str, lead: &Lead) -> Result<PushReceipt> {
        let payload = LeadPayload {
            email: lead.email.clone(),
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            company_name: lead.company_name.clone(),
            personalization: lead.title.clone(),
            custom_variables: lead.custom_variables.clone(),
        };

        let response = self
            .client
            .add_lead(campaign_id, &payload)
            .await
            .map_err(|e| LeadgenError::Campaign(Box::new(e)))?;

        Ok(PushReceipt {
            success: response.error.is_none(),
            email: lead.email.clone(),
            campaign_id: campaign_id.to_string(),
            lead_id: None,
            error: response.error,
        })
    }
}
