//! Pure Instantly.ai REST API client.
//!
//! A minimal client for the Instantly v1 API. Supports listing campaigns,
//! adding leads (single and bulk), and checking lead status. The v1 API
//! authenticates with an `api_key` query parameter on every request.
//!
//! # Example
//!
//! ```rust,ignore
//! use instantly_client::{InstantlyClient, LeadPayload};
//!
//! let client = InstantlyClient::new("your-api-key".into());
//! let response = client.add_lead("camp_123", &lead).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{InstantlyError, Result};
pub use types::{
    AddLeadResponse, AddLeadsBulkRequest, Campaign, LeadPayload, LeadStatus,
};

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::AddLeadRequest;

const BASE_URL: &str = "https://api.instantly.ai/api/v1";

#[derive(Clone)]
pub struct InstantlyClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl InstantlyClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different base URL (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let resp = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InstantlyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json().await?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let resp = self
            .client
            .post(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InstantlyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json().await?)
    }

    /// List all campaigns in the workspace.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        self.get("campaign/list").await
    }

    /// Add a single lead to a campaign.
    pub async fn add_lead(&self, campaign_id: &str, lead: &LeadPayload) -> Result<AddLeadResponse> {
        let request = AddLeadRequest {
            campaign_id: campaign_id.to_string(),
            lead: lead.clone(),
        };
        let response: AddLeadResponse = self.post("lead/add", &request).await?;
        tracing::debug!(campaign_id, email = %lead.email, "Lead submitted");
        Ok(response)
    }

    /// Add multiple leads to a campaign in one request.
    pub async fn add_leads_bulk(
        &self,
        campaign_id: &str,
        leads: &[LeadPayload],
    ) -> Result<AddLeadResponse> {
        let request = AddLeadsBulkRequest {
            campaign_id: campaign_id.to_string(),
            leads: leads.to_vec(),
        };
        let response: AddLeadResponse = self.post("lead/add", &request).await?;
        tracing::info!(campaign_id, count = leads.len(), "Bulk leads submitted");
        Ok(response)
    }

    /// Fetch the status of a lead by email.
    pub async fn get_lead_status(&self, email: &str) -> Result<LeadStatus> {
        self.get(&format!("lead/get?email={}", email)).await
    }
}
