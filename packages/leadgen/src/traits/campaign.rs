//! Campaign-push capability trait and its payload types.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Persona;

/// One outreach lead, flattened from a district contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub title: String,
    pub persona: Persona,
    /// Free-form template variables (enrollment, city, district_name).
    #[serde(default)]
    pub custom_variables: BTreeMap<String, serde_json::Value>,
}

/// Outcome of one push attempt, as recorded in the push log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushReceipt {
    pub success: bool,
    pub email: String,
    pub campaign_id: String,
    /// Provider-assigned lead id, when the provider reports one.
    pub lead_id: Option<String>,
    pub error: Option<String>,
}

/// Campaign-push capability.
#[async_trait]
pub trait CampaignSink: Send + Sync {
    /// Submit one lead to a campaign.
    async fn add_lead(&self, campaign_id: &str, lead: &Lead) -> Result<PushReceipt>;
}
