use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A lead as the campaign API accepts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadPayload {
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company_name: String,
    /// Free-text personalization shown in campaign templates.
    #[serde(default)]
    pub personalization: String,
    #[serde(default)]
    pub custom_variables: BTreeMap<String, serde_json::Value>,
}

/// Request body for `POST lead/add` (single lead).
#[derive(Debug, Clone, Serialize)]
pub struct AddLeadRequest {
    pub campaign_id: String,
    #[serde(flatten)]
    pub lead: LeadPayload,
}

/// Request body for `POST lead/add` (bulk).
#[derive(Debug, Clone, Serialize)]
pub struct AddLeadsBulkRequest {
    pub campaign_id: String,
    pub leads: Vec<LeadPayload>,
}

/// Response from `POST lead/add`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddLeadResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub leads_uploaded: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A campaign as returned by `GET campaign/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct Campaign {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Lead status as returned by `GET lead/get`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadStatus {
    pub email: String,
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
