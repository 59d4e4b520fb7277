//! Campaign push: routes enriched leads into outreach campaigns by
//! persona and records a per-attempt push log.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SinkResult;
use crate::traits::{CampaignSink, Lead, PushReceipt};
use crate::types::{CampaignRouting, ContactRecord, DistrictRecord, Persona};

/// End-of-run counters for the push stage.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PushSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub by_campaign: BTreeMap<String, usize>,
}

/// Summary plus the full per-attempt log.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PushOutcome {
    pub summary: PushSummary,
    pub receipts: Vec<PushReceipt>,
}

impl PushOutcome {
    /// Write the push log as pretty JSON.
    pub fn write_log(&self, path: impl AsRef<Path>) -> SinkResult<()> {
        let json = serde_json::to_string_pretty(&self.receipts)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Flatten enriched districts into pushable leads.
///
/// Contacts without an email cannot be pushed and are dropped here with a
/// log line; they still appear in the CSV/JSON sinks.
pub fn leads_from_districts(districts: &[DistrictRecord]) -> Vec<Lead> {
    let mut leads = Vec::new();
    for district in districts {
        for contact in &district.contacts {
            match lead_from_contact(district, contact) {
                Some(lead) => leads.push(lead),
                None => {
                    info!(
                        district = %district.name,
                        person = %contact.full_name,
                        "Contact has no email, not pushable"
                    );
                }
            }
        }
    }
    leads
}

fn lead_from_contact(district: &DistrictRecord, contact: &ContactRecord) -> Option<Lead> {
    let email = contact.email.clone()?;

    let mut custom_variables = BTreeMap::new();
    custom_variables.insert("district_name".to_string(), district.name.clone().into());
    custom_variables.insert("enrollment".to_string(), district.enrollment.into());
    if let Some(city) = &district.city {
        custom_variables.insert("city".to_string(), city.clone().into());
    }

    Some(Lead {
        email,
        first_name: contact.first_name.clone(),
        last_name: contact.last_name.clone(),
        company_name: district.name.clone(),
        title: contact.title.clone(),
        persona: contact.persona,
        custom_variables,
    })
}

/// One row of an enriched lead CSV, as written by the CSV sink.
#[derive(Debug, Deserialize)]
struct LeadCsvRow {
    #[serde(default)]
    district_name: Option<String>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    enrollment: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    persona: Option<Persona>,
}

/// Load pushable leads from an enriched lead CSV. Rows without an email
/// are skipped. A missing persona column falls back to classifying the
/// row's title.
pub fn leads_from_csv(path: impl AsRef<Path>) -> SinkResult<Vec<Lead>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;

    let mut leads = Vec::new();
    for row in reader.deserialize::<LeadCsvRow>() {
        let row = row?;

        let Some(email) = row.email.filter(|e| !e.trim().is_empty()) else {
            continue;
        };

        let company_name = row
            .district_name
            .clone()
            .or(row.company_name)
            .unwrap_or_default();
        let title = row.title.unwrap_or_default();
        let persona = row.persona.unwrap_or_else(|| Persona::from_title(&title));

        let mut custom_variables = BTreeMap::new();
        if let Some(district_name) = row.district_name {
            custom_variables.insert("district_name".to_string(), district_name.into());
        }
        if let Some(enrollment) = row.enrollment.and_then(|e| e.parse::<u32>().ok()) {
            custom_variables.insert("enrollment".to_string(), enrollment.into());
        }
        if let Some(city) = row.city.filter(|c| !c.trim().is_empty()) {
            custom_variables.insert("city".to_string(), city.into());
        }

        leads.push(Lead {
            email,
            first_name: row.first_name.unwrap_or_default(),
            last_name: row.last_name.unwrap_or_default(),
            company_name,
            title,
            persona,
            custom_variables,
        });
    }

    info!(path = %path.as_ref().display(), count = leads.len(), "Loaded leads from CSV");
    Ok(leads)
}

/// Pushes leads to their persona-routed campaigns, one at a time.
pub struct CampaignPusher<C: CampaignSink> {
    routing: CampaignRouting,
    sink: C,
    rate_limit_ms: u64,
}

impl<C: CampaignSink> CampaignPusher<C> {
    pub fn new(routing: CampaignRouting, sink: C) -> Self {
        Self {
            routing,
            sink,
            rate_limit_ms: 500,
        }
    }

    pub fn with_rate_limit(mut self, ms: u64) -> Self {
        self.rate_limit_ms = ms;
        self
    }

    /// Push every lead in sequence. A lead without a routed campaign or a
    /// failed submission counts as failed; nothing aborts the batch.
    pub async fn run(&self, leads: &[Lead]) -> PushOutcome {
        info!(count = leads.len(), "Starting campaign push");

        let mut outcome = PushOutcome::default();
        outcome.summary.total = leads.len();

        for (i, lead) in leads.iter().enumerate() {
            let Some(campaign_id) = self.routing.campaign_for(lead.persona) else {
                warn!(
                    email = %lead.email,
                    persona = lead.persona.as_str(),
                    "No campaign routed for persona"
                );
                outcome.summary.failed += 1;
                continue;
            };

            info!(
                progress = %format!("{}/{}", i + 1, leads.len()),
                email = %lead.email,
                campaign_id,
                "Pushing lead"
            );

            if self.rate_limit_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.rate_limit_ms)).await;
            }

            match self.sink.add_lead(campaign_id, lead).await {
                Ok(receipt) => {
                    if receipt.success {
                        outcome.summary.success += 1;
                        *outcome
                            .summary
                            .by_campaign
                            .entry(campaign_id.to_string())
                            .or_insert(0) += 1;
                    } else {
                        warn!(email = %lead.email, error = ?receipt.error, "Lead rejected");
                        outcome.summary.failed += 1;
                    }
                    outcome.receipts.push(receipt);
                }
                Err(e) => {
                    warn!(email = %lead.email, campaign_id, error = %e, "Push failed");
                    outcome.summary.failed += 1;
                    outcome.receipts.push(PushReceipt {
                        success: false,
                        email: lead.email.clone(),
                        campaign_id: campaign_id.to_string(),
                        lead_id: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        info!(
            total = outcome.summary.total,
            success = outcome.summary.success,
            failed = outcome.summary.failed,
            "Push complete"
        );

        outcome
    }
}
