//! `leadgen push` — route enriched leads into outreach campaigns.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::info;

use instantly_client::InstantlyClient;
use leadgen::{
    leads_from_csv, leads_from_districts,
    testing::{demo_directory, RecordingCampaignSink},
    CampaignPusher, CampaignRouting, CampaignSink, InstantlyCampaigns, Lead,
};

use crate::config::Config;

pub async fn run(
    config: &Config,
    demo: bool,
    input: Option<PathBuf>,
    campaign: Option<String>,
    log: &Path,
) -> Result<()> {
    let leads = load_leads(demo, input)?;
    let mode = if demo { "demo" } else { "live" };
    info!(count = leads.len(), mode, "Starting push");

    let routing = match campaign {
        Some(campaign_id) => CampaignRouting::single(campaign_id),
        None => CampaignRouting::default(),
    };

    if demo {
        // No real calls in demo mode, so no pacing either.
        let pusher =
            CampaignPusher::new(routing, RecordingCampaignSink::new()).with_rate_limit(0);
        push_and_log(pusher, &leads, log).await
    } else {
        let api_key = config.require_instantly_api_key()?;
        let sink = InstantlyCampaigns::new(InstantlyClient::new(api_key.to_string()));
        push_and_log(CampaignPusher::new(routing, sink), &leads, log).await
    }
}

fn load_leads(demo: bool, input: Option<PathBuf>) -> Result<Vec<Lead>> {
    if let Some(input) = input {
        return Ok(leads_from_csv(input)?);
    }

    if demo {
        return Ok(leads_from_districts(&demo_directory()));
    }

    bail!("--input is required for live mode (or use --demo)");
}

async fn push_and_log<C: CampaignSink>(
    pusher: CampaignPusher<C>,
    leads: &[Lead],
    log: &Path,
) -> Result<()> {
    let outcome = pusher.run(leads).await;
    outcome.write_log(log)?;

    for (campaign_id, count) in &outcome.summary.by_campaign {
        info!(campaign_id = %campaign_id, count = *count, "Campaign totals");
    }
    info!(
        total = outcome.summary.total,
        success = outcome.summary.success,
        failed = outcome.summary.failed,
        log = %log.display(),
        "Push finished"
    );
    Ok(())
}
