//! `leadgen enrich` — attach contacts to districts, demo or live.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::info;

use clay_client::ClayClient;
use leadgen::{
    finalize,
    sinks::PostgresSink,
    testing::{demo_directory, DirectoryPeopleSearch, StaticEnricher},
    write_districts_json, write_lead_rows, ClayDirectory, ContactEnricher, CsvProvider,
    DistrictRecord, DistrictSource, EnrichmentConfig, Enricher, PeopleSearch,
};

use crate::config::Config;

pub async fn run(
    config: &Config,
    demo: bool,
    input: Option<PathBuf>,
    output: &Path,
    json: Option<PathBuf>,
    database: Option<String>,
) -> Result<()> {
    let districts = load_districts(demo, input).await?;
    let mode = if demo { "demo" } else { "live" };
    info!(count = districts.len(), mode, "Starting enrichment");

    if demo {
        // No real calls in demo mode, so no pacing either.
        let demo_config = EnrichmentConfig {
            rate_limit_ms: 0,
            ..EnrichmentConfig::default()
        };
        let enricher = Enricher::new(
            demo_config,
            DirectoryPeopleSearch::demo(),
            StaticEnricher::demo(),
        );
        enrich_and_save(enricher, districts, output, json, database).await
    } else {
        let api_key = config.require_clay_api_key()?;
        let clay = ClayDirectory::new(ClayClient::new(api_key.to_string()));
        let enricher = Enricher::new(EnrichmentConfig::default(), clay.clone(), clay);
        enrich_and_save(enricher, districts, output, json, database).await
    }
}

async fn load_districts(demo: bool, input: Option<PathBuf>) -> Result<Vec<DistrictRecord>> {
    if let Some(input) = input {
        let districts = CsvProvider::new(input).discover().await?;
        return Ok(districts);
    }

    if demo {
        // District stubs only: enrichment fills the contacts back in.
        let stubs = demo_directory()
            .into_iter()
            .map(|mut district| {
                district.contacts.clear();
                district
            })
            .collect();
        return Ok(stubs);
    }

    bail!("--input is required for live mode (or use --demo)");
}

async fn enrich_and_save<S, E>(
    enricher: Enricher<S, E>,
    mut districts: Vec<DistrictRecord>,
    output: &Path,
    json: Option<PathBuf>,
    database: Option<String>,
) -> Result<()>
where
    S: PeopleSearch,
    E: ContactEnricher,
{
    let summary = enricher.run(&mut districts).await;
    finalize(&mut districts, "TX");

    write_lead_rows(&districts, output)?;

    if let Some(json_path) = json {
        write_districts_json(&districts, json_path)?;
    }

    if let Some(database_url) = database {
        let sink = PostgresSink::new(&database_url).await?;
        let stats = sink.save(&districts).await?;
        info!(districts = stats.districts, leads = stats.leads, "Upserted into Postgres");
    }

    info!(
        districts = summary.districts,
        contacts = summary.contacts,
        superintendents = summary.superintendents,
        safety_directors = summary.safety_directors,
        output = %output.display(),
        "Enrichment finished"
    );
    Ok(())
}
