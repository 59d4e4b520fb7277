//! `leadgen discover` — scrape sources, fuse, resolve domains, save.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use leadgen::{
    discover_districts, finalize, write_district_rows, write_districts_json, DistrictSource,
    DomainResolver, HttpProbe, ResolverConfig, TribuneProvider, WikipediaProvider,
};

pub async fn run(details: bool, output_dir: &Path) -> Result<()> {
    info!("Starting district discovery");

    // Tribune first: it is the richer source and wins field conflicts.
    let sources: Vec<Box<dyn DistrictSource>> = vec![
        Box::new(TribuneProvider::new().with_details(details)),
        Box::new(WikipediaProvider::new()),
    ];

    let config = ResolverConfig::texas_defaults();
    let probe = HttpProbe::new(config.probe_timeout);
    let resolver = DomainResolver::new(config, probe);

    let mut districts = discover_districts(&sources, &resolver).await;
    finalize(&mut districts, "TX");

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    write_districts_json(&districts, output_dir.join("districts.json"))?;
    write_district_rows(&districts, output_dir.join("districts.csv"))?;

    print_summary(&districts);
    Ok(())
}

fn print_summary(districts: &[leadgen::DistrictRecord]) {
    let total = districts.len();
    let with_domain = districts.iter().filter(|d| d.domain.is_some()).count();
    let with_enrollment = districts.iter().filter(|d| d.enrollment > 0).count();

    let small = districts
        .iter()
        .filter(|d| d.enrollment > 0 && d.enrollment < 5_000)
        .count();
    let medium = districts
        .iter()
        .filter(|d| (5_000..20_000).contains(&d.enrollment))
        .count();
    let large = districts
        .iter()
        .filter(|d| (20_000..50_000).contains(&d.enrollment))
        .count();
    let xlarge = districts.iter().filter(|d| d.enrollment >= 50_000).count();

    info!(
        total,
        with_domain,
        with_enrollment,
        small,
        medium,
        large,
        xlarge,
        "Discovery complete"
    );
}
