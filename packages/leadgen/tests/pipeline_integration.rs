//! Integration tests for the full pipeline in demo mode.
//!
//! These tests drive the real stage code end-to-end against the in-memory
//! fakes: discovery → fusion → domain resolution → enrichment → CSV sink →
//! campaign push.

use leadgen::{
    discover_districts, finalize, leads_from_districts,
    testing::{DirectoryPeopleSearch, RecordingCampaignSink, StaticEnricher, StaticProbe, StaticSource},
    types::{CampaignRouting, EnrichmentConfig, Persona, ResolverConfig},
    CampaignPusher, DistrictRecord, DistrictSource, DomainResolver, Enricher,
};

fn demo_resolver() -> DomainResolver<StaticProbe> {
    let mut config = ResolverConfig::texas_defaults();
    config.probe_delay_ms = 0;
    DomainResolver::new(config, StaticProbe::new())
}

fn demo_enricher() -> Enricher<DirectoryPeopleSearch, StaticEnricher> {
    let config = EnrichmentConfig {
        rate_limit_ms: 0,
        ..EnrichmentConfig::default()
    };
    Enricher::new(config, DirectoryPeopleSearch::demo(), StaticEnricher::demo())
}

#[tokio::test]
async fn test_two_stub_districts_produce_two_lead_rows() {
    // Two bare name stubs; everything downstream has to fill itself in.
    let sources: Vec<Box<dyn DistrictSource>> = vec![Box::new(StaticSource::new(
        "stubs",
        vec![
            DistrictRecord::new("Leander ISD"),
            DistrictRecord::new("Frisco ISD"),
        ],
    ))];

    let mut districts = discover_districts(&sources, &demo_resolver()).await;
    assert_eq!(districts.len(), 2);
    assert_eq!(districts[0].domain.as_deref(), Some("leanderisd.org"));
    assert_eq!(districts[1].domain.as_deref(), Some("friscoisd.org"));

    demo_enricher().run(&mut districts).await;

    let superintendent_count = districts
        .iter()
        .flat_map(|d| &d.contacts)
        .filter(|c| c.persona == Persona::Superintendent)
        .count();
    assert_eq!(superintendent_count, 2);

    // Keep only superintendents so the CSV holds exactly one row per district.
    for district in &mut districts {
        district.contacts.retain(|c| c.persona == Persona::Superintendent);
    }

    let path = std::env::temp_dir().join(format!("leadgen-e2e-{}.csv", std::process::id()));
    let rows = leadgen::write_lead_rows(&districts, &path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(rows, 2);
    let data_lines: Vec<&str> = contents.lines().skip(1).collect();
    assert_eq!(data_lines.len(), 2);
    for line in &data_lines {
        assert!(line.contains('@'), "expected an email in row: {line}");
        assert!(line.ends_with("superintendent"));
    }
}

#[tokio::test]
async fn test_enriched_leads_route_to_persona_campaigns() {
    let sources: Vec<Box<dyn DistrictSource>> = vec![Box::new(StaticSource::new(
        "stubs",
        vec![DistrictRecord::new("Leander ISD")],
    ))];

    let mut districts = discover_districts(&sources, &demo_resolver()).await;
    demo_enricher().run(&mut districts).await;
    finalize(&mut districts, "TX");

    // Leander's demo directory entry has a superintendent and a safety chief.
    let leads = leads_from_districts(&districts);
    assert_eq!(leads.len(), 2);

    let sink = RecordingCampaignSink::new();
    let pusher = CampaignPusher::new(CampaignRouting::default(), sink.clone()).with_rate_limit(0);
    let outcome = pusher.run(&leads).await;

    assert_eq!(outcome.summary.total, 2);
    assert_eq!(outcome.summary.success, 2);
    assert_eq!(outcome.summary.failed, 0);

    let campaigns: Vec<String> = sink.pushed().into_iter().map(|(c, _)| c).collect();
    assert!(campaigns.contains(&"camp_tx_superintendents_q1_2026".to_string()));
    assert!(campaigns.contains(&"camp_tx_safety_directors_q1_2026".to_string()));
}

#[tokio::test]
async fn test_district_without_domain_flows_through_with_empty_contacts() {
    let sources: Vec<Box<dyn DistrictSource>> = vec![Box::new(StaticSource::new(
        "stubs",
        vec![DistrictRecord::new("Unknown ISD")],
    ))];

    let mut districts = discover_districts(&sources, &demo_resolver()).await;
    let summary = demo_enricher().run(&mut districts).await;
    finalize(&mut districts, "TX");

    assert_eq!(districts.len(), 1);
    assert!(districts[0].domain.is_none());
    assert!(districts[0].contacts.is_empty());
    assert_eq!(summary.skipped_no_domain, 1);

    // Still serializable and pushable (zero leads, zero failures).
    let leads = leads_from_districts(&districts);
    assert!(leads.is_empty());
}
