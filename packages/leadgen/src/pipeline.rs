//! Sequential pipeline driver: sources → fusion → domain resolution →
//! finalization. Enrichment and push run as separate stages on the result
//! (see [`crate::enrich`] and [`crate::push`]).

use chrono::Utc;
use tracing::{info, warn};

use crate::fusion::fuse_sources;
use crate::resolver::DomainResolver;
use crate::traits::{DistrictSource, DomainProbe};
use crate::types::DistrictRecord;

/// Run discovery across sources in priority order, fuse the results, and
/// fill missing domains with the resolver.
///
/// A source that fails wholesale is logged and skipped; the run continues
/// with whatever the other sources produced.
pub async fn discover_districts<P: DomainProbe>(
    sources: &[Box<dyn DistrictSource>],
    resolver: &DomainResolver<P>,
) -> Vec<DistrictRecord> {
    let mut provider_results = Vec::with_capacity(sources.len());

    for source in sources {
        match source.discover().await {
            Ok(records) => {
                info!(source = source.name(), count = records.len(), "Source complete");
                provider_results.push(records);
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "Source failed, skipping");
            }
        }
    }

    let mut districts = fuse_sources(provider_results);
    info!(count = districts.len(), "Fusion complete");

    for district in &mut districts {
        district.derive_domain_from_website();
        if district.domain.is_some() {
            continue;
        }

        if let Some(domain) = resolver.resolve(&district.name).await {
            district.website = Some(format!("https://www.{}", domain));
            district.domain = Some(domain);
        }
    }

    districts
}

/// Stamp state and scrape time, then order by enrollment (largest first,
/// so the districts with known enrollment lead the output).
pub fn finalize(districts: &mut [DistrictRecord], state: &str) {
    let now = Utc::now();
    for district in districts.iter_mut() {
        district.state = Some(state.to_string());
        district.scraped_at = Some(now);
    }
    districts.sort_by(|a, b| b.enrollment.cmp(&a.enrollment));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StaticProbe, StaticSource};
    use crate::types::ResolverConfig;

    fn resolver_with(probe: StaticProbe) -> DomainResolver<StaticProbe> {
        let mut config = ResolverConfig::texas_defaults();
        config.probe_delay_ms = 0;
        DomainResolver::new(config, probe)
    }

    #[tokio::test]
    async fn test_discover_fuses_and_resolves() {
        let sources: Vec<Box<dyn DistrictSource>> = vec![
            Box::new(StaticSource::new(
                "primary",
                vec![
                    DistrictRecord::new("Leander ISD"),
                    DistrictRecord::new("Frisco ISD"),
                ],
            )),
            Box::new(StaticSource::new(
                "backup",
                vec![DistrictRecord::new("  Frisco ISD ").with_city("Frisco")],
            )),
        ];

        let districts = discover_districts(&sources, &resolver_with(StaticProbe::new())).await;

        assert_eq!(districts.len(), 2);
        assert_eq!(districts[0].domain.as_deref(), Some("leanderisd.org"));
        assert_eq!(districts[1].domain.as_deref(), Some("friscoisd.org"));
        assert_eq!(districts[1].city.as_deref(), Some("Frisco"));
        assert_eq!(
            districts[0].website.as_deref(),
            Some("https://www.leanderisd.org")
        );
    }

    #[tokio::test]
    async fn test_unresolvable_district_keeps_none() {
        let sources: Vec<Box<dyn DistrictSource>> = vec![Box::new(StaticSource::new(
            "primary",
            vec![DistrictRecord::new("Unknown ISD")],
        ))];

        let districts = discover_districts(&sources, &resolver_with(StaticProbe::new())).await;

        assert_eq!(districts.len(), 1);
        assert!(districts[0].domain.is_none());
    }

    #[tokio::test]
    async fn test_website_backed_record_skips_resolver() {
        let probe = StaticProbe::new();
        let sources: Vec<Box<dyn DistrictSource>> = vec![Box::new(StaticSource::new(
            "primary",
            vec![DistrictRecord::new("Somewhere ISD")
                .with_website("https://www.somewhereisd.org")],
        ))];

        let districts = discover_districts(&sources, &resolver_with(probe.clone())).await;

        assert_eq!(districts[0].domain.as_deref(), Some("somewhereisd.org"));
        assert!(probe.probed().is_empty());
    }

    #[test]
    fn test_finalize_stamps_and_sorts() {
        let mut districts = vec![
            DistrictRecord::new("Small ISD").with_enrollment(1_000),
            DistrictRecord::new("Big ISD").with_enrollment(60_000),
        ];

        finalize(&mut districts, "TX");

        assert_eq!(districts[0].name, "Big ISD");
        assert!(districts.iter().all(|d| d.state.as_deref() == Some("TX")));
        assert!(districts.iter().all(|d| d.scraped_at.is_some()));
    }
}
