//! Record fusion: merges partial district records from multiple sources
//! into one canonical record per normalized name.
//!
//! Sources are processed in priority order (first list most authoritative).
//! A field already populated on the kept record wins; empty fields are
//! filled by later sources. The one exception is the domain tie-break: a
//! later source that carries an actual website URL may replace a domain
//! that was only pattern-guessed, once.
//!
//! Identity resolution is exact normalized-name match only. Near-duplicate
//! names from different sources ("Frisco ISD" vs "Frisco Independent
//! School District") stay separate records. Known limitation.

use std::collections::HashMap;

use crate::types::{district::domain_from_url, normalize_name, DistrictRecord};

/// Fuse provider result lists into a deduplicated record list.
///
/// Pure function: no I/O, no side effects. Output order is first-seen
/// order across the input lists. Fusing the same inputs twice yields the
/// same output as fusing once.
pub fn fuse_sources<I>(provider_results: I) -> Vec<DistrictRecord>
where
    I: IntoIterator<Item = Vec<DistrictRecord>>,
{
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut fused: Vec<DistrictRecord> = Vec::new();

    for records in provider_results {
        for record in records {
            let key = normalize_name(&record.name);
            if key.is_empty() {
                continue;
            }
            match seen.get(&key) {
                Some(&idx) => merge_record(&mut fused[idx], record),
                None => {
                    seen.insert(key, fused.len());
                    fused.push(record);
                }
            }
        }
    }

    fused
}

/// Merge `incoming` into `existing`, field by field.
fn merge_record(existing: &mut DistrictRecord, incoming: DistrictRecord) {
    // Domain tie-break: a website-backed domain beats a pattern-guessed
    // one. A guessed domain is one set without a website. Once a website
    // is attached the pair is immutable.
    if existing.website.is_none() && incoming.website.is_some() {
        let derived = incoming
            .domain
            .clone()
            .or_else(|| incoming.website.as_deref().and_then(domain_from_url));
        existing.website = incoming.website;
        if let Some(domain) = derived {
            existing.domain = Some(domain);
        }
    } else if existing.domain.is_none() {
        existing.domain = incoming.domain;
    }

    if existing.city.is_none() {
        existing.city = incoming.city;
    }
    if existing.enrollment == 0 {
        existing.enrollment = incoming.enrollment;
    }
    if existing.state.is_none() {
        existing.state = incoming.state;
    }
    if existing.contacts.is_empty() {
        existing.contacts = incoming.contacts;
    }

    existing.source_tags.extend(incoming.source_tags);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_key_dedup() {
        let a = vec![DistrictRecord::new("Frisco ISD").with_source_tag("tribune")];
        let b = vec![DistrictRecord::new("  Frisco ISD ").with_source_tag("wikipedia")];

        let fused = fuse_sources([a, b]);

        assert_eq!(fused.len(), 1);
        assert!(fused[0].source_tags.contains("tribune"));
        assert!(fused[0].source_tags.contains("wikipedia"));
    }

    #[test]
    fn test_differently_formatted_names_stay_separate() {
        let a = vec![DistrictRecord::new("Frisco ISD")];
        let b = vec![DistrictRecord::new("Frisco Independent School District")];

        let fused = fuse_sources([a, b]);

        assert_eq!(fused.len(), 2);
    }

    #[test]
    fn test_earlier_source_wins_populated_fields() {
        let a = vec![DistrictRecord::new("Keller ISD").with_city("Keller")];
        let b = vec![DistrictRecord::new("Keller ISD").with_city("Fort Worth")];

        let fused = fuse_sources([a, b]);

        assert_eq!(fused[0].city.as_deref(), Some("Keller"));
    }

    #[test]
    fn test_later_source_fills_empty_fields() {
        let a = vec![DistrictRecord::new("Keller ISD")];
        let b = vec![DistrictRecord::new("Keller ISD")
            .with_city("Keller")
            .with_enrollment(34_000)];

        let fused = fuse_sources([a, b]);

        assert_eq!(fused[0].city.as_deref(), Some("Keller"));
        assert_eq!(fused[0].enrollment, 34_000);
    }

    #[test]
    fn test_website_backed_domain_replaces_guessed() {
        let a = vec![DistrictRecord::new("Temple ISD").with_domain("tisd.org")];
        let b = vec![DistrictRecord::new("Temple ISD")
            .with_website("https://www.templeisd.org")];

        let fused = fuse_sources([a, b]);

        assert_eq!(fused[0].domain.as_deref(), Some("templeisd.org"));
        assert_eq!(fused[0].website.as_deref(), Some("https://www.templeisd.org"));
    }

    #[test]
    fn test_website_backed_domain_is_not_overwritten() {
        let a = vec![DistrictRecord::new("Temple ISD")
            .with_domain("tisd.org")
            .with_website("https://www.tisd.org")];
        let b = vec![DistrictRecord::new("Temple ISD")
            .with_website("https://www.templeisd.org")];

        let fused = fuse_sources([a, b]);

        assert_eq!(fused[0].domain.as_deref(), Some("tisd.org"));
        assert_eq!(fused[0].website.as_deref(), Some("https://www.tisd.org"));
    }

    #[test]
    fn test_idempotent() {
        let make_inputs = || {
            vec![
                vec![
                    DistrictRecord::new("Frisco ISD").with_enrollment(67_000),
                    DistrictRecord::new("Keller ISD"),
                ],
                vec![
                    DistrictRecord::new("frisco isd").with_city("Frisco"),
                    DistrictRecord::new("Leander ISD"),
                ],
            ]
        };

        let once = fuse_sources(make_inputs());
        let twice = fuse_sources(vec![once.clone()]);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.domain, b.domain);
            assert_eq!(a.city, b.city);
            assert_eq!(a.enrollment, b.enrollment);
        }
    }

    #[test]
    fn test_no_duplicate_keys_in_output() {
        let fused = fuse_sources([
            vec![
                DistrictRecord::new("Allen ISD"),
                DistrictRecord::new("ALLEN ISD"),
            ],
            vec![DistrictRecord::new("allen isd")],
        ]);

        assert_eq!(fused.len(), 1);
    }
}
