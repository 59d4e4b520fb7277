//! CSV projections of the district/contact records.
//!
//! The lead projection flattens the one-to-many district→contact shape
//! into one row per contact. The district projection is the import-ready
//! stub list the discover stage hands to the enrichment tooling.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::SinkResult;
use crate::types::{DistrictRecord, Persona};

/// One row per contact.
#[derive(Debug, Serialize)]
struct LeadRow<'a> {
    district_name: &'a str,
    domain: Option<&'a str>,
    enrollment: u32,
    city: Option<&'a str>,
    full_name: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    title: &'a str,
    email: Option<&'a str>,
    phone: Option<&'a str>,
    linkedin_url: Option<&'a str>,
    persona: Persona,
}

/// One row per district.
#[derive(Debug, Serialize)]
struct DistrictRow<'a> {
    name: &'a str,
    domain: Option<&'a str>,
    website: Option<&'a str>,
    city: Option<&'a str>,
    state: Option<&'a str>,
    enrollment: u32,
}

/// Write the row-per-contact lead CSV. Returns the number of rows written.
pub fn write_lead_rows(districts: &[DistrictRecord], path: impl AsRef<Path>) -> SinkResult<usize> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    let mut rows = 0;
    for district in districts {
        for contact in &district.contacts {
            writer.serialize(LeadRow {
                district_name: &district.name,
                domain: district.domain.as_deref(),
                enrollment: district.enrollment,
                city: district.city.as_deref(),
                full_name: &contact.full_name,
                first_name: &contact.first_name,
                last_name: &contact.last_name,
                title: &contact.title,
                email: contact.email.as_deref(),
                phone: contact.phone.as_deref(),
                linkedin_url: contact.linkedin_url.as_deref(),
                persona: contact.persona,
            })?;
            rows += 1;
        }
    }
    writer.flush().map_err(csv::Error::from)?;

    if rows == 0 {
        warn!(path = %path.as_ref().display(), "No contacts to save");
    } else {
        info!(path = %path.as_ref().display(), rows, "Saved lead CSV");
    }
    Ok(rows)
}

/// Write the row-per-district stub CSV.
pub fn write_district_rows(
    districts: &[DistrictRecord],
    path: impl AsRef<Path>,
) -> SinkResult<usize> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    for district in districts {
        writer.serialize(DistrictRow {
            name: &district.name,
            domain: district.domain.as_deref(),
            website: district.website.as_deref(),
            city: district.city.as_deref(),
            state: district.state.as_deref(),
            enrollment: district.enrollment,
        })?;
    }
    writer.flush().map_err(csv::Error::from)?;

    info!(path = %path.as_ref().display(), rows = districts.len(), "Saved district CSV");
    Ok(districts.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContactRecord, DistrictRecord};

    fn enriched_district(name: &str, domain: &str, email: &str) -> DistrictRecord {
        let mut district = DistrictRecord::new(name).with_domain(domain);
        district.contacts = vec![ContactRecord {
            full_name: "Test Person".into(),
            first_name: "Test".into(),
            last_name: "Person".into(),
            title: "Superintendent".into(),
            persona: Persona::Superintendent,
            email: Some(email.into()),
            phone: None,
            linkedin_url: None,
        }];
        district
    }

    #[test]
    fn test_lead_rows_one_per_contact() {
        let districts = vec![
            enriched_district("Leander ISD", "leanderisd.org", "a@leanderisd.org"),
            enriched_district("Frisco ISD", "friscoisd.org", "b@friscoisd.org"),
        ];

        let path = std::env::temp_dir().join(format!("leadgen-leads-{}.csv", std::process::id()));
        let rows = write_lead_rows(&districts, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(rows, 2);
        let mut lines = contents.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("district_name,domain,enrollment,city,full_name"));
        assert!(header.ends_with("persona"));
        assert!(contents.contains("a@leanderisd.org"));
        assert!(contents.contains("superintendent"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_district_rows() {
        let districts = vec![DistrictRecord::new("Keller ISD")
            .with_domain("kellerisd.net")
            .with_website("https://www.kellerisd.net")
            .with_enrollment(34_000)];

        let path =
            std::env::temp_dir().join(format!("leadgen-districts-{}.csv", std::process::id()));
        write_district_rows(&districts, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(contents.starts_with("name,domain,website,city,state,enrollment"));
        assert!(contents.contains("Keller ISD,kellerisd.net,https://www.kellerisd.net,,,34000"));
    }
}
