//! JSON document sink: the nested district/contact shape, pretty-printed.

use std::path::Path;

use tracing::info;

use crate::error::SinkResult;
use crate::types::DistrictRecord;

pub fn write_districts_json(
    districts: &[DistrictRecord],
    path: impl AsRef<Path>,
) -> SinkResult<()> {
    let json = serde_json::to_string_pretty(districts)?;
    std::fs::write(path.as_ref(), json)?;

    info!(path = %path.as_ref().display(), count = districts.len(), "Saved district JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_nested_shape() {
        let districts = vec![DistrictRecord::new("Frisco ISD").with_domain("friscoisd.org")];

        let path = std::env::temp_dir().join(format!("leadgen-json-{}.json", std::process::id()));
        write_districts_json(&districts, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let parsed: Vec<DistrictRecord> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Frisco ISD");
        assert_eq!(parsed[0].domain.as_deref(), Some("friscoisd.org"));
    }
}
