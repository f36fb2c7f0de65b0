use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::record::{Opportunity, FIELD_ORDER};

/// Write the pruned record as pretty JSON (`foa.json`).
pub fn write_json(opp: &Opportunity, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let path = out_dir.join("foa.json");
    let data = serde_json::to_string_pretty(&Value::Object(opp.to_pruned_map()))?;
    fs::write(&path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Write the record as a single CSV row under the full field header
/// (`foa.csv`). List fields are `|`-joined; absent fields are empty cells.
pub fn write_csv(opp: &Opportunity, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let path = out_dir.join("foa.csv");
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.write_record(FIELD_ORDER)?;
    writer.write_record(opp.to_csv_row())?;
    writer.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Opportunity {
        Opportunity {
            opportunity_id: Some("358195".to_string()),
            agency_name: Some("Forest Service".to_string()),
            close_date: Some("2025-08-01".to_string()),
            tags: vec!["climate_environment".to_string(), "has_deadline".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn json_contains_only_populated_fields() {
        let dir = std::env::temp_dir().join("foa_scraper_json_test");
        let path = write_json(&sample(), &dir).unwrap();
        let data = fs::read_to_string(path).unwrap();
        let value: Value = serde_json::from_str(&data).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.get("agency_name"), Some(&Value::from("Forest Service")));
        assert!(!map.contains_key("opportunity_title"));
        assert!(!map.contains_key("forecasted_close_date"));
    }

    #[test]
    fn csv_has_header_and_one_row() {
        let dir = std::env::temp_dir().join("foa_scraper_csv_test");
        let path = write_csv(&sample(), &dir).unwrap();
        let data = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = data.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("opportunity_id,opportunity_number,"));
        assert!(lines[1].contains("climate_environment|has_deadline"));
    }
}
