//! Baseline parameter loader
//!
//! Baselines are flat name/value documents. Two layouts are accepted:
//! - CSV with a `parameter,value` header (default, `data/baseline.csv`)
//! - a flat JSON object, selected by a `.json` extension

use super::ParameterMap;
use crate::error::{ModelError, ModelResult};
use std::fs::File;
use std::path::Path;

/// Default path to the shipped baseline
pub const DEFAULT_BASELINE_PATH: &str = "data/baseline.csv";

/// Load a baseline document, choosing the layout from the file extension
pub fn load_baseline(path: &Path) -> ModelResult<ParameterMap> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let map = if is_json {
        load_baseline_json(path)?
    } else {
        load_baseline_csv(path)?
    };

    log::info!("Loaded {} baseline parameters from {}", map.len(), path.display());
    Ok(map)
}

/// Load a `parameter,value` CSV baseline
pub fn load_baseline_csv(path: &Path) -> ModelResult<ParameterMap> {
    let file = File::open(path)?;
    load_baseline_csv_from_reader(file)
}

/// Load a CSV baseline from any reader
pub fn load_baseline_csv_from_reader<R: std::io::Read>(reader: R) -> ModelResult<ParameterMap> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut map = ParameterMap::new();
    for result in reader.records() {
        let record = result?;
        let name = record.get(0).unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        let value = record
            .get(1)
            .ok_or_else(|| ModelError::invalid(name, "baseline row has no value column"))?;
        map.insert(name, value);
    }

    Ok(map)
}

/// Load a flat JSON object baseline
pub fn load_baseline_json(path: &Path) -> ModelResult<ParameterMap> {
    let file = File::open(path)?;
    let document: serde_json::Map<String, serde_json::Value> = serde_json::from_reader(file)?;

    let mut map = ParameterMap::new();
    for (name, value) in document {
        let raw = match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        map.insert(name, raw);
    }

    Ok(map)
}

/// Overwrite a CSV baseline with the given parameters
pub fn save_baseline(path: &Path, params: &ParameterMap) -> ModelResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["parameter", "value"])?;
    for (name, value) in params.iter() {
        writer.write_record([name, value])?;
    }
    writer.flush()?;

    log::info!("Saved {} baseline parameters to {}", params.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::ParameterSet;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mvno_scenario_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_shipped_baseline() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_BASELINE_PATH);
        let map = load_baseline(&path);
        assert!(map.is_ok(), "Failed to load baseline: {:?}", map.err());

        let params = ParameterSet::from_map(&map.unwrap()).unwrap();
        assert_eq!(params, ParameterSet::default_baseline());
    }

    #[test]
    fn test_csv_reader_trims_and_skips_blank_names() {
        let text = "parameter,value\nmonths, 24\n,\narpu ,12.5\n";
        let map = load_baseline_csv_from_reader(text.as_bytes()).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("months"), Some("24"));
        assert_eq!(map.get("arpu"), Some("12.5"));
    }

    #[test]
    fn test_json_baseline() {
        let path = scratch_path("baseline.json");
        std::fs::write(
            &path,
            r#"{"months": 36, "arpu": 18.5, "churn_pct": "1.5", "note": true}"#,
        )
        .unwrap();

        let map = load_baseline(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(map.get("months"), Some("36"));
        assert_eq!(map.get("arpu"), Some("18.5"));
        assert_eq!(map.get("churn_pct"), Some("1.5"));
        assert_eq!(map.get("note"), Some("true"));
    }

    #[test]
    fn test_save_then_load_baseline() {
        let path = scratch_path("saved.csv");
        let original = ParameterSet {
            arpu: 21.75,
            months: 48,
            ..ParameterSet::default_baseline()
        };

        save_baseline(&path, &original.to_map()).unwrap();
        let loaded = load_baseline(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let names: Vec<_> = loaded.names().collect();
        assert_eq!(names, crate::assumptions::PARAMETER_NAMES.to_vec());
        assert_eq!(ParameterSet::from_map(&loaded).unwrap(), original);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_baseline(&scratch_path("does_not_exist.csv")).unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }
}
