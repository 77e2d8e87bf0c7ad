//! Catalogue loading
//!
//! A catalogue file is a JSON array of objects shaped like
//! `{"name": "...", "prompt": "... {prompt} ...", "negative_prompt": "..."}`.
//! Entries without a string `name` are dropped here; entries without a
//! `prompt` are kept and only fail when they are selected.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::CatalogueError;
use crate::models::{Catalogue, TemplateRecord};

/// Read and parse a catalogue file
pub fn load_catalogue(path: &Path) -> Result<Catalogue, CatalogueError> {
    let bytes = fs::read(path).map_err(|e| CatalogueError::ReadError(path.to_path_buf(), e))?;
    let catalogue = parse_catalogue(path, &bytes)?;
    debug!(
        "Loaded {} templates from {}",
        catalogue.len(),
        path.display()
    );
    Ok(catalogue)
}

/// Parse catalogue bytes; `source` is only used for diagnostics
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn parse_catalogue(source: &Path, bytes: &[u8]) -> Result<Catalogue, CatalogueError> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim_start_matches('\u{feff}');

    let value: Value = serde_json::from_str(text)
        .map_err(|e| CatalogueError::ParseError(source.to_path_buf(), e))?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(CatalogueError::FormatError(
                source.to_path_buf(),
                json_kind(&other),
            ))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut skipped = 0;

    for (index, entry) in entries.iter().enumerate() {
        match entry.as_object().and_then(record_from_object) {
            Some(record) => records.push(record),
            None => {
                debug!("Skipping entry {} in {}: no name", index, source.display());
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(
            "Skipped {} unnamed entries in {}",
            skipped,
            source.display()
        );
    }

    Ok(Catalogue::with_skipped(source, records, skipped))
}

/// Names of every template, in catalogue order
pub fn list_names(catalogue: &Catalogue) -> Vec<String> {
    catalogue.records().iter().map(|r| r.name.clone()).collect()
}

fn record_from_object(object: &Map<String, Value>) -> Option<TemplateRecord> {
    let name = object.get("name")?.as_str()?;
    let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);

    Some(TemplateRecord {
        name: name.to_string(),
        prompt_template: text("prompt"),
        negative_template: text("negative_prompt"),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse(json: &str) -> Result<Catalogue, CatalogueError> {
        parse_catalogue(Path::new("test.json"), json.as_bytes())
    }

    #[test]
    fn test_parse_preserves_order() {
        let catalogue = parse(
            r#"[
                {"name": "base", "prompt": "{prompt}"},
                {"name": "anime", "prompt": "anime {prompt}", "negative_prompt": "photo"},
                {"name": "3d", "prompt": "3d {prompt}"}
            ]"#,
        )
        .unwrap();

        assert_eq!(list_names(&catalogue), vec!["base", "anime", "3d"]);
        assert_eq!(
            catalogue.records()[1].negative_template.as_deref(),
            Some("photo")
        );
        assert_eq!(catalogue.records()[0].negative_template, None);
    }

    #[test]
    fn test_top_level_object_is_format_error() {
        let err = parse(r#"{"name": "base", "prompt": "{prompt}"}"#).unwrap_err();
        match err {
            CatalogueError::FormatError(path, kind) => {
                assert_eq!(path, PathBuf::from("test.json"));
                assert_eq!(kind, "an object");
            }
            other => panic!("Expected FormatError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse(r#"[{"name": "base""#).unwrap_err();
        assert!(matches!(err, CatalogueError::ParseError(_, _)));
    }

    #[test]
    fn test_unnamed_entries_are_skipped() {
        let catalogue = parse(
            r#"[
                {"name": "kept", "prompt": "{prompt}"},
                {"prompt": "orphan {prompt}"},
                "not an object",
                {"name": 42, "prompt": "{prompt}"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.skipped_entries(), 3);
        assert_eq!(catalogue.source_len(), 4);
    }

    #[test]
    fn test_list_names_one_shorter_than_source() {
        let catalogue = parse(
            r#"[
                {"name": "a", "prompt": "{prompt}"},
                {"prompt": "no name {prompt}"},
                {"name": "b", "prompt": "{prompt}"}
            ]"#,
        )
        .unwrap();

        assert_eq!(list_names(&catalogue).len(), catalogue.source_len() - 1);
    }

    #[test]
    fn test_record_without_prompt_is_kept() {
        let catalogue = parse(r#"[{"name": "draft", "negative_prompt": "ugly"}]"#).unwrap();
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.records()[0].prompt_template, None);
    }

    #[test]
    fn test_non_string_prompt_treated_as_absent() {
        let catalogue = parse(r#"[{"name": "odd", "prompt": ["a"], "negative_prompt": 3}]"#).unwrap();
        let record = &catalogue.records()[0];
        assert_eq!(record.prompt_template, None);
        assert_eq!(record.negative_template, None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut bytes = br#"[{"name": "caf"#.to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(br#"", "prompt": "{prompt}"}]"#);

        let catalogue = parse_catalogue(Path::new("test.json"), &bytes).unwrap();
        assert_eq!(catalogue.records()[0].name, "caf\u{fffd}");
    }

    #[test]
    fn test_leading_bom_is_ignored() {
        let catalogue = parse("\u{feff}[{\"name\": \"a\", \"prompt\": \"{prompt}\"}]").unwrap();
        assert_eq!(catalogue.len(), 1);
    }

    #[test]
    fn test_load_catalogue_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("styles.json");
        fs::write(&path, r#"[{"name": "a", "prompt": "{prompt}"}]"#).unwrap();

        let catalogue = load_catalogue(&path).unwrap();
        assert_eq!(catalogue.source(), path.as_path());
        assert_eq!(list_names(&catalogue), vec!["a"]);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = load_catalogue(&path).unwrap_err();
        match err {
            CatalogueError::ReadError(p, e) => {
                assert_eq!(p, path);
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected ReadError, got {:?}", other),
        }
    }
}
