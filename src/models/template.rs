//! Template records and the catalogues that hold them

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A named style template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRecord {
    /// Identifier shown in the style selection list
    pub name: String,
    /// Positive template (`prompt` in the catalogue file)
    #[serde(rename = "prompt")]
    pub prompt_template: Option<String>,
    /// Negative template (`negative_prompt` in the catalogue file)
    #[serde(rename = "negative_prompt", skip_serializing_if = "Option::is_none")]
    pub negative_template: Option<String>,
}

impl TemplateRecord {
    pub fn new(name: impl Into<String>, prompt_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt_template: Some(prompt_template.into()),
            negative_template: None,
        }
    }

    pub fn with_negative(mut self, negative_template: impl Into<String>) -> Self {
        self.negative_template = Some(negative_template.into());
        self
    }

    /// Negative template, empty when absent
    pub fn negative_or_empty(&self) -> &str {
        self.negative_template.as_deref().unwrap_or("")
    }
}

/// Ordered, read-only list of templates loaded from one catalogue file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    source: PathBuf,
    records: Vec<TemplateRecord>,
    skipped: usize,
}

impl Catalogue {
    /// Build a catalogue from already validated records
    pub fn new(source: impl Into<PathBuf>, records: Vec<TemplateRecord>) -> Self {
        Self::with_skipped(source, records, 0)
    }

    pub(crate) fn with_skipped(
        source: impl Into<PathBuf>,
        records: Vec<TemplateRecord>,
        skipped: usize,
    ) -> Self {
        Self {
            source: source.into(),
            records,
            skipped,
        }
    }

    /// Where the catalogue was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Records in catalogue order
    pub fn records(&self) -> &[TemplateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of entries dropped at load time because they had no name
    pub fn skipped_entries(&self) -> usize {
        self.skipped
    }

    /// Length of the raw entry list in the source, skipped entries included
    pub fn source_len(&self) -> usize {
        self.records.len() + self.skipped
    }

    /// First record with the given name
    pub fn find(&self, name: &str) -> Option<&TemplateRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}
