//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a test project with an empty styles folder
pub fn create_test_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let project_root = temp_dir.path().to_path_buf();

    fs::create_dir_all(project_root.join("styles")).expect("Failed to create styles dir");

    (temp_dir, project_root)
}

/// Write a catalogue file into the project's styles folder
pub fn create_catalogue(project_root: &Path, file: &str, json: &str) -> PathBuf {
    let path = project_root.join("styles").join(file);
    fs::write(&path, json).expect("Failed to write catalogue");
    path
}

/// Write promptstyler.toml into the project root
pub fn create_config(project_root: &Path, toml: &str) {
    fs::write(project_root.join("promptstyler.toml"), toml).expect("Failed to write config");
}

/// A small catalogue in the shipped file format
pub const MISC_CATALOGUE: &str = r#"[
    {
        "name": "base",
        "prompt": "{prompt}",
        "negative_prompt": ""
    },
    {
        "name": "misc-horror",
        "prompt": "horror-themed {prompt}, eerie, unsettling, dark, spooky",
        "negative_prompt": "cheerful, bright, vibrant, light-hearted"
    },
    {
        "name": "misc-minimalist",
        "prompt": "minimalist style {prompt} . simple, clean, uncluttered",
        "negative_prompt": "ornate, complicated, {prompt}"
    },
    {
        "prompt": "orphaned {prompt}"
    }
]"#;
