use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for PromptStyler
#[derive(Error, Debug)]
pub enum StylerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("No template found with name '{0}'")]
    TemplateNotFound(String),

    #[error("Template '{0}' has no usable prompt")]
    MalformedTemplate(String),

    #[error("Catalogue for '{0}' contains no templates")]
    EmptyCatalogue(String),

    #[error("Unknown style family: {0}")]
    UnknownFamily(String),

    #[error("No style selected for '{0}' (pass --style or --auto-select)")]
    StyleNotSelected(String),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Interactive prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading a template catalogue
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Failed to read catalogue {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("Failed to parse catalogue {0}: {1}")]
    ParseError(PathBuf, serde_json::Error),

    #[error("Invalid catalogue {0}: expected a list of templates, found {1}")]
    FormatError(PathBuf, &'static str),
}

pub type Result<T> = std::result::Result<T, StylerError>;
