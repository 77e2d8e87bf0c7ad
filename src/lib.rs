//! PromptStyler - named style templates for image-generation prompts
//!
//! A style family is a JSON catalogue of templates. Applying a template
//! splices the caller's positive text into the template's `{prompt}` marker
//! and merges the caller's negative text with the template's negative wording.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (families, styles, apply, validate)
//! - **core**: Catalogue loading, resolution, family registry, config loading
//! - **models**: Data structures (templates, catalogues, families, config)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{CatalogueError, Result, StylerError};
