use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::StylerError;
use crate::models::Config;

/// Load configuration with CLI overrides
///
/// An explicit `config_file` must exist; otherwise promptstyler.toml in
/// `project_root` is used when present.
pub fn load_config(
    project_root: &Path,
    config_file: Option<&Path>,
    styles_dir: Option<PathBuf>,
    log_prompt: bool,
) -> Result<Config, StylerError> {
    let config = match config_file {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(project_root)?,
    };
    let config = config.with_overrides(styles_dir, log_prompt);

    info!(
        "Configuration loaded: styles_dir={}, families={}, log_prompt={}",
        config.styles_dir(project_root).display(),
        config.families().len(),
        config.behavior.log_prompt
    );

    Ok(config)
}
