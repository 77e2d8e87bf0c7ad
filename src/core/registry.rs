//! Family registry: one generic node per configured style family

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::core::catalogue_cache::CatalogueCache;
use crate::core::hook::{ResolveEvent, ResolveHook, TracingHook};
use crate::core::loader::list_names;
use crate::core::resolver::{resolve, resolve_random, StyledPrompt};
use crate::error::{Result, StylerError};
use crate::models::{Catalogue, Config, StyleFamily};

/// One request against a style node
#[derive(Debug, Clone, Default)]
pub struct StyleRequest {
    pub positive: String,
    pub negative: String,
    /// Template to apply; ignored when `auto_select` is set
    pub style: Option<String>,
    /// Pick a random template instead of `style`
    pub auto_select: bool,
    /// Report the call through the tracing hook
    pub log_prompt: bool,
}

impl StyleRequest {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn auto_select(mut self) -> Self {
        self.auto_select = true;
        self
    }
}

/// A style family bound to a catalogue snapshot
#[derive(Debug, Clone)]
pub struct StyleNode {
    family: StyleFamily,
    catalogue: Arc<Catalogue>,
}

impl StyleNode {
    pub fn new(family: StyleFamily, catalogue: Arc<Catalogue>) -> Self {
        Self { family, catalogue }
    }

    pub fn family(&self) -> &StyleFamily {
        &self.family
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Selectable style names, in catalogue order
    pub fn style_names(&self) -> Vec<String> {
        list_names(&self.catalogue)
    }

    /// Resolve a request, logging through `tracing` when it asks for it
    pub fn apply(&self, request: &StyleRequest) -> Result<StyledPrompt> {
        let hook = request.log_prompt.then_some(&TracingHook as &dyn ResolveHook);
        self.apply_with_hook(request, hook)
    }

    /// Resolve a request, reporting it to `hook` on success
    pub fn apply_with_hook(
        &self,
        request: &StyleRequest,
        hook: Option<&dyn ResolveHook>,
    ) -> Result<StyledPrompt> {
        let result = if request.auto_select {
            resolve_random(&self.catalogue, &request.positive, &request.negative)?
        } else {
            let style = request
                .style
                .as_deref()
                .ok_or_else(|| StylerError::StyleNotSelected(self.family.id.clone()))?;
            resolve(&self.catalogue, style, &request.positive, &request.negative)?
        };

        if let Some(hook) = hook {
            hook.on_resolve(&ResolveEvent {
                family: &self.family.id,
                positive: &request.positive,
                negative: &request.negative,
                result: &result,
            });
        }

        Ok(result)
    }
}

/// Registered style families and their catalogues
pub struct StylerRegistry {
    styles_dir: PathBuf,
    families: Vec<StyleFamily>,
    cache: CatalogueCache,
}

impl StylerRegistry {
    pub fn new(styles_dir: PathBuf, families: Vec<StyleFamily>) -> Self {
        Self {
            styles_dir,
            families,
            cache: CatalogueCache::new(),
        }
    }

    /// Registry over the configured families and styles directory
    pub fn from_config(config: &Config, project_root: &Path) -> Self {
        Self::new(config.styles_dir(project_root), config.families())
    }

    pub fn styles_dir(&self) -> &Path {
        &self.styles_dir
    }

    /// Families in registration order
    pub fn families(&self) -> &[StyleFamily] {
        &self.families
    }

    pub fn family(&self, id: &str) -> Result<&StyleFamily> {
        self.families
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| StylerError::UnknownFamily(id.to_string()))
    }

    /// Location of a family's catalogue file
    pub fn catalogue_path(&self, family: &StyleFamily) -> PathBuf {
        if family.file.is_absolute() {
            family.file.clone()
        } else {
            self.styles_dir.join(&family.file)
        }
    }

    /// Node for `id` read fresh from disk, skipping any cached snapshot
    ///
    /// Nodes handed out earlier keep their old catalogue.
    pub fn reload(&mut self, id: &str) -> Result<StyleNode> {
        let path = self.catalogue_path(self.family(id)?);
        self.cache.invalidate(&path);
        self.node(id)
    }

    /// Node for `id` backed by the current catalogue snapshot
    pub fn node(&mut self, id: &str) -> Result<StyleNode> {
        let family = self.family(id)?.clone();
        let path = self.catalogue_path(&family);
        debug!("Loading catalogue for {} from {}", family.id, path.display());
        let catalogue = self.cache.get_or_load(&path)?;
        Ok(StyleNode::new(family, catalogue))
    }
}
