//! Template resolution
//!
//! Resolution is a pure function of the catalogue and the request: it never
//! logs, never touches the filesystem and keeps no state between calls.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::{Result, StylerError};
use crate::models::{Catalogue, TemplateRecord};

/// Marker replaced by caller text inside templates
pub const PLACEHOLDER: &str = "{prompt}";

/// Joiner used when a negative template has no placeholder
pub const NEGATIVE_JOINER: &str = ", ";

/// Final prompt pair produced for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledPrompt {
    pub positive: String,
    pub negative: String,
    /// Name of the template that produced the pair
    pub style: String,
}

/// Look up `name` and apply its templates to the caller's text
///
/// The first record with a matching name wins.
pub fn resolve(catalogue: &Catalogue, name: &str, positive: &str, negative: &str) -> Result<StyledPrompt> {
    let record = catalogue
        .find(name)
        .ok_or_else(|| StylerError::TemplateNotFound(name.to_string()))?;
    apply_record(record, positive, negative)
}

/// Pick a template name uniformly at random and resolve it
///
/// The chosen name goes through [`resolve`], so a repeated name always
/// yields its first record.
pub fn resolve_random(catalogue: &Catalogue, positive: &str, negative: &str) -> Result<StyledPrompt> {
    resolve_random_with(catalogue, positive, negative, &mut rand::thread_rng())
}

/// [`resolve_random`] with a caller-provided random source
pub fn resolve_random_with<R: Rng + ?Sized>(
    catalogue: &Catalogue,
    positive: &str,
    negative: &str,
    rng: &mut R,
) -> Result<StyledPrompt> {
    let name = &catalogue
        .records()
        .choose(rng)
        .ok_or_else(|| StylerError::EmptyCatalogue(catalogue.source().display().to_string()))?
        .name;
    resolve(catalogue, name, positive, negative)
}

fn apply_record(record: &TemplateRecord, positive: &str, negative: &str) -> Result<StyledPrompt> {
    let prompt_template = record
        .prompt_template
        .as_deref()
        .ok_or_else(|| StylerError::MalformedTemplate(record.name.clone()))?;

    Ok(StyledPrompt {
        positive: apply_positive(prompt_template, positive),
        negative: merge_negative(record.negative_or_empty(), negative),
        style: record.name.clone(),
    })
}

/// Substitute caller text into the positive template
///
/// An empty result falls back to the caller's text.
pub fn apply_positive(template: &str, positive: &str) -> String {
    let prompt = template.replace(PLACEHOLDER, positive);
    if prompt.is_empty() {
        positive.to_string()
    } else {
        prompt
    }
}

/// Combine the template's negative wording with the caller's negative text
///
/// - no caller text: the template alone, placeholders removed
/// - no template: the caller text alone
/// - template with placeholder: caller text spliced in
/// - template without placeholder: `template, caller`
pub fn merge_negative(template: &str, negative: &str) -> String {
    if negative.is_empty() {
        return template.replace(PLACEHOLDER, "");
    }
    if template.is_empty() {
        return negative.to_string();
    }
    if template.contains(PLACEHOLDER) {
        template.replace(PLACEHOLDER, negative)
    } else {
        format!("{}{}{}", template, NEGATIVE_JOINER, negative)
    }
}
