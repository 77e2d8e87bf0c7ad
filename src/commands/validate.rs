use std::collections::HashSet;

use crate::core::StylerRegistry;
use crate::error::StylerError;
use crate::models::Catalogue;

/// Validation result
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Families whose catalogue loaded
    pub loaded: usize,
}

/// Load every family catalogue from disk and report problems
pub fn validate_catalogues(registry: &mut StylerRegistry) -> Result<ValidationResult, StylerError> {
    let mut result = ValidationResult {
        valid: true,
        errors: Vec::new(),
        warnings: Vec::new(),
        loaded: 0,
    };

    if !registry.styles_dir().is_dir() {
        result.errors.push(format!(
            "Styles directory not found: {}",
            registry.styles_dir().display()
        ));
        result.valid = false;
    }

    let ids: Vec<String> = registry.families().iter().map(|f| f.id.clone()).collect();
    for id in ids {
        match registry.reload(&id) {
            Ok(node) => {
                result.loaded += 1;
                check_catalogue(&id, node.catalogue(), &mut result.warnings);
            }
            Err(e) => {
                result.errors.push(format!("Family '{}': {}", id, e));
                result.valid = false;
            }
        }
    }

    Ok(result)
}

fn check_catalogue(family_id: &str, catalogue: &Catalogue, warnings: &mut Vec<String>) {
    if catalogue.is_empty() {
        warnings.push(format!("Family '{}': catalogue has no templates", family_id));
    }

    if catalogue.skipped_entries() > 0 {
        warnings.push(format!(
            "Family '{}': {} entries without a name were skipped",
            family_id,
            catalogue.skipped_entries()
        ));
    }

    let mut seen = HashSet::new();
    for record in catalogue.records() {
        if record.prompt_template.is_none() {
            warnings.push(format!(
                "Family '{}': template '{}' has no prompt and cannot be applied",
                family_id, record.name
            ));
        }
        if !seen.insert(record.name.as_str()) {
            warnings.push(format!(
                "Family '{}': duplicate template name '{}' (first one wins)",
                family_id, record.name
            ));
        }
    }
}

/// Print validation result
pub fn print_validation_result(result: &ValidationResult) {
    println!("=== Validation Result ===\n");

    if result.valid {
        println!("Status: VALID\n");
    } else {
        println!("Status: INVALID\n");
    }

    println!("Catalogues loaded: {}\n", result.loaded);

    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!("  - {}", error);
        }
        println!();
    }

    if !result.warnings.is_empty() {
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  - {}", warning);
        }
        println!();
    }

    if result.valid && result.errors.is_empty() && result.warnings.is_empty() {
        println!("All checks passed!");
    }
}
