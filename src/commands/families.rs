use crate::core::StylerRegistry;
use crate::error::StylerError;

/// List registered style families
pub fn list_families(registry: &StylerRegistry) -> Result<(), StylerError> {
    println!("=== Style Families ===\n");
    println!("Styles directory: {}\n", registry.styles_dir().display());

    for family in registry.families() {
        let path = registry.catalogue_path(family);
        let missing = if path.exists() { "" } else { " (missing)" };
        println!(
            "  {:<24} {:<40} {}{}",
            family.id,
            family.display_name,
            family.file.display(),
            missing
        );
    }

    Ok(())
}
