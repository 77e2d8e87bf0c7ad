use crate::core::StylerRegistry;
use crate::error::StylerError;

/// List the selectable styles of one family
pub fn list_styles(registry: &mut StylerRegistry, family_id: &str) -> Result<(), StylerError> {
    let node = registry.node(family_id)?;
    let names = node.style_names();

    if names.is_empty() {
        println!("No styles found in {}.", node.catalogue().source().display());
        return Ok(());
    }

    println!("{} ({} styles):", node.family().display_name, names.len());
    for name in names {
        println!("  {}", name);
    }

    Ok(())
}
