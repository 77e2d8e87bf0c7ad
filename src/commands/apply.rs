use std::io::IsTerminal;
use tracing::debug;

use dialoguer::{theme::ColorfulTheme, Select};

use crate::core::{StyleNode, StyleRequest, StyledPrompt, StylerRegistry};
use crate::error::StylerError;

/// Options for the apply command
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    pub family: String,
    pub style: Option<String>,
    pub positive: String,
    pub negative: String,
    pub auto_select: bool,
    pub log_prompt: bool,
    pub json: bool,
}

/// Apply a style and print the resulting prompts
pub fn apply_style(registry: &mut StylerRegistry, options: ApplyOptions) -> Result<(), StylerError> {
    let node = registry.node(&options.family)?;

    let mut options = options;
    if options.style.is_none() && !options.auto_select && std::io::stdin().is_terminal() {
        options.style = Some(prompt_for_style(&node)?);
    }

    let result = resolve_options(&node, &options)?;
    print_result(&result, options.json)
}

/// Resolve without any interaction
pub fn resolve_options(node: &StyleNode, options: &ApplyOptions) -> Result<StyledPrompt, StylerError> {
    let request = StyleRequest {
        positive: options.positive.clone(),
        negative: options.negative.clone(),
        style: options.style.clone(),
        auto_select: options.auto_select,
        log_prompt: options.log_prompt,
    };
    debug!(
        "Applying {} style {:?} (auto_select={})",
        node.family().id,
        request.style,
        request.auto_select
    );
    node.apply(&request)
}

fn print_result(result: &StyledPrompt, json: bool) -> Result<(), StylerError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("style: {}", result.style);
        println!("positive: {}", result.positive);
        println!("negative: {}", result.negative);
    }
    Ok(())
}

/// Prompt user to select a style interactively
fn prompt_for_style(node: &StyleNode) -> Result<String, StylerError> {
    let names = node.style_names();
    if names.is_empty() {
        return Err(StylerError::EmptyCatalogue(node.family().id.clone()));
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Select a {} style", node.family().display_name))
        .items(&names)
        .default(0)
        .interact()
        .map_err(|e| StylerError::Prompt(format!("Failed to get user input: {}", e)))?;

    Ok(names[selection].clone())
}
