use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use promptstyler::commands::{
    apply_style, list_families, list_styles, print_validation_result, validate_catalogues,
    ApplyOptions,
};
use promptstyler::core::{load_config, StylerRegistry};
use promptstyler::StylerError;

/// PromptStyler - apply named style templates to image prompts
#[derive(Parser)]
#[command(name = "promptstyler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to promptstyler.toml in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the styles directory
    #[arg(long, global = true)]
    styles_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered style families
    Families,

    /// List the styles of a family
    Styles {
        /// Family id (e.g., "misc")
        family: String,
    },

    /// Apply a style to a prompt
    Apply {
        /// Family id (e.g., "misc")
        family: String,

        /// Style name within the family
        #[arg(short, long)]
        style: Option<String>,

        /// Positive prompt text
        #[arg(short, long, default_value = "")]
        positive: String,

        /// Negative prompt text
        #[arg(short, long, default_value = "")]
        negative: String,

        /// Pick a random style from the family
        #[arg(long)]
        auto_select: bool,

        /// Log inputs and outputs of the resolve call
        #[arg(long)]
        log_prompt: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check every family catalogue
    Validate,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), StylerError> {
    let project_root = std::env::current_dir()?;
    let log_prompt = matches!(cli.command, Commands::Apply { log_prompt: true, .. });
    let config = load_config(
        &project_root,
        cli.config.as_deref(),
        cli.styles_dir,
        log_prompt,
    )?;
    let mut registry = StylerRegistry::from_config(&config, &project_root);

    match cli.command {
        Commands::Families => list_families(&registry),

        Commands::Styles { family } => list_styles(&mut registry, &family),

        Commands::Apply {
            family,
            style,
            positive,
            negative,
            auto_select,
            log_prompt: _,
            json,
        } => {
            let options = ApplyOptions {
                family,
                style,
                positive,
                negative,
                auto_select,
                log_prompt: config.behavior.log_prompt,
                json,
            };
            apply_style(&mut registry, options)
        }

        Commands::Validate => {
            let result = validate_catalogues(&mut registry)?;
            print_validation_result(&result);
            if !result.valid {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
