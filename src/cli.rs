//! Command-line interface implementation for blockbaker.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::model::ModelRef;

/// Command-line arguments structure for blockbaker.
#[derive(Parser, Debug)]
#[command(author, version, about = "blockbaker: boilerplate for Minecraft mod models", long_about = None)]
pub struct Args {
    /// Mod identifier, used verbatim in asset paths and Java packages
    #[arg(value_name = "MOD_ID")]
    pub mod_id: String,

    /// Root directory of the mod project
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Model to generate, written as kind/name (e.g. block/bread_block).
    /// May be repeated. Skips model scanning.
    #[arg(short, long = "model", value_name = "KIND/NAME")]
    pub models: Vec<ModelRef>,

    /// Minecraft version the generated sources target
    #[arg(long, value_name = "VERSION")]
    pub target_version: Option<String>,

    /// Generate blocks rendered through an animated block entity
    #[arg(long)]
    pub aux_feature: bool,

    /// Read display names from stdin as a JSON object keyed by kind/name
    #[arg(short, long)]
    pub stdin: bool,

    /// Derive item models from block models when the mod has no item models
    #[arg(long)]
    pub synthesize_items: bool,

    /// Skip every prompt, using default display names.
    /// Generation starts without asking for confirmation.
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// List discovered models and exit
    #[arg(long)]
    pub scan_only: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
