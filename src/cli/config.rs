use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::definition::renderer::RenderDefaults;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "govuk-form",
    version,
    about = "Render accessible GOV.UK form controls from YAML definitions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: govuk-form.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render form definitions to HTML fragments
    Render {
        /// Path to a form definition YAML file or a directory of them
        #[arg(long)]
        form: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the ids and name derived for an element
    Ids {
        /// Bound object name
        #[arg(long)]
        object: String,

        /// Attribute name
        #[arg(long)]
        attribute: String,

        /// Choice value, for collection items
        #[arg(long)]
        value: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `govuk-form.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub defaults: RenderDefaults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output file used when `--output` is not given
    pub output: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

pub const DEFAULT_CONFIG_PATH: &str = "govuk-form.yaml";

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = config_path, error = %e, "malformed config, using defaults");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}
