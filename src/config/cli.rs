use super::toml_config::FileConfig;
use super::ResolvedConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dnd-classes")]
#[command(about = "Browse D&D character classes from the remote reference API")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Base address of the D&D API")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Write logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List class names
    Classes,
    /// Show one class in full
    Class { name: String },
    /// Print the class list payload exactly as received
    Raw,
    /// Print a character card
    Card {
        #[arg(long)]
        name: String,
        #[arg(long = "class")]
        class_type: String,
        #[arg(long)]
        level: String,
    },
    /// List the names stored in a table
    Names { table: String },
    /// Show the columns of a table
    Describe { table: String },
    /// List the endpoints the API advertises
    Capabilities,
    /// Check that the API answers
    Health,
}

impl CliConfig {
    /// Loads the config file (if any), applies flags on top and validates.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = FileConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let resolved = ResolvedConfig::merge(
            file.as_ref(),
            self.base_url.as_deref(),
            self.verbose,
            self.json_logs,
        );
        resolved.validate()?;
        Ok(resolved)
    }
}
