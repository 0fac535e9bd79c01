//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use satzart_core::{get_lexicon, list_available_lexicons, ClauseLabel, DEFAULT_LEXICON};

use crate::output::OutputFormat;

pub mod analyze;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify the sentences of one or more documents
    Analyze(analyze::AnalyzeArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List clause labels in report order
    Labels,

    /// List available output formats
    Formats,

    /// List embedded lexicons
    Lexicons,
}

impl Commands {
    /// Run the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render()?);
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Listing text, one entry per line
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        match self {
            ListCommands::Labels => {
                out.push_str("Clause labels:\n");
                for label in ClauseLabel::ALL {
                    out.push_str(&format!(
                        "  {:<16} {}\n",
                        label.as_str(),
                        label.description()
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Output formats:\n");
                for format in OutputFormat::ALL {
                    out.push_str(&format!(
                        "  {:<10} {}\n",
                        format.as_str(),
                        format.description()
                    ));
                }
            }
            ListCommands::Lexicons => {
                out.push_str("Embedded lexicons:\n");
                for code in list_available_lexicons() {
                    let lexicon = get_lexicon(code)?;
                    let default = if code == DEFAULT_LEXICON {
                        " (default)"
                    } else {
                        ""
                    };
                    out.push_str(&format!("  {:<10} {}{}\n", code, lexicon.name(), default));
                }
            }
        }
        Ok(out)
    }
}
