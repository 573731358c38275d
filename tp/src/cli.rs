//! CLI argument parsing for tripplan

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::Amount;
use crate::config::CONFIG_FILE_NAME;

#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(author, version, about = "Budget-constrained trip planner", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the most expensive plan that fits the budget
    Plan {
        /// Total budget in whole currency units (default: from config)
        budget: Option<Amount>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the catalog in effect
    Catalog {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Write the default configuration to a file
    Init {
        /// Destination path
        #[arg(default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for plan and catalog commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("Unknown format: {}. Use: text, json, or yaml", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_with_budget() {
        let cli = Cli::try_parse_from(["tp", "plan", "30000000", "--format", "json"]).unwrap();
        match cli.command {
            Command::Plan { budget, format } => {
                assert_eq!(budget, Some(30_000_000));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_plan_defaults() {
        let cli = Cli::try_parse_from(["tp", "-l", "debug", "plan"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Plan { budget, format } => {
                assert_eq!(budget, None);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_budget_rejected() {
        assert!(Cli::try_parse_from(["tp", "plan", "--", "-5"]).is_err());
        assert!(Cli::try_parse_from(["tp", "plan", "lots"]).is_err());
    }

    #[test]
    fn test_init_default_path() {
        let cli = Cli::try_parse_from(["tp", "init"]).unwrap();
        match cli.command {
            Command::Init { path, force } => {
                assert_eq!(path, PathBuf::from("tripplan.yml"));
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("table".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
