use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripplan::cli::{Cli, Command, OutputFormat};
use tripplan::config::Config;
use tripplan::{CatalogView, PlanReport, Planner};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    // Priority: CLI --log-level > config file > RUST_LOG > WARN, so stdout stays clean
    let level = cli_log_level.or(config_log_level).map(|s| match s.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
            tracing::Level::WARN
        }
    });

    let filter = match level {
        Some(level) => EnvFilter::from_default_env().add_directive(level.into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(tracing::Level::WARN.as_str())),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("tripplan starting");

    match cli.command {
        Command::Plan { budget, format } => {
            let budget = budget.unwrap_or(config.budget);
            let planner = Planner::new(config.catalog, &config.limits).context("Invalid catalog")?;
            let outcome = planner.plan(budget);
            let report = PlanReport::new(planner.catalog(), &outcome, config.currency);

            match format {
                OutputFormat::Text => println!("{}", report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
            }
        }
        Command::Catalog { format } => {
            config.catalog.validate(&config.limits).context("Invalid catalog")?;

            match format {
                OutputFormat::Text => print!("{}", CatalogView::new(&config.catalog, &config.currency)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config.catalog)?),
                OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&config.catalog)?),
            }
        }
        Command::Init { path, force } => {
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            Config::default().save(&path)?;
            println!("{} Wrote default config: {}", "✓".green(), path.display().to_string().cyan());
        }
    }

    Ok(())
}
