use clap::Parser;
use gridmarket_solver::{MeritOrderSolver, market_curves};
use std::path::PathBuf;
use tracing::{Level, event};

mod catalog;
pub use catalog::{Catalog, CatalogEntry, CatalogError};

mod commands;
pub use commands::*;

mod config;
pub use config::{AppConfig, CatalogConfig, OutputConfig};

mod io;
pub use io::*;

// The top-level arguments: an optional config file and the subcommand
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML or JSON configuration file
    #[arg(short, long, global = true, env = "GRIDMARKET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;
        let catalog = Catalog::load(config.catalog.directory.as_deref())?;
        let pretty = config.output.pretty;

        match self.command {
            Commands::Solve { source } => {
                let scenario = source.scenario(&catalog)?;
                event!(Level::INFO, scenario = %scenario.id, "clearing scenario");

                let result = scenario.solve(&MeritOrderSolver);
                event!(
                    Level::INFO,
                    price = result.clearing_price,
                    quantity = result.cleared_quantity,
                    welfare = result.social_welfare(),
                    emissions = result.total_emissions(),
                    "scenario cleared"
                );

                source.output.write_json(&result, pretty)?;
            }
            Commands::Curves { source } => {
                let scenario = source.scenario(&catalog)?;
                let curves = market_curves(&scenario.effective_generators(), &scenario.demand_bids);
                source.output.write_json(&curves, pretty)?;
            }
            Commands::Presets { output } => {
                output.write_json(&catalog.entries(), pretty)?;
            }
            Commands::Preset { id, output } => {
                output.write_json(catalog.get(&id)?, pretty)?;
            }
            Commands::Schema { output } => {
                output.write_json(&Schemas::generate(), pretty)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("No scenario given, pass a file or --preset")]
    MissingScenario,
}
