use crate::{OutputArgs, ScenarioArgs};
use clap::Subcommand;
use gridmarket_core::models::{MarketCurves, MarketResult, ScenarioDto};
use schemars::{Schema, schema_for};
use serde::Serialize;

#[derive(Subcommand)]
pub enum Commands {
    /// Clear a scenario and report the market result
    Solve {
        #[command(flatten)]
        source: ScenarioArgs,
    },

    /// Report the supply and demand curves of a scenario and where they cross
    Curves {
        #[command(flatten)]
        source: ScenarioArgs,
    },

    /// List the scenarios in the catalog
    Presets {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a catalog scenario as JSON
    Preset {
        /// The scenario id
        id: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write the JSON schema of the scenario input and of the reports
    Schema {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// JSON schemas of every document the tools read or write
#[derive(Serialize)]
pub struct Schemas {
    pub scenario: Schema,
    pub result: Schema,
    pub curves: Schema,
}

impl Schemas {
    pub fn generate() -> Self {
        Self {
            scenario: schema_for!(ScenarioDto),
            result: schema_for!(MarketResult),
            curves: schema_for!(MarketCurves),
        }
    }
}
