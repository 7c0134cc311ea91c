use crate::{Catalog, CliError};
use clap::Args;
use gridmarket_core::models::Scenario;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

// Subcommands that clear a market take their scenario either from a file (or
// stdin) or from the catalog, and all of them write a single JSON document.

/// Where the scenario comes from
#[derive(Args)]
pub struct ScenarioArgs {
    /// The scenario JSON file ("-" implies stdin)
    #[arg(
        value_parser = clap::value_parser!(PathOrStd),
        required_unless_present = "preset",
        conflicts_with = "preset"
    )]
    input: Option<PathOrStd>,

    /// Use a scenario from the catalog instead of a file
    #[arg(short, long)]
    preset: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ScenarioArgs {
    /// Read, validate and return the requested scenario
    pub fn scenario(&self, catalog: &Catalog) -> anyhow::Result<Scenario> {
        match (&self.input, &self.preset) {
            (Some(input), _) => Ok(serde_json::from_reader(input.read()?)?),
            (None, Some(id)) => Ok(catalog.get(id)?.clone()),
            (None, None) => Err(CliError::MissingScenario.into()),
        }
    }
}

/// Where the result goes
#[derive(Args)]
pub struct OutputArgs {
    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl OutputArgs {
    /// Serialize `value` as JSON to the output
    pub fn write_json<T: Serialize + ?Sized>(&self, value: &T, pretty: bool) -> anyhow::Result<()> {
        let mut writer = self.output.write()?;
        if pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Clone)]
enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl PathOrStd {
    fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        match self {
            PathOrStd::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            PathOrStd::Std => Ok(Box::new(stdin().lock())),
        }
    }

    fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        match self {
            PathOrStd::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}
