use gridmarket_core::{
    models::{Map, Scenario, ScenarioId},
    presets::presets,
};
use serde::Serialize;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::{Level, event};

/// The scenarios available by id: the built-in presets, optionally extended
/// or overridden by a directory of scenario files.
#[derive(Debug, Clone)]
pub struct Catalog {
    scenarios: Map<ScenarioId, Scenario>,
}

/// A one-line description of a catalog scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Identifier to pass to `--preset`
    pub id: ScenarioId,
    /// Human-readable title
    pub name: String,
    /// A sentence describing the situation
    pub description: String,
    /// Number of generators
    pub generators: usize,
    /// Number of demand bids
    pub demand_bids: usize,
}

impl Catalog {
    /// Only the built-in presets
    pub fn builtin() -> Self {
        Self {
            scenarios: presets(),
        }
    }

    /// The built-in presets merged with every `*.json` scenario in `directory`.
    ///
    /// Files are read in name order. A scenario without an id takes the file
    /// stem as its id.
    pub fn load(directory: Option<&Path>) -> Result<Self, CatalogError> {
        let mut catalog = Self::builtin();
        let Some(directory) = directory else {
            return Ok(catalog);
        };

        if !directory.is_dir() {
            return Err(CatalogError::NotADirectory(directory.to_owned()));
        }

        let mut paths = directory
            .read_dir()
            .map_err(|source| CatalogError::Io {
                path: directory.to_owned(),
                source,
            })?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect::<Vec<_>>();
        paths.sort();

        for path in paths {
            let mut scenario = read_scenario(&path)?;
            if scenario.id.is_empty() {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    scenario.id = stem.into();
                }
            }
            catalog.insert(scenario, &path);
        }

        Ok(catalog)
    }

    fn insert(&mut self, scenario: Scenario, origin: &Path) {
        let id = scenario.id.clone();
        if self.scenarios.insert(id.clone(), scenario).is_some() {
            event!(
                Level::WARN,
                scenario = %id,
                path = %origin.display(),
                "scenario file replaces an existing entry"
            );
        } else {
            event!(
                Level::INFO,
                scenario = %id,
                path = %origin.display(),
                "loaded scenario"
            );
        }
    }

    /// Look up a scenario by id
    pub fn get(&self, id: &str) -> Result<&Scenario, CatalogError> {
        self.scenarios
            .get(&ScenarioId::from(id))
            .ok_or_else(|| CatalogError::UnknownScenario(id.to_owned()))
    }

    /// Summaries of every scenario, in catalog order
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.scenarios
            .values()
            .map(|scenario| CatalogEntry {
                id: scenario.id.clone(),
                name: scenario.name.clone(),
                description: scenario.description.clone(),
                generators: scenario.generators.len(),
                demand_bids: scenario.demand_bids.len(),
            })
            .collect()
    }

    /// The number of scenarios
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the catalog has no scenarios at all
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

fn read_scenario(path: &Path) -> Result<Scenario, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Failures while assembling or querying the catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The configured catalog directory is missing or not a directory
    #[error("catalog directory {} does not exist", .0.display())]
    NotADirectory(PathBuf),

    /// A catalog file could not be read
    #[error("unable to read {}: {source}", path.display())]
    Io {
        /// The file or directory being read
        path: PathBuf,
        /// The underlying failure
        source: std::io::Error,
    },

    /// A catalog file is not a valid scenario
    #[error("invalid scenario in {}: {source}", path.display())]
    Parse {
        /// The offending file
        path: PathBuf,
        /// The parse or validation failure
        source: serde_json::Error,
    },

    /// No scenario has the requested id
    #[error("no scenario with id {0}")]
    UnknownScenario(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CUSTOM: &str = r#"{
        "name": "Two units",
        "generators": [
            {"id": "a", "name": "A", "fuelType": "coal", "capacity": 100, "marginalCost": 10,
             "minOutput": 0, "rampRate": 0, "availability": 1, "co2Emissions": 1}
        ],
        "demandBids": [
            {"id": "d", "name": "D", "quantity": 50, "maxPrice": 40, "priority": "medium"}
        ]
    }"#;

    #[test]
    fn builtin_presets() {
        let catalog = Catalog::load(None).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.entries()[0].id.as_str(), "normal");
        assert!(matches!(
            catalog.get("nope"),
            Err(CatalogError::UnknownScenario(id)) if id == "nope"
        ));
    }

    #[test]
    fn directory_extends_catalog() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("custom.json"), CUSTOM).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a scenario").unwrap();

        let catalog = Catalog::load(Some(dir.path())).unwrap();
        assert_eq!(catalog.len(), 7);

        let custom = catalog.get("custom").unwrap();
        assert_eq!(custom.name, "Two units");
        assert_eq!(custom.generators.len(), 1);
    }

    #[test]
    fn directory_overrides_presets() {
        let dir = tempfile::tempdir().unwrap();
        let replacement = CUSTOM.replacen('{', r#"{ "id": "normal","#, 1);
        fs::write(dir.path().join("mine.json"), replacement).unwrap();

        let catalog = Catalog::load(Some(dir.path())).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get("normal").unwrap().name, "Two units");
        // the replacement keeps the preset's position
        assert_eq!(catalog.entries()[0].id.as_str(), "normal");
    }

    #[test]
    fn invalid_files_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let negative = CUSTOM.replace("\"quantity\": 50", "\"quantity\": -50");
        fs::write(dir.path().join("bad.json"), negative).unwrap();

        assert!(matches!(
            Catalog::load(Some(dir.path())),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Catalog::load(Some(&dir.path().join("absent"))),
            Err(CatalogError::NotADirectory(_))
        ));
    }
}
