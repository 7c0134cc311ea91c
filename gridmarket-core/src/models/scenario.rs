use super::{BidId, DemandBid, Generator, GeneratorId, MarketResult, ScenarioId};
use crate::ports::Solver;
use rustc_hash::FxHashSet;

/// The physical backdrop of a scenario.
///
/// Weather readings are descriptive; outages take the named generators out of
/// the market entirely.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MarketConditions {
    /// Ambient temperature in °F
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub temperature: Option<f64>,
    /// Wind speed in mph
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub wind_speed: Option<f64>,
    /// Solar irradiance as a fraction of clear-sky
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub solar_irradiance: Option<f64>,
    /// Generators on forced or planned outage
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub outages: Vec<GeneratorId>,
}

/// A self-contained market snapshot: the offers, the bids and the conditions
/// they were made under.
///
/// Scenarios read from untrusted sources are validated on the way in (see
/// [`Scenario::validate`]), so a deserialized scenario always has finite,
/// non-negative numbers and unique participant ids.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ScenarioDto", into = "ScenarioDto")
)]
pub struct Scenario {
    /// Identifier of the scenario
    pub id: ScenarioId,
    /// Human-readable title
    pub name: String,
    /// A sentence describing the situation
    pub description: String,
    /// Generation offers
    pub generators: Vec<Generator>,
    /// Demand bids
    pub demand_bids: Vec<DemandBid>,
    /// Weather and outages
    pub market_conditions: MarketConditions,
}

impl Scenario {
    /// Check the scenario against the input contract.
    ///
    /// Every number must be finite and non-negative, availabilities must lie
    /// within [0, 1], participant ids must be unique and outages must name a
    /// generator of the scenario.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut generator_ids = FxHashSet::default();
        for generator in &self.generators {
            let owner = || format!("generator {}", generator.id);
            for (field, value) in [
                ("capacity", generator.capacity),
                ("marginalCost", generator.marginal_cost),
                ("minOutput", generator.min_output),
                ("rampRate", generator.ramp_rate),
                ("availability", generator.availability),
                ("co2Emissions", generator.co2_emissions),
            ] {
                check_number(value, field, owner)?;
            }
            if generator.availability > 1.0 {
                return Err(ValidationError::Availability(generator.id.clone()));
            }
            if !generator_ids.insert(&generator.id) {
                return Err(ValidationError::DuplicateGenerator(generator.id.clone()));
            }
        }

        let mut bid_ids = FxHashSet::default();
        for bid in &self.demand_bids {
            let owner = || format!("demand bid {}", bid.id);
            check_number(bid.quantity, "quantity", owner)?;
            check_number(bid.max_price, "maxPrice", owner)?;
            if !bid_ids.insert(&bid.id) {
                return Err(ValidationError::DuplicateBid(bid.id.clone()));
            }
        }

        if let Some(unknown) = self
            .market_conditions
            .outages
            .iter()
            .find(|id| !generator_ids.contains(id))
        {
            return Err(ValidationError::UnknownOutage(unknown.clone()));
        }

        Ok(())
    }

    /// The generators as offered to the market: outaged units have their
    /// availability forced to zero.
    pub fn effective_generators(&self) -> Vec<Generator> {
        let outages = &self.market_conditions.outages;
        self.generators
            .iter()
            .cloned()
            .map(|mut generator| {
                if outages.contains(&generator.id) {
                    generator.availability = 0.0;
                }
                generator
            })
            .collect()
    }

    /// Clear the scenario's market with the given solver
    pub fn solve<S: Solver + ?Sized>(&self, solver: &S) -> MarketResult {
        solver.solve(&self.effective_generators(), &self.demand_bids)
    }
}

fn check_number(
    value: f64,
    field: &'static str,
    owner: impl Fn() -> String,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        Err(ValidationError::NonFinite {
            owner: owner(),
            field,
        })
    } else if value < 0.0 {
        Err(ValidationError::Negative {
            owner: owner(),
            field,
        })
    } else {
        Ok(())
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[derive(Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScenarioDto {
    /// Identifier of the scenario
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: ScenarioId,
    /// Human-readable title
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// A sentence describing the situation
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Generation offers
    pub generators: Vec<Generator>,
    /// Demand bids
    pub demand_bids: Vec<DemandBid>,
    /// Weather and outages
    #[cfg_attr(feature = "serde", serde(default))]
    pub market_conditions: MarketConditions,
}

impl TryFrom<ScenarioDto> for Scenario {
    type Error = ValidationError;

    fn try_from(value: ScenarioDto) -> Result<Self, Self::Error> {
        let scenario = Self {
            id: value.id,
            name: value.name,
            description: value.description,
            generators: value.generators,
            demand_bids: value.demand_bids,
            market_conditions: value.market_conditions,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

impl From<Scenario> for ScenarioDto {
    fn from(value: Scenario) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            generators: value.generators,
            demand_bids: value.demand_bids,
            market_conditions: value.market_conditions,
        }
    }
}

/// The ways in which a scenario may violate the input contract
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A numeric field is NaN or infinite
    #[error("{field} of {owner} is not a finite number")]
    NonFinite {
        /// The participant carrying the value
        owner: String,
        /// The offending field
        field: &'static str,
    },
    /// A numeric field is below zero
    #[error("{field} of {owner} cannot be negative")]
    Negative {
        /// The participant carrying the value
        owner: String,
        /// The offending field
        field: &'static str,
    },
    /// An availability factor exceeds one
    #[error("availability of generator {0} lies outside [0, 1]")]
    Availability(GeneratorId),
    /// Two generators share an id
    #[error("generator id {0} is used more than once")]
    DuplicateGenerator(GeneratorId),
    /// Two demand bids share an id
    #[error("demand bid id {0} is used more than once")]
    DuplicateBid(BidId),
    /// An outage names a generator that is not part of the scenario
    #[error("outage refers to unknown generator {0}")]
    UnknownOutage(GeneratorId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FuelType, Priority};
    use rstest::*;

    #[fixture]
    fn scenario() -> Scenario {
        Scenario {
            id: "test".into(),
            name: "Test".into(),
            description: String::new(),
            generators: vec![
                Generator::new("nuclear", FuelType::Nuclear, 1000.0, 15.0),
                Generator::new("gas", FuelType::Gas, 400.0, 55.0),
            ],
            demand_bids: vec![DemandBid::new("load", 1200.0, 80.0).with_priority(Priority::High)],
            market_conditions: MarketConditions::default(),
        }
    }

    #[rstest]
    fn accepts_well_formed(scenario: Scenario) {
        assert_eq!(scenario.validate(), Ok(()));
    }

    #[rstest]
    fn rejects_nan(mut scenario: Scenario) {
        scenario.generators[1].marginal_cost = f64::NAN;
        assert_eq!(
            scenario.validate(),
            Err(ValidationError::NonFinite {
                owner: "generator gas".into(),
                field: "marginalCost",
            })
        );
    }

    #[rstest]
    fn rejects_negative_quantity(mut scenario: Scenario) {
        scenario.demand_bids[0].quantity = -5.0;
        assert_eq!(
            scenario.validate(),
            Err(ValidationError::Negative {
                owner: "demand bid load".into(),
                field: "quantity",
            })
        );
    }

    #[rstest]
    fn rejects_overrated_availability(mut scenario: Scenario) {
        scenario.generators[0].availability = 1.2;
        assert_eq!(
            scenario.validate(),
            Err(ValidationError::Availability("nuclear".into()))
        );
    }

    #[rstest]
    fn rejects_duplicate_generators(mut scenario: Scenario) {
        scenario.generators[1].id = "nuclear".into();
        assert_eq!(
            scenario.validate(),
            Err(ValidationError::DuplicateGenerator("nuclear".into()))
        );
    }

    #[rstest]
    fn rejects_duplicate_bids(mut scenario: Scenario) {
        scenario.demand_bids.push(DemandBid::new("load", 10.0, 10.0));
        assert_eq!(
            scenario.validate(),
            Err(ValidationError::DuplicateBid("load".into()))
        );
    }

    #[rstest]
    fn outages_remove_capacity(mut scenario: Scenario) {
        scenario.market_conditions.outages = vec!["nuclear".into()];
        assert_eq!(scenario.validate(), Ok(()));

        let offered = scenario.effective_generators();
        assert_eq!(offered[0].availability, 0.0);
        assert_eq!(offered[1].availability, 1.0);
        // the scenario itself is untouched
        assert_eq!(scenario.generators[0].availability, 1.0);

        scenario.market_conditions.outages = vec!["hydro".into()];
        assert_eq!(
            scenario.validate(),
            Err(ValidationError::UnknownOutage("hydro".into()))
        );
    }

    #[test]
    fn deserialization_validates() {
        let ok: Scenario = serde_json::from_str(
            r#"{ "generators": [{ "id": "g1", "name": "G1", "fuelType": "hydro", "capacity": 100,
                   "marginalCost": 5, "minOutput": 0, "rampRate": 10, "availability": 1,
                   "co2Emissions": 0 }],
                 "demandBids": [{ "id": "d1", "name": "D1", "quantity": 50, "maxPrice": 20,
                   "priority": "critical" }],
                 "marketConditions": { "windSpeed": 12 } }"#,
        )
        .unwrap();
        assert!(ok.id.is_empty());
        assert_eq!(ok.market_conditions.wind_speed, Some(12.0));
        assert_eq!(ok.demand_bids[0].priority, Priority::Critical);

        let err = serde_json::from_str::<Scenario>(
            r#"{ "generators": [{ "id": "g1", "name": "G1", "fuelType": "hydro", "capacity": 100,
                   "marginalCost": 5, "minOutput": 0, "rampRate": 10, "availability": 2,
                   "co2Emissions": 0 }],
                 "demandBids": [] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("availability of generator g1"));
    }
}
