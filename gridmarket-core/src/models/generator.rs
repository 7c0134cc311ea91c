use super::GeneratorId;

/// The primary energy source of a generator.
///
/// Purely descriptive: clearing only ever looks at price and quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FuelType {
    /// Nuclear fission
    Nuclear,
    /// Coal-fired thermal
    Coal,
    /// Gas turbine or combined cycle
    Gas,
    /// Photovoltaic or solar thermal
    Solar,
    /// Onshore or offshore wind
    Wind,
    /// Run-of-river or reservoir hydro
    Hydro,
}

/// An offer to sell energy into the market.
///
/// A generator offers `capacity × availability` megawatts at its marginal
/// cost. The remaining operating characteristics are carried for display and
/// reporting, and never influence the clearing outcome.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Generator {
    /// Unique identifier of the generator
    pub id: GeneratorId,
    /// Human-readable name
    pub name: String,
    /// The fuel the generator burns (or harvests)
    pub fuel_type: FuelType,
    /// Nameplate capacity in MW
    pub capacity: f64,
    /// Offer price in $/MWh
    pub marginal_cost: f64,
    /// Minimum stable output in MW
    pub min_output: f64,
    /// Ramp rate in MW/hour
    pub ramp_rate: f64,
    /// Fraction of nameplate capacity actually offered, within [0, 1]
    pub availability: f64,
    /// Emission intensity in tCO2/MWh
    pub co2_emissions: f64,
}

impl Generator {
    /// Construct a fully available generator with no descriptive attributes.
    ///
    /// The name defaults to the id.
    pub fn new(
        id: impl Into<GeneratorId>,
        fuel_type: FuelType,
        capacity: f64,
        marginal_cost: f64,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            fuel_type,
            capacity,
            marginal_cost,
            min_output: 0.0,
            ramp_rate: 0.0,
            availability: 1.0,
            co2_emissions: 0.0,
        }
    }

    /// Replace the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the availability factor
    pub fn with_availability(mut self, availability: f64) -> Self {
        self.availability = availability;
        self
    }

    /// Replace the emission intensity
    pub fn with_co2_emissions(mut self, co2_emissions: f64) -> Self {
        self.co2_emissions = co2_emissions;
        self
    }

    /// The capacity actually offered to the market, in MW.
    ///
    /// Negative capacity counts as zero and availability is clamped into
    /// [0, 1]; a NaN in either factor yields zero.
    pub fn available_capacity(&self) -> f64 {
        let capacity = if self.capacity > 0.0 { self.capacity } else { 0.0 };
        let availability = if self.availability > 0.0 {
            self.availability.min(1.0)
        } else {
            0.0
        };
        capacity * availability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derates_capacity() {
        let generator = Generator::new("solar", FuelType::Solar, 300.0, 0.0).with_availability(0.5);
        assert_eq!(generator.available_capacity(), 150.0);
    }

    #[test]
    fn clamps_out_of_range_factors() {
        let overrated = Generator::new("a", FuelType::Gas, 100.0, 40.0).with_availability(1.5);
        assert_eq!(overrated.available_capacity(), 100.0);

        let negative = Generator::new("b", FuelType::Gas, -100.0, 40.0);
        assert_eq!(negative.available_capacity(), 0.0);

        let nan = Generator::new("c", FuelType::Gas, 100.0, 40.0).with_availability(f64::NAN);
        assert_eq!(nan.available_capacity(), 0.0);
    }

    #[test]
    fn parses_web_shape() {
        let generator: Generator = serde_json::from_str(
            r#"{ "id": "coal1", "name": "Coal Plant 1", "fuelType": "coal", "capacity": 800,
                 "marginalCost": 35, "minOutput": 400, "rampRate": 100,
                 "availability": 0.9, "co2Emissions": 0.95 }"#,
        )
        .unwrap();

        assert_eq!(generator.id.as_str(), "coal1");
        assert_eq!(generator.fuel_type, FuelType::Coal);
        assert_eq!(generator.marginal_cost, 35.0);
        assert_eq!(generator.co2_emissions, 0.95);
    }
}
