//! Built-in teaching scenarios.
//!
//! Each preset isolates one market phenomenon: merit-order dispatch, the
//! supply/demand crossing, scarcity pricing and renewable displacement.

use crate::models::{
    DemandBid, FuelType, Generator, Map, MarketConditions, Priority, Scenario, ScenarioId,
};
use FuelType::*;
use Priority::*;

// id, name, fuel, capacity, marginal cost, min output, ramp rate, availability, co2
type GeneratorRow = (&'static str, &'static str, FuelType, f64, f64, f64, f64, f64, f64);
// id, name, quantity, max price, priority
type BidRow = (&'static str, &'static str, f64, f64, Priority);

/// All built-in scenarios, keyed by id, in presentation order
pub fn presets() -> Map<ScenarioId, Scenario> {
    [
        normal(),
        peak_demand(),
        intro_merit_order(),
        supply_demand_intersection(),
        peak_demand_pricing(),
        renewable_integration(),
    ]
    .into_iter()
    .map(|scenario| (scenario.id.clone(), scenario))
    .collect()
}

/// Look up a single built-in scenario
pub fn preset(id: &str) -> Option<Scenario> {
    let mut presets = presets();
    presets.shift_remove(&ScenarioId::from(id))
}

fn scenario(
    id: &str,
    name: &str,
    description: &str,
    generators: &[GeneratorRow],
    demand_bids: &[BidRow],
    market_conditions: MarketConditions,
) -> Scenario {
    Scenario {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        generators: generators
            .iter()
            .map(
                |&(id, name, fuel_type, capacity, marginal_cost, min_output, ramp_rate, availability, co2_emissions)| {
                    Generator {
                        id: id.into(),
                        name: name.into(),
                        fuel_type,
                        capacity,
                        marginal_cost,
                        min_output,
                        ramp_rate,
                        availability,
                        co2_emissions,
                    }
                },
            )
            .collect(),
        demand_bids: demand_bids
            .iter()
            .map(|&(id, name, quantity, max_price, priority)| {
                DemandBid::new(id, quantity, max_price)
                    .with_name(name)
                    .with_priority(priority)
            })
            .collect(),
        market_conditions,
    }
}

fn weather(temperature: f64, wind_speed: f64, solar_irradiance: f64) -> MarketConditions {
    MarketConditions {
        temperature: Some(temperature),
        wind_speed: Some(wind_speed),
        solar_irradiance: Some(solar_irradiance),
        outages: Vec::new(),
    }
}

fn normal() -> Scenario {
    scenario(
        "normal",
        "Normal Market Conditions",
        "Typical summer day with moderate demand",
        &[
            ("nuclear1", "Nuclear Plant 1", Nuclear, 1000.0, 15.0, 800.0, 50.0, 0.95, 0.0),
            ("coal1", "Coal Plant 1", Coal, 800.0, 35.0, 400.0, 100.0, 0.9, 0.95),
            ("gas1", "Gas Turbine 1", Gas, 500.0, 45.0, 100.0, 300.0, 0.95, 0.4),
            ("gas2", "Gas Turbine 2", Gas, 400.0, 50.0, 80.0, 250.0, 0.9, 0.4),
            ("solar1", "Solar Farm 1", Solar, 300.0, 0.0, 0.0, 300.0, 0.7, 0.0),
            ("wind1", "Wind Farm 1", Wind, 250.0, 0.0, 0.0, 250.0, 0.6, 0.0),
        ],
        &[
            ("residential", "Residential Load", 1200.0, 80.0, High),
            ("commercial", "Commercial Load", 800.0, 120.0, High),
            ("industrial", "Industrial Load", 600.0, 60.0, Medium),
            ("interruptible", "Interruptible Load", 300.0, 150.0, Low),
        ],
        weather(75.0, 12.0, 0.8),
    )
}

fn peak_demand() -> Scenario {
    scenario(
        "peakDemand",
        "Peak Demand Event",
        "Hot summer afternoon with high AC load",
        &[
            ("nuclear1", "Nuclear Plant 1", Nuclear, 1000.0, 15.0, 800.0, 50.0, 0.95, 0.0),
            ("coal1", "Coal Plant 1", Coal, 800.0, 35.0, 400.0, 100.0, 0.9, 0.95),
            ("gas1", "Gas Turbine 1", Gas, 500.0, 45.0, 100.0, 300.0, 0.95, 0.4),
            ("gas2", "Gas Turbine 2", Gas, 400.0, 50.0, 80.0, 250.0, 0.9, 0.4),
            ("peaker1", "Peaker Plant 1", Gas, 200.0, 120.0, 50.0, 200.0, 0.95, 0.6),
            ("solar1", "Solar Farm 1", Solar, 300.0, 0.0, 0.0, 300.0, 0.9, 0.0),
            ("wind1", "Wind Farm 1", Wind, 250.0, 0.0, 0.0, 250.0, 0.3, 0.0),
        ],
        &[
            ("residential", "Residential Load", 1800.0, 100.0, High),
            ("commercial", "Commercial Load", 1200.0, 140.0, High),
            ("industrial", "Industrial Load", 600.0, 60.0, Medium),
            ("interruptible", "Interruptible Load", 200.0, 180.0, Low),
        ],
        weather(98.0, 5.0, 0.95),
    )
}

fn intro_merit_order() -> Scenario {
    scenario(
        "intro-merit-order",
        "Introduction to Merit Order",
        "Learn how generators are dispatched in order of increasing cost",
        &[
            ("nuclear1", "Nuclear Plant", Nuclear, 1000.0, 15.0, 800.0, 50.0, 1.0, 0.0),
            ("coal1", "Coal Plant", Coal, 600.0, 35.0, 300.0, 100.0, 1.0, 0.95),
            ("gas1", "Gas Plant", Gas, 400.0, 55.0, 100.0, 300.0, 1.0, 0.4),
        ],
        &[("load1", "System Load", 1200.0, 80.0, High)],
        MarketConditions::default(),
    )
}

fn supply_demand_intersection() -> Scenario {
    scenario(
        "supply-demand-intersection",
        "Supply & Demand Intersection",
        "Understand how market clearing price is determined by curve intersection",
        &[
            ("nuclear1", "Nuclear Plant", Nuclear, 800.0, 15.0, 600.0, 50.0, 1.0, 0.0),
            ("coal1", "Coal Plant", Coal, 600.0, 35.0, 300.0, 100.0, 1.0, 0.95),
            ("gas1", "Gas Plant 1", Gas, 400.0, 50.0, 100.0, 300.0, 1.0, 0.4),
            ("gas2", "Gas Plant 2", Gas, 300.0, 75.0, 80.0, 250.0, 1.0, 0.4),
        ],
        &[
            ("residential", "Residential", 600.0, 90.0, High),
            ("commercial", "Commercial", 500.0, 70.0, Medium),
            ("industrial", "Industrial", 400.0, 60.0, Medium),
        ],
        MarketConditions::default(),
    )
}

fn peak_demand_pricing() -> Scenario {
    scenario(
        "peak-demand-pricing",
        "Peak Demand Pricing",
        "Explore how high demand drives up electricity prices",
        &[
            ("nuclear1", "Nuclear Plant", Nuclear, 1000.0, 15.0, 800.0, 50.0, 0.95, 0.0),
            ("coal1", "Coal Plant", Coal, 800.0, 35.0, 400.0, 100.0, 0.9, 0.95),
            ("gas1", "Gas Plant 1", Gas, 500.0, 45.0, 100.0, 300.0, 0.95, 0.4),
            ("gas2", "Gas Plant 2", Gas, 400.0, 60.0, 80.0, 250.0, 0.9, 0.4),
            ("peaker1", "Peaker Plant 1", Gas, 200.0, 120.0, 50.0, 200.0, 0.95, 0.6),
            ("peaker2", "Peaker Plant 2", Gas, 150.0, 180.0, 30.0, 150.0, 0.9, 0.7),
        ],
        &[
            ("residential", "Residential (AC Load)", 1800.0, 200.0, High),
            ("commercial", "Commercial", 1200.0, 150.0, High),
            ("industrial", "Industrial", 400.0, 100.0, Medium),
        ],
        MarketConditions::default(),
    )
}

fn renewable_integration() -> Scenario {
    scenario(
        "renewable-integration",
        "Renewable Energy Integration",
        "Explore how solar and wind affect market clearing",
        &[
            ("nuclear1", "Nuclear Plant", Nuclear, 800.0, 15.0, 600.0, 50.0, 0.95, 0.0),
            ("coal1", "Coal Plant", Coal, 600.0, 35.0, 300.0, 100.0, 0.9, 0.95),
            ("gas1", "Gas Plant", Gas, 500.0, 50.0, 100.0, 300.0, 0.95, 0.4),
            ("solar1", "Solar Farm 1", Solar, 400.0, 0.0, 0.0, 400.0, 0.8, 0.0),
            ("solar2", "Solar Farm 2", Solar, 300.0, 0.0, 0.0, 300.0, 0.8, 0.0),
            ("wind1", "Wind Farm 1", Wind, 350.0, 0.0, 0.0, 350.0, 0.6, 0.0),
            ("wind2", "Wind Farm 2", Wind, 250.0, 0.0, 0.0, 250.0, 0.4, 0.0),
        ],
        &[
            ("residential", "Residential Load", 1200.0, 100.0, High),
            ("commercial", "Commercial Load", 800.0, 120.0, High),
            ("industrial", "Industrial Load", 600.0, 80.0, Medium),
        ],
        MarketConditions::default(),
    )
}
