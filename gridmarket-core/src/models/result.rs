use super::{DemandBid, Generator, GeneratorId};

/// A generator accepted by the market and the energy it must deliver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dispatch {
    /// A copy of the accepted offer
    pub generator: Generator,
    /// Scheduled output in MW
    pub output: f64,
    /// Payment to the generator, `output × clearing price`
    pub revenue: f64,
}

/// A bid accepted by the market and the energy it receives.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearedBid {
    /// A copy of the accepted bid
    pub bid: DemandBid,
    /// Energy delivered in MW, at most the bid quantity
    pub quantity: f64,
    /// Charge to the consumer, `quantity × clearing price`
    pub cost: f64,
}

/// The outcome of a single uniform-price clearing.
///
/// Every monetary figure is per hour of delivery at the clearing price. A
/// market that does not clear is represented by [`MarketResult::default`]:
/// zero price, zero quantity and no participants.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MarketResult {
    /// The uniform price in $/MWh, set by the marginal generator
    pub clearing_price: f64,
    /// Total energy traded in MW
    pub cleared_quantity: f64,
    /// Accepted generators in merit order
    pub dispatched_generators: Vec<Dispatch>,
    /// Accepted bids in descending order of willingness to pay
    pub cleared_demand: Vec<ClearedBid>,
    /// `clearing price × cleared quantity`
    pub total_revenue: f64,
    /// Sum of payments to dispatched generators.
    ///
    /// Under uniform pricing this equals `total_revenue`; the cost of actually
    /// producing the energy is `generation_cost`.
    pub total_cost: f64,
    /// Sum of `output × marginal cost` over dispatched generators
    pub generation_cost: f64,
    /// Buyers' savings against their willingness to pay
    pub consumer_surplus: f64,
    /// Sellers' profit above their offer price
    pub producer_surplus: f64,
}

impl MarketResult {
    /// Whether any energy was traded
    pub fn is_cleared(&self) -> bool {
        !self.dispatched_generators.is_empty()
    }

    /// Total gains from trade, consumer plus producer surplus
    pub fn social_welfare(&self) -> f64 {
        self.consumer_surplus + self.producer_surplus
    }

    /// Emissions of the dispatch in tCO2 per hour
    pub fn total_emissions(&self) -> f64 {
        self.dispatched_generators
            .iter()
            .map(|dispatch| dispatch.output * dispatch.generator.co2_emissions)
            .sum()
    }

    /// The dispatch of a particular generator, if it was accepted
    pub fn dispatch_of(&self, id: &GeneratorId) -> Option<&Dispatch> {
        self.dispatched_generators
            .iter()
            .find(|dispatch| &dispatch.generator.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FuelType, Generator};

    #[test]
    fn empty_result_is_uncleared() {
        let result = MarketResult::default();
        assert!(!result.is_cleared());
        assert_eq!(result.social_welfare(), 0.0);
        assert_eq!(result.total_emissions(), 0.0);
    }

    #[test]
    fn summarises_dispatch() {
        let coal = Generator::new("coal", FuelType::Coal, 800.0, 35.0).with_co2_emissions(0.95);
        let gas = Generator::new("gas", FuelType::Gas, 500.0, 45.0).with_co2_emissions(0.4);
        let result = MarketResult {
            clearing_price: 45.0,
            cleared_quantity: 1000.0,
            dispatched_generators: vec![
                Dispatch {
                    generator: coal,
                    output: 800.0,
                    revenue: 36000.0,
                },
                Dispatch {
                    generator: gas,
                    output: 200.0,
                    revenue: 9000.0,
                },
            ],
            consumer_surplus: 5000.0,
            producer_surplus: 8000.0,
            ..Default::default()
        };

        assert!(result.is_cleared());
        assert_eq!(result.social_welfare(), 13000.0);
        assert_eq!(result.total_emissions(), 800.0 * 0.95 + 200.0 * 0.4);
        assert_eq!(result.dispatch_of(&"gas".into()).map(|d| d.output), Some(200.0));
        assert!(result.dispatch_of(&"nuclear".into()).is_none());
    }
}
