use gridmarket_core::models::{ClearedBid, Dispatch};

/// Buyers' gains: willingness to pay above the clearing price, per cleared MW.
/// Each bid contributes at least zero.
pub fn consumer_surplus(cleared: &[ClearedBid], price: f64) -> f64 {
    cleared
        .iter()
        .map(|c| ((c.bid.max_price - price) * c.quantity).max(0.0))
        .sum()
}

/// Sellers' gains: clearing price above marginal cost, per dispatched MW.
/// Each generator contributes at least zero.
pub fn producer_surplus(dispatched: &[Dispatch], price: f64) -> f64 {
    dispatched
        .iter()
        .map(|d| ((price - d.generator.marginal_cost) * d.output).max(0.0))
        .sum()
}

/// What the dispatched energy costs to produce at the offered marginal costs
pub fn generation_cost(dispatched: &[Dispatch]) -> f64 {
    dispatched
        .iter()
        .map(|d| d.generator.marginal_cost * d.output)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmarket_core::models::{DemandBid, FuelType, Generator};

    #[test]
    fn surpluses_are_floored_per_participant() {
        let dispatched = [
            Dispatch {
                generator: Generator::new("cheap", FuelType::Wind, 100.0, 10.0),
                output: 100.0,
                revenue: 3000.0,
            },
            // cannot happen after clearing, but must not reduce the total
            Dispatch {
                generator: Generator::new("dear", FuelType::Gas, 100.0, 50.0),
                output: 100.0,
                revenue: 3000.0,
            },
        ];
        assert_eq!(producer_surplus(&dispatched, 30.0), 2000.0);
        assert_eq!(generation_cost(&dispatched), 6000.0);

        let cleared = [
            ClearedBid {
                bid: DemandBid::new("keen", 200.0, 80.0),
                quantity: 150.0,
                cost: 4500.0,
            },
            ClearedBid {
                bid: DemandBid::new("reluctant", 200.0, 20.0),
                quantity: 50.0,
                cost: 1500.0,
            },
        ];
        // surplus accrues on the cleared quantity, not the bid quantity
        assert_eq!(consumer_surplus(&cleared, 30.0), 7500.0);
    }
}
