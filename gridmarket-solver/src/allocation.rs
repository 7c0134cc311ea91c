use crate::{ClearingPoint, DemandCurve, SupplyCurve, TOLERANCE};
use gridmarket_core::models::{ClearedBid, Dispatch};

/// Schedule generators in merit order until the cleared quantity is covered.
///
/// Stops early at the first generator offering above the clearing price, even
/// if quantity remains: out-of-the-money offers are never accepted.
pub fn dispatch_generators(supply: &SupplyCurve, point: ClearingPoint) -> Vec<Dispatch> {
    let mut remaining = point.quantity;
    let mut dispatched = Vec::new();

    for step in supply.steps() {
        if remaining <= TOLERANCE || step.price > point.price {
            break;
        }

        let output = step.width.min(remaining);
        dispatched.push(Dispatch {
            generator: step.participant.clone(),
            output,
            revenue: output * point.price,
        });
        remaining -= output;
    }

    dispatched
}

/// Serve bids in descending price order until the cleared quantity is used up.
///
/// Stops early at the first bid priced below the clearing price.
pub fn clear_demand(demand: &DemandCurve, point: ClearingPoint) -> Vec<ClearedBid> {
    let mut remaining = point.quantity;
    let mut cleared = Vec::new();

    for step in demand.steps() {
        if remaining <= TOLERANCE || step.price < point.price {
            break;
        }

        let quantity = step.width.min(remaining);
        cleared.push(ClearedBid {
            bid: step.participant.clone(),
            quantity,
            cost: quantity * point.price,
        });
        remaining -= quantity;
    }

    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmarket_core::models::{DemandBid, FuelType, Generator};

    #[test]
    fn dispatch_respects_price_and_quantity() {
        let generators = [
            Generator::new("wind", FuelType::Wind, 300.0, 0.0),
            Generator::new("coal", FuelType::Coal, 500.0, 30.0),
            Generator::new("peaker", FuelType::Gas, 500.0, 90.0),
        ];
        let supply = SupplyCurve::new(&generators);

        // quantity left over, but the peaker is out of the money
        let dispatched = dispatch_generators(
            &supply,
            ClearingPoint {
                price: 30.0,
                quantity: 1000.0,
            },
        );
        let outputs = dispatched
            .iter()
            .map(|d| (d.generator.id.as_str(), d.output, d.revenue))
            .collect::<Vec<_>>();
        assert_eq!(outputs, [("wind", 300.0, 9000.0), ("coal", 500.0, 15000.0)]);

        // the marginal unit is only partially dispatched
        let dispatched = dispatch_generators(
            &supply,
            ClearingPoint {
                price: 30.0,
                quantity: 400.0,
            },
        );
        assert_eq!(dispatched.len(), 2);
        assert_eq!(dispatched[1].output, 100.0);
    }

    #[test]
    fn demand_respects_price_and_quantity() {
        let bids = [
            DemandBid::new("cheap", 400.0, 20.0),
            DemandBid::new("firm", 300.0, 100.0),
            DemandBid::new("flexible", 300.0, 50.0),
        ];
        let demand = DemandCurve::new(&bids);

        let cleared = clear_demand(
            &demand,
            ClearingPoint {
                price: 40.0,
                quantity: 450.0,
            },
        );
        let quantities = cleared
            .iter()
            .map(|c| (c.bid.id.as_str(), c.quantity, c.cost))
            .collect::<Vec<_>>();
        assert_eq!(
            quantities,
            [("firm", 300.0, 12000.0), ("flexible", 150.0, 6000.0)]
        );
    }
}
