use crate::{
    DemandCurve, SupplyCurve, clear_demand, consumer_surplus, dispatch_generators,
    find_intersection, generation_cost, producer_surplus,
};
use gridmarket_core::{
    models::{CurvePoint, DemandBid, Generator, MarketCurves, MarketResult},
    ports::Solver,
};
use tracing::{Level, event};

/// Uniform-price clearing of a merit-order supply stack against aggregate
/// demand.
///
/// Stateless; a single instance can be shared freely between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeritOrderSolver;

impl Solver for MeritOrderSolver {
    fn solve(&self, generators: &[Generator], demand_bids: &[DemandBid]) -> MarketResult {
        clear_market(generators, demand_bids)
    }
}

/// Clear the market for the given offers and bids.
///
/// The inputs are only read; every figure in the result is freshly computed.
/// An empty supply or demand side, or curves that never cross, yield
/// [`MarketResult::default`].
pub fn clear_market(generators: &[Generator], demand_bids: &[DemandBid]) -> MarketResult {
    event!(
        Level::DEBUG,
        generators = generators.len(),
        demand_bids = demand_bids.len(),
        "clearing market"
    );

    let supply = SupplyCurve::new(generators);
    let demand = DemandCurve::new(demand_bids);

    let Some(point) = find_intersection(&supply, &demand) else {
        event!(
            Level::DEBUG,
            supply = supply.total(),
            demand = demand.total(),
            "supply and demand do not cross"
        );
        return MarketResult::default();
    };

    let dispatched_generators = dispatch_generators(&supply, point);
    let cleared_demand = clear_demand(&demand, point);

    let total_cost = dispatched_generators.iter().map(|d| d.revenue).sum();
    let generation_cost = generation_cost(&dispatched_generators);
    let consumer_surplus = consumer_surplus(&cleared_demand, point.price);
    let producer_surplus = producer_surplus(&dispatched_generators, point.price);

    event!(
        Level::DEBUG,
        price = point.price,
        quantity = point.quantity,
        dispatched = dispatched_generators.len(),
        cleared = cleared_demand.len(),
        "market cleared"
    );

    MarketResult {
        clearing_price: point.price,
        cleared_quantity: point.quantity,
        dispatched_generators,
        cleared_demand,
        total_revenue: point.price * point.quantity,
        total_cost,
        generation_cost,
        consumer_surplus,
        producer_surplus,
    }
}

/// The supply and demand curves of a market with their crossing, ready for
/// plotting.
pub fn market_curves(generators: &[Generator], demand_bids: &[DemandBid]) -> MarketCurves {
    let supply = SupplyCurve::new(generators);
    let demand = DemandCurve::new(demand_bids);
    let clearing = find_intersection(&supply, &demand).map(|point| CurvePoint {
        quantity: point.quantity,
        price: point.price,
    });

    MarketCurves {
        supply: supply.points(),
        demand: demand.points(),
        clearing,
    }
}
