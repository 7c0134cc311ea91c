use gridmarket_core::models::{CurvePoint, DemandBid, Generator};
use std::cmp::Ordering;
use tracing::{Level, event};

/// One participant's contribution to a stepped curve.
///
/// The step spans `[start, end]` on the cumulative quantity axis at a constant
/// `price`. `width` is kept separately from `end - start` so allocations hand
/// out exactly the offered quantity.
#[derive(Debug)]
pub struct Step<'a, T> {
    /// The offer or bid behind the step
    pub participant: &'a T,
    /// The offer or bid price
    pub price: f64,
    /// The quantity offered or bid, always positive
    pub width: f64,
    /// Cumulative quantity before this step
    pub start: f64,
    /// Cumulative quantity after this step
    pub end: f64,
}

// Manual impls: deriving would needlessly require `T: Clone`.
impl<T> Clone for Step<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Step<'_, T> {}

/// The merit-order supply curve: available capacity stacked by ascending
/// marginal cost.
///
/// Generators with no availability or no capacity contribute nothing and do
/// not appear. Equal costs keep their input order.
#[derive(Clone, Debug)]
pub struct SupplyCurve<'a> {
    steps: Vec<Step<'a, Generator>>,
}

impl<'a> SupplyCurve<'a> {
    /// Stack the generators into a supply curve
    pub fn new(generators: &'a [Generator]) -> Self {
        let mut offers = generators
            .iter()
            .filter_map(|generator| {
                if !(generator.availability > 0.0) {
                    return None;
                }
                if !generator.marginal_cost.is_finite() || !generator.capacity.is_finite() {
                    event!(
                        Level::WARN,
                        generator = %generator.id,
                        "ignoring offer with a non-finite cost or capacity"
                    );
                    return None;
                }
                let width = generator.available_capacity();
                (width > 0.0).then_some((generator, generator.marginal_cost, width))
            })
            .collect::<Vec<_>>();

        // `sort_by` is stable, so ties stay in input order
        offers.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

        Self {
            steps: accumulate(offers),
        }
    }

    /// The steps in merit order
    pub fn steps(&self) -> &[Step<'a, Generator>] {
        &self.steps
    }

    /// Whether nothing is offered
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total offered capacity in MW
    pub fn total(&self) -> f64 {
        self.steps.last().map(|step| step.end).unwrap_or_default()
    }

    /// Capacity offered at or below `price`
    pub fn quantity_at(&self, price: f64) -> f64 {
        let n = self.steps.partition_point(|step| step.price <= price);
        cumulative(&self.steps[..n])
    }

    /// The price of the step serving the `quantity`-th megawatt, or `None`
    /// beyond the offered capacity
    pub fn price_at(&self, quantity: f64) -> Option<f64> {
        let n = self.steps.partition_point(|step| step.end < quantity);
        self.steps.get(n).map(|step| step.price)
    }

    /// The vertices of the curve for plotting
    pub fn points(&self) -> Vec<CurvePoint> {
        points(&self.steps)
    }
}

/// The aggregate demand curve: bid quantities stacked by descending
/// willingness to pay.
///
/// Bids with no quantity contribute nothing and do not appear. Equal prices
/// keep their input order.
#[derive(Clone, Debug)]
pub struct DemandCurve<'a> {
    steps: Vec<Step<'a, DemandBid>>,
}

impl<'a> DemandCurve<'a> {
    /// Stack the bids into a demand curve
    pub fn new(demand_bids: &'a [DemandBid]) -> Self {
        let mut bids = demand_bids
            .iter()
            .filter_map(|bid| {
                if !bid.max_price.is_finite() || !bid.quantity.is_finite() {
                    event!(
                        Level::WARN,
                        bid = %bid.id,
                        "ignoring bid with a non-finite price or quantity"
                    );
                    return None;
                }
                (bid.quantity > 0.0).then_some((bid, bid.max_price, bid.quantity))
            })
            .collect::<Vec<_>>();

        bids.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Self {
            steps: accumulate(bids),
        }
    }

    /// The steps in descending price order
    pub fn steps(&self) -> &[Step<'a, DemandBid>] {
        &self.steps
    }

    /// Whether nothing is bid
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total bid quantity in MW
    pub fn total(&self) -> f64 {
        self.steps.last().map(|step| step.end).unwrap_or_default()
    }

    /// Quantity bid at or above `price`
    pub fn quantity_at(&self, price: f64) -> f64 {
        let n = self.steps.partition_point(|step| step.price >= price);
        cumulative(&self.steps[..n])
    }

    /// The willingness to pay for the `quantity`-th megawatt, or `None`
    /// beyond the total bid quantity
    pub fn price_at(&self, quantity: f64) -> Option<f64> {
        let n = self.steps.partition_point(|step| step.end < quantity);
        self.steps.get(n).map(|step| step.price)
    }

    /// The vertices of the curve for plotting
    pub fn points(&self) -> Vec<CurvePoint> {
        points(&self.steps)
    }
}

fn accumulate<'a, T>(sorted: Vec<(&'a T, f64, f64)>) -> Vec<Step<'a, T>> {
    let mut total = 0.0;
    sorted
        .into_iter()
        .map(|(participant, price, width)| {
            let start = total;
            total += width;
            Step {
                participant,
                price,
                width,
                start,
                end: total,
            }
        })
        .collect()
}

fn cumulative<T>(steps: &[Step<'_, T>]) -> f64 {
    steps.last().map(|step| step.end).unwrap_or_default()
}

fn points<T>(steps: &[Step<'_, T>]) -> Vec<CurvePoint> {
    steps
        .iter()
        .flat_map(|step| {
            [
                CurvePoint {
                    quantity: step.start,
                    price: step.price,
                },
                CurvePoint {
                    quantity: step.end,
                    price: step.price,
                },
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmarket_core::models::FuelType;

    fn generator(id: &str, capacity: f64, marginal_cost: f64) -> Generator {
        Generator::new(id, FuelType::Gas, capacity, marginal_cost)
    }

    #[test]
    fn supply_is_merit_ordered() {
        let generators = [
            generator("gas", 500.0, 45.0),
            generator("solar", 300.0, 0.0).with_availability(0.5),
            generator("coal", 800.0, 35.0),
            generator("wind", 200.0, 0.0),
        ];
        let supply = SupplyCurve::new(&generators);

        let order = supply
            .steps()
            .iter()
            .map(|step| step.participant.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, ["solar", "wind", "coal", "gas"]);

        assert_eq!(supply.steps()[0].width, 150.0);
        assert_eq!(supply.steps()[2].start, 350.0);
        assert_eq!(supply.total(), 1650.0);
    }

    #[test]
    fn supply_skips_empty_offers() {
        let generators = [
            generator("outage", 500.0, 10.0).with_availability(0.0),
            generator("mothballed", 0.0, 20.0),
            generator("broken", 100.0, f64::NAN),
            generator("negative", -50.0, 5.0),
            generator("ok", 100.0, 30.0),
        ];
        let supply = SupplyCurve::new(&generators);

        assert_eq!(supply.steps().len(), 1);
        assert_eq!(supply.steps()[0].participant.id.as_str(), "ok");
    }

    #[test]
    fn supply_queries() {
        let generators = [generator("a", 100.0, 10.0), generator("b", 50.0, 20.0)];
        let supply = SupplyCurve::new(&generators);

        assert_eq!(supply.quantity_at(5.0), 0.0);
        assert_eq!(supply.quantity_at(10.0), 100.0);
        assert_eq!(supply.quantity_at(25.0), 150.0);

        assert_eq!(supply.price_at(0.0), Some(10.0));
        assert_eq!(supply.price_at(100.0), Some(10.0));
        assert_eq!(supply.price_at(120.0), Some(20.0));
        assert_eq!(supply.price_at(151.0), None);
    }

    #[test]
    fn demand_is_price_ordered_and_stable() {
        let bids = [
            DemandBid::new("first", 100.0, 50.0),
            DemandBid::new("rich", 200.0, 90.0),
            DemandBid::new("second", 100.0, 50.0),
            DemandBid::new("empty", 0.0, 500.0),
        ];
        let demand = DemandCurve::new(&bids);

        let order = demand
            .steps()
            .iter()
            .map(|step| step.participant.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, ["rich", "first", "second"]);

        assert_eq!(demand.quantity_at(95.0), 0.0);
        assert_eq!(demand.quantity_at(90.0), 200.0);
        assert_eq!(demand.quantity_at(50.0), 400.0);
        assert_eq!(demand.price_at(250.0), Some(50.0));
        assert_eq!(demand.price_at(401.0), None);
    }

    #[test]
    fn plot_points_trace_steps() {
        let bids = [DemandBid::new("a", 100.0, 80.0), DemandBid::new("b", 50.0, 40.0)];
        let points = DemandCurve::new(&bids).points();

        let pairs = points
            .iter()
            .map(|point| (point.quantity, point.price))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            [(0.0, 80.0), (100.0, 80.0), (100.0, 40.0), (150.0, 40.0)]
        );
    }
}
