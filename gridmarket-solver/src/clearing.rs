use crate::{DemandCurve, SupplyCurve, TOLERANCE};

/// The price and quantity at which supply and demand cross.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClearingPoint {
    /// The uniform clearing price in $/MWh
    pub price: f64,
    /// The traded quantity in MW
    pub quantity: f64,
}

/// Locate the crossing of the supply and demand curves.
///
/// Supply steps are scanned in merit order. A step is needed when the demand
/// willing to pay its price exceeds everything offered by cheaper steps; the
/// crossing is the first needed step whose right edge covers that demand. If
/// demand outlasts the whole curve, the last needed step sets the price and
/// the quantity is capped at its right edge. The price is therefore always
/// the marginal cost of an actual generator.
///
/// Returns `None` when no step is needed, i.e. nobody is willing to pay even
/// the cheapest offer.
pub fn find_intersection(supply: &SupplyCurve, demand: &DemandCurve) -> Option<ClearingPoint> {
    let mut crossing = None;

    for step in supply.steps() {
        let wanted = demand.quantity_at(step.price);
        if wanted <= step.start + TOLERANCE {
            break;
        }

        crossing = Some(ClearingPoint {
            price: step.price,
            quantity: wanted.min(step.end),
        });

        if wanted <= step.end {
            break;
        }
    }

    crossing
}
