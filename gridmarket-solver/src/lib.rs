#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/**
 * Stepped supply and demand curves built from offers and bids.
 */
mod curve;
pub use curve::{DemandCurve, Step, SupplyCurve};

/**
 * Locating the crossing of the two curves.
 */
mod clearing;
pub use clearing::{ClearingPoint, find_intersection};

/**
 * Turning the crossing into schedules for generators and loads.
 */
mod allocation;
pub use allocation::{clear_demand, dispatch_generators};

mod surplus;
pub use surplus::{consumer_surplus, generation_cost, producer_surplus};

mod engine;
pub use engine::{MeritOrderSolver, clear_market, market_curves};

// Quantities within this many MW are treated as equal, so rounding residue
// never schedules a sliver of an extra unit.
pub(crate) const TOLERANCE: f64 = 1e-9;
