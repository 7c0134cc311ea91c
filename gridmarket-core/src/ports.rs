use crate::models::{DemandBid, Generator, MarketResult};

/// Interface for engines that clear a single-period energy market.
///
/// A solver receives a snapshot of offers and bids and produces the clearing
/// outcome. Implementations must be pure: the inputs are only read, and the
/// same inputs always produce the same result, so one solver may serve any
/// number of callers at once.
pub trait Solver {
    /// Clear the market for the given offers and bids.
    ///
    /// Degenerate inputs (no offers, no bids, curves that never cross) are not
    /// errors; they produce [`MarketResult::default`].
    fn solve(&self, generators: &[Generator], demand_bids: &[DemandBid]) -> MarketResult;
}
