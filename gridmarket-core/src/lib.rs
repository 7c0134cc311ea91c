#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Domain models for single-period market clearing.
///
/// Offers, bids, scenarios and clearing results are plain data. They carry no
/// clearing logic of their own; that lives behind the [`ports::Solver`] trait.
pub mod models;

/// Interface traits between the data model and clearing engines.
pub mod ports;

/// Built-in teaching scenarios.
pub mod presets;
