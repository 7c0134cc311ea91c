mod bid;
mod curve;
mod generator;
mod map;
mod result;
mod scenario;

pub use bid::{DemandBid, Priority};
pub use curve::{CurvePoint, MarketCurves};
pub use generator::{FuelType, Generator};
pub use map::Map;
pub use result::{ClearedBid, Dispatch, MarketResult};
pub use scenario::{MarketConditions, Scenario, ScenarioDto, ValidationError};

use std::fmt;

// Participants and scenarios are keyed by caller-chosen strings. Each key
// space gets its own newtype so a bid id can never be looked up as a generator.
macro_rules! string_wrapper {
    ($struct:ident) => {
        #[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[doc = concat!("A newtype wrapper for ", stringify!($struct))]
        pub struct $struct(String);

        impl $struct {
            /// Borrow the underlying identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is the empty string
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $struct {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $struct {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $struct {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_wrapper!(GeneratorId);
string_wrapper!(BidId);
string_wrapper!(ScenarioId);
