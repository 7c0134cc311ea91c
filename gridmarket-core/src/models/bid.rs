use super::BidId;

/// How essential a load considers its supply.
///
/// Reported alongside results but deliberately ignored by clearing, which
/// orders bids strictly by price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Priority {
    /// Must not be shed
    Critical,
    /// Shed only in emergencies
    High,
    /// Ordinary load
    Medium,
    /// Interruptible load
    Low,
}

/// An offer to buy energy from the market.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DemandBid {
    /// Unique identifier of the bid
    pub id: BidId,
    /// Human-readable name
    pub name: String,
    /// Requested consumption in MW
    pub quantity: f64,
    /// Willingness to pay in $/MWh
    pub max_price: f64,
    /// Informational priority tag
    pub priority: Priority,
}

impl DemandBid {
    /// Construct a medium-priority bid whose name defaults to its id.
    pub fn new(id: impl Into<BidId>, quantity: f64, max_price: f64) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            quantity,
            max_price,
            priority: Priority::Medium,
        }
    }

    /// Replace the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the priority tag
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
