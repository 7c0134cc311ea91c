/// A vertex of a stepped supply or demand curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Cumulative quantity in MW
    pub quantity: f64,
    /// Price in $/MWh
    pub price: f64,
}

/// Plot-ready supply and demand curves of a market, with the point where
/// they cross.
///
/// Each curve is a polyline: consecutive vertices either share a price
/// (the tread of a step) or a quantity (its riser).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketCurves {
    /// The merit-order supply curve, non-decreasing in price
    pub supply: Vec<CurvePoint>,
    /// The aggregate demand curve, non-increasing in price
    pub demand: Vec<CurvePoint>,
    /// The clearing point, if the curves cross
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub clearing: Option<CurvePoint>,
}
