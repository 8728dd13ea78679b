use serde::{Deserialize, Serialize};

/// Spot price response from GET /{metal}/{currency}
///
/// GoldAPI returns many more fields (bid, ask, open, change...). Only the
/// spot price per troy ounce is used here, the rest is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
}
