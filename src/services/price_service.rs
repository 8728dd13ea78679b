//! Gold price unit conversion and 22K derivation

use crate::models::PriceQuote;

/// Grams in one troy ounce
pub const TROY_OUNCE_GRAMS: f64 = 31.1035;
/// 22K gold is 91.6% pure
pub const PURITY_22K: f64 = 0.916;
/// 3% GST applied on top of the metal price
pub const TAX_FACTOR: f64 = 1.03;

pub fn ounce_to_gram(per_ounce: f64) -> f64 {
    per_ounce / TROY_OUNCE_GRAMS
}

/// Retail 22K price per gram from the 24K spot price per gram
pub fn derive_22k(per_gram_24k: f64) -> f64 {
    per_gram_24k * PURITY_22K * TAX_FACTOR
}

pub fn quote(per_gram_24k: f64) -> PriceQuote {
    PriceQuote {
        per_gram_24k,
        per_gram_22k: derive_22k(per_gram_24k),
    }
}
