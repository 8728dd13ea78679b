//! Price models

/// Both gold prices observed in one run, INR per gram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub per_gram_24k: f64,
    pub per_gram_22k: f64,
}
