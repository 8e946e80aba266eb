//! Regional price conversion.
//!
//! Base prices arrive in the reference currency (GBP) unless the mode says
//! they are already in the display currency.

use crate::market::regions::Region;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Cents endings used for reference-currency retail prices.
pub const RETAIL_CENTS: [f64; 2] = [0.99, 0.49];

/// Discount applied to converted INR prices for the local book market.
pub const PURCHASING_POWER_FACTOR: f64 = 0.60;

/// Lowest retail price quoted in the Indian market.
pub const INR_FLOOR_PRICE: f64 = 199.0;

/// How a base price should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceMode {
    /// A scraped list price in the reference currency; straight conversion.
    Catalog,
    /// A reference-currency price from the curated table; converted with
    /// regional retail pricing rules.
    Retail,
    /// Already in the display currency; only rounded.
    Display,
}

/// Converts `base` into `region`'s display price.
///
/// Only `Retail` pricing in the reference-currency region draws from `rng`.
pub fn regionalize_price<R: Rng + ?Sized>(
    base: f64,
    region: Region,
    mode: PriceMode,
    rng: &mut R,
) -> f64 {
    match mode {
        PriceMode::Display => round2(base),
        PriceMode::Catalog => round2(base * region.multiplier()),
        PriceMode::Retail => match region {
            Region::Uk => {
                let cents = RETAIL_CENTS.choose(rng).copied().unwrap_or(RETAIL_CENTS[0]);
                round2(base.trunc() + cents)
            }
            Region::Usa => round2(base * region.multiplier()),
            Region::In => {
                let local = base * region.multiplier() * PURCHASING_POWER_FACTOR;
                let charm = (local / 10.0).round() * 10.0 - 1.0;
                if charm < INR_FLOOR_PRICE {
                    INR_FLOOR_PRICE
                } else {
                    charm
                }
            }
        },
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
