//! Derived statistics over a completed record set.

use crate::market::models::MAX_RATING;
use crate::market::pricing::round2;
use crate::market::BookRecord;
use rand::Rng;
use serde::Serialize;

/// Number of "best value" picks reported.
pub const BEST_VALUE_COUNT: usize = 3;

/// Days in the forward price projection.
pub const PROJECTION_DAYS: u32 = 7;

/// Largest daily move in the projection, as a fraction.
pub const PROJECTION_VOLATILITY: f64 = 0.06;

/// A record ranked by value score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuePick {
    pub record: BookRecord,
    pub score: f64,
}

/// One day of the synthetic price projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPoint {
    /// Days from today, starting at 1.
    pub day: u32,
    pub price: f64,
}

/// Everything the presentation layer shows about a record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSummary {
    pub count: usize,
    pub mean_price: Option<f64>,
    pub top_pick: Option<BookRecord>,
    /// Empty unless value analysis was requested.
    pub best_value: Vec<ValuePick>,
    /// Count of records per rating, index = stars.
    pub rating_distribution: [usize; MAX_RATING as usize + 1],
    pub projection: Vec<ProjectedPoint>,
}

/// Mean price, or `None` for an empty set.
pub fn mean_price(records: &[BookRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    Some(records.iter().map(|r| r.price).sum::<f64>() / records.len() as f64)
}

/// First record with the highest rating.
pub fn top_rated(records: &[BookRecord]) -> Option<&BookRecord> {
    let max = records.iter().map(|r| r.rating).max()?;
    records.iter().find(|r| r.rating == max)
}

/// Every record sharing the highest rating, in their original order.
pub fn max_rated(records: &[BookRecord]) -> Vec<&BookRecord> {
    let Some(max) = records.iter().map(|r| r.rating).max() else {
        return Vec::new();
    };
    records.iter().filter(|r| r.rating == max).collect()
}

/// Stars per unit price, scaled by 10.
pub fn value_score(record: &BookRecord) -> f64 {
    f64::from(record.rating) * 10.0 / record.price
}

/// The `n` best-value records, highest score first. Equal scores keep
/// their original order.
pub fn best_value(records: &[BookRecord], n: usize) -> Vec<ValuePick> {
    let mut picks: Vec<ValuePick> = records
        .iter()
        .map(|r| ValuePick { record: r.clone(), score: value_score(r) })
        .collect();
    // sort_by is stable
    picks.sort_by(|a, b| b.score.total_cmp(&a.score));
    picks.truncate(n);
    picks
}

/// Number of records at each rating.
pub fn rating_distribution(records: &[BookRecord]) -> [usize; MAX_RATING as usize + 1] {
    let mut counts = [0; MAX_RATING as usize + 1];
    for r in records {
        counts[usize::from(r.rating.min(MAX_RATING))] += 1;
    }
    counts
}

/// Synthetic forward projection: each day moves the previous price by a
/// uniform random fraction in `[-PROJECTION_VOLATILITY, PROJECTION_VOLATILITY]`.
pub fn project_prices<R: Rng + ?Sized>(start: f64, days: u32, rng: &mut R) -> Vec<ProjectedPoint> {
    let mut price = start;
    (1..=days)
        .map(|day| {
            let change = rng.random_range(-PROJECTION_VOLATILITY..=PROJECTION_VOLATILITY);
            price *= 1.0 + change;
            ProjectedPoint { day, price: round2(price) }
        })
        .collect()
}

/// Builds the summary shown for a record set. The projection starts from
/// the first record's price.
pub fn summarize<R: Rng + ?Sized>(
    records: &[BookRecord],
    value_analysis: bool,
    rng: &mut R,
) -> MarketSummary {
    let projection = records
        .first()
        .map(|r| project_prices(r.price, PROJECTION_DAYS, rng))
        .unwrap_or_default();

    MarketSummary {
        count: records.len(),
        mean_price: mean_price(records),
        top_pick: top_rated(records).cloned(),
        best_value: if value_analysis { best_value(records, BEST_VALUE_COUNT) } else { Vec::new() },
        rating_distribution: rating_distribution(records),
        projection,
    }
}
