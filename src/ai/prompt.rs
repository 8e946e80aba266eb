//! Market-price prompt and strict validation of the model's reply.

use crate::acquire::StrategyError;
use crate::market::models::MAX_RATING;
use crate::market::pricing::round2;
use crate::market::{RawBook, Region};
use serde_json::Value;

/// Number of books requested from the model.
pub const AI_BOOK_COUNT: usize = 8;

/// Titles models fall back to when they have nothing real to offer.
pub const PLACEHOLDER_TITLES: &[&str] =
    &["Book A", "Book B", "Title 1", "Sample Book", "Example Book", "Unknown", "N/A"];

/// Builds the prompt asking for real books and current prices.
pub fn build_prompt(genre: &str, region: Region) -> String {
    format!(
        "List exactly {count} real, currently sold books in the \"{genre}\" genre with their \
         typical current retail price in the {market} market.\n\
         Return ONLY a JSON array of {count} objects with the keys \"Title\" (string), \
         \"Price\" (number, in {code}, currency symbol {symbol}, no symbol in the value) and \
         \"Rating\" (integer 1-5).\n\
         Do not invent titles and never use placeholder values such as {placeholders}.",
        count = AI_BOOK_COUNT,
        genre = genre,
        market = region.name(),
        code = region.currency(),
        symbol = region.currency_symbol(),
        placeholders = PLACEHOLDER_TITLES
            .iter()
            .map(|t| format!("\"{}\"", t))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Parses the model's reply into raw books.
///
/// One bad element rejects the whole reply. The prompt asks for
/// `AI_BOOK_COUNT` books, but any non-empty reply length is accepted: models
/// often return a few more or fewer, and every element is still validated.
pub fn parse_books(raw: &str, region: Region) -> Result<Vec<RawBook>, StrategyError> {
    let body = strip_code_fence(raw);

    let items: Vec<Value> = serde_json::from_str(body)
        .map_err(|e| StrategyError::Parse(format!("reply is not a JSON array: {}", e)))?;

    if items.is_empty() {
        return Err(StrategyError::Validation("reply contained no books".to_string()));
    }

    items.iter().enumerate().map(|(i, item)| parse_book(i, item, region)).collect()
}

fn parse_book(index: usize, item: &Value, region: Region) -> Result<RawBook, StrategyError> {
    let invalid = |what: &str| StrategyError::Validation(format!("element {}: {}", index, what));

    let title = item
        .get("Title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| invalid("missing or empty Title"))?;

    if PLACEHOLDER_TITLES.iter().any(|p| p.eq_ignore_ascii_case(title)) {
        return Err(invalid(&format!("placeholder title '{}'", title)));
    }

    let price = match item.get("Price") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_price_text(s, region),
        _ => None,
    }
    .filter(|p| p.is_finite() && round2(*p) > 0.0)
    .ok_or_else(|| invalid("missing or non-positive Price"))?;

    let rating = item
        .get("Rating")
        .and_then(Value::as_f64)
        .filter(|r| (0.0..=f64::from(MAX_RATING)).contains(r))
        .ok_or_else(|| invalid("missing or out-of-range Rating"))?;

    Ok(RawBook::new(title, price, Some(rating.round() as u8)))
}

/// Accepts prices sent as text, e.g. "₹1,299".
fn parse_price_text(text: &str, region: Region) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_start_matches(region.currency_symbol())
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse().ok()
}

/// Removes a surrounding markdown code fence, if present.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(after_open) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the info string ("json") on the opening line.
    let after_header = match after_open.find('\n') {
        Some(idx) => &after_open[idx + 1..],
        None => after_open,
    };
    after_header.trim_end().strip_suffix("```").unwrap_or(after_header).trim()
}
