//! HTML parser for catalog category pages.

use crate::catalog::selectors;
use crate::market::pricing::round2;
use crate::market::RawBook;
use anyhow::{bail, Context, Result};
use scraper::{ElementRef, Html};
use tracing::{debug, trace};

/// Parser for catalog category pages.
///
/// Parsing is all-or-nothing: one malformed card fails the whole page.
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parses every product card on a category page.
    pub fn parse_category(&self, html: &str) -> Result<Vec<RawBook>> {
        let document = Html::parse_document(html);
        let mut books = Vec::new();

        for (index, element) in document.select(&selectors::PRODUCT).enumerate() {
            let book = self
                .parse_product_card(element)
                .with_context(|| format!("Malformed product card #{}", index + 1))?;
            trace!("Parsed book: {} ({:?})", book.title, book.rating);
            books.push(book);
        }

        debug!("Parsed {} books from category page", books.len());
        Ok(books)
    }

    fn parse_product_card(&self, element: ElementRef) -> Result<RawBook> {
        let title = element
            .select(&selectors::TITLE_LINK)
            .next()
            .and_then(|a| a.value().attr(selectors::TITLE_ATTR))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .context("Missing title")?;

        let price_text = element
            .select(&selectors::PRICE)
            .next()
            .map(|e| e.text().collect::<String>())
            .context("Missing price")?;
        let base_price = parse_price(&price_text)?;

        let rating_word = element
            .select(&selectors::STAR_RATING)
            .next()
            .and_then(|e| e.value().classes().find(|c| *c != selectors::STAR_RATING_CLASS))
            .context("Missing star rating")?;

        Ok(RawBook { title, base_price, rating: Some(rating_from_word(rating_word)) })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses price text like "£51.77", dropping the currency symbol and the
/// stray "Â" left by mis-decoded UTF-8. Prices that round to zero pence are
/// rejected.
pub fn parse_price(text: &str) -> Result<f64> {
    let cleaned: String =
        text.chars().filter(|c| *c != '£' && *c != 'Â' && !c.is_whitespace()).collect();

    let price: f64 = cleaned.parse().with_context(|| format!("Unparseable price '{}'", text))?;
    if !price.is_finite() || round2(price) <= 0.0 {
        bail!("Price must be positive, got '{}'", text);
    }
    Ok(price)
}

/// Maps the catalog's rating words to stars; unknown words are 0.
pub fn rating_from_word(word: &str) -> u8 {
    match word {
        "One" => 1,
        "Two" => 2,
        "Three" => 3,
        "Four" => 4,
        "Five" => 5,
        _ => 0,
    }
}
