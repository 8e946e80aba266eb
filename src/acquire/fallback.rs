//! Curated in-memory catalog used when live sources are unavailable.

use super::AcquisitionPlan;
use crate::market::{assemble, PriceMode, RawBook, RecordSet};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Ratings drawn for curated entries.
pub const FALLBACK_RATINGS: [u8; 2] = [4, 5];

/// (title, GBP list price) per genre.
pub const STATIC_CATALOG: &[(&str, &[(&str, f64)])] = &[
    (
        "Business",
        &[
            ("The Lean Startup", 14.99),
            ("Zero to One", 12.99),
            ("Good to Great", 18.00),
            ("The Psychology of Money", 9.99),
            ("Thinking, Fast and Slow", 11.50),
            ("Rich Dad Poor Dad", 8.99),
        ],
    ),
    (
        "Science Fiction",
        &[
            ("Dune", 10.99),
            ("Project Hail Mary", 9.99),
            ("The Three-Body Problem", 10.49),
            ("Neuromancer", 8.99),
            ("The Left Hand of Darkness", 9.49),
        ],
    ),
    (
        "Philosophy",
        &[
            ("Meditations", 6.99),
            ("Sophie's World", 9.99),
            ("Beyond Good and Evil", 7.99),
            ("The Republic", 8.49),
            ("The Myth of Sisyphus", 8.99),
        ],
    ),
    (
        "Mystery",
        &[
            ("The Girl with the Dragon Tattoo", 9.99),
            ("Gone Girl", 8.99),
            ("The Thursday Murder Club", 9.49),
            ("And Then There Were None", 7.99),
            ("The Silent Patient", 8.49),
        ],
    ),
    (
        "Romance",
        &[
            ("Pride and Prejudice", 5.99),
            ("Me Before You", 8.99),
            ("The Notebook", 8.49),
            ("It Ends with Us", 9.99),
            ("Outlander", 10.99),
        ],
    ),
    (
        "History",
        &[
            ("Sapiens", 12.99),
            ("Guns, Germs, and Steel", 12.49),
            ("SPQR", 11.99),
            ("The Silk Roads", 12.99),
            ("The Guns of August", 11.49),
        ],
    ),
    (
        "Psychology",
        &[
            ("Man's Search for Meaning", 7.99),
            ("Influence", 11.99),
            ("The Body Keeps the Score", 12.99),
            ("Quiet", 9.99),
            ("Flow", 10.49),
        ],
    ),
    (
        "Self Help",
        &[
            ("Atomic Habits", 12.99),
            ("The 7 Habits of Highly Effective People", 11.99),
            ("How to Win Friends and Influence People", 9.99),
            ("The Power of Now", 9.49),
            ("Deep Work", 10.99),
        ],
    ),
    (
        "Fiction",
        &[
            ("To Kill a Mockingbird", 8.99),
            ("The Alchemist", 7.99),
            ("The Kite Runner", 8.99),
            ("Normal People", 8.49),
            ("The Midnight Library", 9.99),
        ],
    ),
    (
        "Poetry",
        &[
            ("Milk and Honey", 9.99),
            ("The Prophet", 6.49),
            ("Leaves of Grass", 7.49),
            ("Ariel", 8.99),
            ("The Sun and Her Flowers", 9.99),
        ],
    ),
];

/// Used for genres without a curated list.
pub const DEFAULT_BOOKS: &[(&str, f64)] = &[
    ("Atomic Habits", 12.99),
    ("Sapiens", 12.99),
    ("The Alchemist", 7.99),
    ("1984", 8.99),
    ("The Great Gatsby", 6.99),
];

/// Curated titles for a genre (case-insensitive), or the default list.
pub fn books_for(genre: &str) -> &'static [(&'static str, f64)] {
    let wanted = genre.trim();
    STATIC_CATALOG
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, books)| *books)
        .unwrap_or(DEFAULT_BOOKS)
}

/// Builds records from the curated catalog. Never fails and never returns
/// an empty set while the tables above are non-empty.
pub fn acquire(plan: &AcquisitionPlan, rng: &mut StdRng) -> RecordSet {
    books_for(&plan.genre)
        .iter()
        .map(|(title, base_price)| {
            let rating = FALLBACK_RATINGS.choose(rng).copied();
            assemble(RawBook::new(*title, *base_price, rating), plan.region, PriceMode::Retail, rng)
        })
        .collect()
}
