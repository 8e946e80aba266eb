//! Genre names and their category slugs on the catalog site.

/// (display name, category slug) for every browsable genre.
pub const GENRES: &[(&str, &str)] = &[
    ("Science Fiction", "science-fiction_16"),
    ("Business", "business_35"),
    ("Philosophy", "philosophy_7"),
    ("Travel", "travel_2"),
    ("Mystery", "mystery_3"),
    ("Historical Fiction", "historical-fiction_4"),
    ("Sequential Art", "sequential-art_5"),
    ("Classics", "classics_6"),
    ("Romance", "romance_8"),
    ("Poetry", "poetry_23"),
    ("Horror", "horror_31"),
    ("History", "history_32"),
    ("Food & Drink", "food-and-drink_33"),
    ("Psychology", "psychology_26"),
    ("Fiction", "fiction_10"),
    ("Nonfiction", "nonfiction_13"),
    ("Art", "art_25"),
    ("Spirituality", "spirituality_39"),
    ("Politics", "politics_48"),
    ("Academic", "academic_40"),
    ("Self Help", "self-help_41"),
    ("Medical", "medical_42"),
];

/// Genre used when none is configured.
pub const DEFAULT_GENRE: &str = "Science Fiction";

/// Looks up the category slug for a genre name (case-insensitive).
pub fn slug(genre: &str) -> Option<&'static str> {
    let wanted = genre.trim();
    GENRES.iter().find(|(name, _)| name.eq_ignore_ascii_case(wanted)).map(|(_, slug)| *slug)
}

/// Builds the category page URL for a genre.
pub fn category_url(base_url: &str, genre: &str) -> Option<String> {
    slug(genre).map(|slug| {
        format!("{}/catalogue/category/books/{}/index.html", base_url.trim_end_matches('/'), slug)
    })
}

/// Returns every genre name.
pub fn names() -> impl Iterator<Item = &'static str> {
    GENRES.iter().map(|(name, _)| *name)
}
