//! CSV export of a report's records.

use super::Formatter;
use crate::market::{BookRecord, Region};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// `bookscope_{REGION}_{genre-slug}.csv`
pub fn export_file_name(region: Region, genre: &str) -> String {
    format!("bookscope_{}_{}.csv", region.code(), genre_slug(genre))
}

/// Lower-cases the genre and collapses every run of non-alphanumerics into
/// a single `-`. Blank genres become `books`.
pub fn genre_slug(genre: &str) -> String {
    let mut slug = String::with_capacity(genre.len());
    for c in genre.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "books".to_string()
    } else {
        slug.to_string()
    }
}

/// Writes the records as CSV into `dir`, creating it if needed, and returns
/// the file's path. An existing file of the same name is replaced.
pub fn write_csv(dir: &Path, region: Region, genre: &str, records: &[BookRecord]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

    let path = dir.join(export_file_name(region, genre));
    let mut contents = Formatter::csv_records(records);
    contents.push('\n');

    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    info!("Exported {} records to {}", records.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CSV_HEADER;
    use tempfile::TempDir;

    fn record(title: &str) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            price: 1139.0,
            rating: 5,
            primary_link: "https://www.amazon.in/s?k=x".to_string(),
            secondary_link: "https://www.flipkart.com/search?q=x".to_string(),
            primary_label: "AMAZON.IN".to_string(),
            secondary_label: "FLIPKART".to_string(),
        }
    }

    #[test]
    fn test_genre_slug() {
        assert_eq!(genre_slug("Science Fiction"), "science-fiction");
        assert_eq!(genre_slug("Self Help"), "self-help");
        assert_eq!(genre_slug("  Sci-Fi & Fantasy!! "), "sci-fi-fantasy");
        assert_eq!(genre_slug("Poetry"), "poetry");
        assert_eq!(genre_slug(" ?? "), "books");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(Region::In, "Business"), "bookscope_IN_business.csv");
        assert_eq!(
            export_file_name(Region::Usa, "Science Fiction"),
            "bookscope_USA_science-fiction.csv"
        );
    }

    #[test]
    fn test_write_csv() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested");

        let path =
            write_csv(&target, Region::In, "Business", &[record("Zero to One"), record("Good to Great")])
                .unwrap();

        assert_eq!(path, target.join("bookscope_IN_business.csv"));
        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("Zero to One,1139,5,"));
    }

    #[test]
    fn test_write_csv_overwrites() {
        let dir = TempDir::new().unwrap();
        write_csv(dir.path(), Region::Uk, "Poetry", &[record("a"), record("b")]).unwrap();
        let path = write_csv(dir.path(), Region::Uk, "Poetry", &[record("c")]).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
