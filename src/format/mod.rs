//! Output formatting for acquisition reports (table, JSON, markdown, CSV).

pub mod export;

use crate::analytics::MarketSummary;
use crate::config::OutputFormat;
use crate::market::{BookRecord, Region, Source};
use serde::Serialize;

/// CSV header shared by stdout output and exported files.
pub const CSV_HEADER: &str = "Title,Price,Rating,Link1,Link2,Label1,Label2";

/// A finished run: the records, where they came from, and their analytics.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub region: Region,
    pub genre: String,
    pub source: Source,
    pub records: Vec<BookRecord>,
    pub summary: MarketSummary,
}

/// Formats reports for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a full report.
    pub fn format_report(&self, report: &Report) -> String {
        match self.format {
            OutputFormat::Json => self.json_report(report),
            OutputFormat::Table => self.table_report(report),
            OutputFormat::Markdown => self.markdown_report(report),
            OutputFormat::Csv => Self::csv_records(&report.records),
        }
    }

    // JSON formatting

    fn json_report(&self, report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting

    fn table_report(&self, report: &Report) -> String {
        let symbol = report.region.currency_symbol();
        let mut lines = Vec::new();

        lines.push(format!("Region:  {}", report.region.name()));
        lines.push(format!("Genre:   {}", report.genre));
        lines.push(format!("Source:  {}", report.source));
        lines.push(String::new());

        if report.records.is_empty() {
            lines.push("No books found.".to_string());
            return lines.join("\n");
        }

        let price_width = 12;
        let rating_width = 6;
        let title_width = 50;

        lines.push(format!(
            "{:<title_width$}  {:>price_width$}  {:<rating_width$}  {}",
            "Title", "Price", "Rating", "Markets"
        ));
        lines.push(format!(
            "{:-<title_width$}  {:-<price_width$}  {:-<rating_width$}  {:-<20}",
            "", "", "", ""
        ));

        for record in &report.records {
            lines.push(format!(
                "{:<title_width$}  {:>price_width$}  {:<rating_width$}  {} / {}",
                truncate(&record.title, title_width),
                format!("{}{:.2}", symbol, record.price),
                stars(record.rating),
                record.primary_label,
                record.secondary_label
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} books", report.records.len()));

        let summary = &report.summary;
        if let Some(mean) = summary.mean_price {
            lines.push(format!("Average price: {}{:.2}", symbol, mean));
        }
        if let Some(top) = &summary.top_pick {
            lines.push(format!("Top pick:      {} ({}/5)", top.title, top.rating));
        }

        if !summary.best_value.is_empty() {
            lines.push(String::new());
            lines.push("Best value:".to_string());
            for (i, pick) in summary.best_value.iter().enumerate() {
                lines.push(format!(
                    "  {}. {} ({}{:.2}, score {:.2})",
                    i + 1,
                    pick.record.title,
                    symbol,
                    pick.record.price,
                    pick.score
                ));
            }
        }

        lines.push(String::new());
        lines.push("Rating distribution:".to_string());
        for (rating, count) in summary.rating_distribution.iter().enumerate().rev() {
            lines.push(format!("  {} star  {:>3}", rating, count));
        }

        if !summary.projection.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "{}-day projection ({}):",
                summary.projection.len(),
                report.records[0].title
            ));
            for point in &summary.projection {
                lines.push(format!("  Day {}  {}{:.2}", point.day, symbol, point.price));
            }
        }

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_report(&self, report: &Report) -> String {
        let symbol = report.region.currency_symbol();
        let mut lines = Vec::new();

        lines.push(format!("## {} books in {}", report.genre, report.region.name()));
        lines.push(String::new());
        lines.push(format!("*Source: {}*", report.source));
        lines.push(String::new());

        if report.records.is_empty() {
            lines.push("No books found.".to_string());
            return lines.join("\n");
        }

        lines.push("| Title | Price | Rating | Links |".to_string());
        lines.push("|-------|-------|--------|-------|".to_string());

        for record in &report.records {
            lines.push(format!(
                "| {} | {}{:.2} | {} | [{}]({}) · [{}]({}) |",
                truncate(&record.title, 40).replace('|', "\\|"),
                symbol,
                record.price,
                stars(record.rating),
                record.primary_label,
                record.primary_link,
                record.secondary_label,
                record.secondary_link
            ));
        }

        lines.push(String::new());
        let summary = &report.summary;
        if let Some(mean) = summary.mean_price {
            lines.push(format!("- **Average price:** {}{:.2}", symbol, mean));
        }
        if let Some(top) = &summary.top_pick {
            lines.push(format!("- **Top pick:** {} ({}/5)", top.title, top.rating));
        }
        if !summary.best_value.is_empty() {
            let picks: Vec<&str> =
                summary.best_value.iter().map(|p| p.record.title.as_str()).collect();
            lines.push(format!("- **Best value:** {}", picks.join(", ")));
        }

        lines.push(String::new());
        lines.push(format!("*{} books found*", report.records.len()));

        lines.join("\n")
    }

    // CSV formatting

    /// Renders records as CSV, header first.
    pub fn csv_records(records: &[BookRecord]) -> String {
        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(CSV_HEADER.to_string());

        for record in records {
            lines.push(format!(
                "{},{},{},{},{},{},{}",
                Self::csv_escape(&record.title),
                record.price,
                record.rating,
                Self::csv_escape(&record.primary_link),
                Self::csv_escape(&record.secondary_link),
                Self::csv_escape(&record.primary_label),
                Self::csv_escape(&record.secondary_label)
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Shortens to at most `max` characters, ending in "..." when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}

fn stars(rating: u8) -> String {
    if rating == 0 {
        "N/A".to_string()
    } else {
        "★".repeat(usize::from(rating))
    }
}
