//! Integration tests for the catalog parser using fixture files.

use bookscope::catalog::genres;
use bookscope::catalog::Parser;
use bookscope::market::{assemble, PriceMode, Region};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CATEGORY_FIXTURE: &str = include_str!("fixtures/catalog_page.html");
const MALFORMED_FIXTURE: &str = include_str!("fixtures/catalog_page_malformed.html");

#[test]
fn test_parse_category_page() {
    let books = Parser::new().parse_category(CATEGORY_FIXTURE).unwrap();

    assert_eq!(books.len(), 3);

    // Full title comes from the link's title attribute, not the truncated text
    assert_eq!(books[0].title, "A Light in the Attic");
    // Mis-decoded "Â£" prefix is stripped
    assert_eq!(books[0].base_price, 51.77);
    assert_eq!(books[0].rating, Some(3));

    assert_eq!(books[1].title, "The Black Maria");
    assert_eq!(books[1].base_price, 52.15);
    assert_eq!(books[1].rating, Some(1));

    assert_eq!(books[2].title, "Shakespeare's Sonnets");
    assert_eq!(books[2].rating, Some(4));
}

#[test]
fn test_malformed_card_fails_whole_page() {
    let err = Parser::new().parse_category(MALFORMED_FIXTURE).unwrap_err();
    let message = format!("{:#}", err);

    assert!(message.contains("Malformed product card #2"));
    assert!(message.contains("Price on request"));
}

#[test]
fn test_parse_page_without_products() {
    let html = r#"
        <html>
        <body>
            <div class="alert alert-warning">No products in this category.</div>
        </body>
        </html>
    "#;

    let books = Parser::new().parse_category(html).unwrap();
    assert!(books.is_empty());
}

#[test]
fn test_parsed_books_priced_for_region() {
    let mut rng = StdRng::seed_from_u64(1);
    let records: Vec<_> = Parser::new()
        .parse_category(CATEGORY_FIXTURE)
        .unwrap()
        .into_iter()
        .map(|b| assemble(b, Region::Usa, PriceMode::Catalog, &mut rng))
        .collect();

    assert_eq!(records[0].price, 66.27);
    assert_eq!(records[1].price, 66.75);
    assert_eq!(records[2].price, 26.44);
    assert!(records.iter().all(|r| r.primary_label == "AMAZON.COM"));
    assert!(records[2].primary_link.contains("Shakespeare%27s%20Sonnets%20book"));
}

#[test]
fn test_fixture_genre_has_category_url() {
    let url = genres::category_url("http://books.toscrape.com/", "poetry").unwrap();
    assert_eq!(url, "http://books.toscrape.com/catalogue/category/books/poetry_23/index.html");
}
