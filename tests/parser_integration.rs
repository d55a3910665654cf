//! Integration tests for extraction and normalization using fixture files.

use amz_scout::amazon::normalize::normalize;
use amz_scout::amazon::parser::Parser;
use amz_scout::amazon::regions::Region;
use amz_scout::format;

const SEARCH_FIXTURE: &str = include_str!("fixtures/search_result.html");
const CAPTCHA_FIXTURE: &str = include_str!("fixtures/captcha.html");

#[test]
fn test_first_listing_from_fixture() {
    let parser = Parser::new(Region::In.base_url());
    let listing = parser.first_listing(SEARCH_FIXTURE).unwrap();

    assert!(listing.title.as_deref().unwrap().starts_with("Logitech M331"));
    assert_eq!(listing.price_text, "1,295");
    assert_eq!(listing.rating_text, "4.3 out of 5 stars");
    assert_eq!(
        listing.image_url.as_deref(),
        Some("https://m.media-amazon.com/images/I/61UxfXTUyvL._AC_UY218_.jpg")
    );
    assert_eq!(
        listing.product_link.as_deref(),
        Some(
            "https://www.amazon.in/Logitech-M331-Silent-Wireless-Mouse/dp/B07W5JKHFZ/ref=sr_1_1?keywords=wireless+mouse"
        )
    );
}

#[test]
fn test_fixture_record_json() {
    let parser = Parser::new(Region::In.base_url());
    let listing = parser.first_listing(SEARCH_FIXTURE).unwrap();
    let record = normalize(listing, Region::In).unwrap();

    let line = format::render(Some(&record)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();

    assert_eq!(value["price"], "₹1,295");
    assert_eq!(value["raw_price"], 1295);
    assert_eq!(value["rating"], "4.3 out of 5 stars");
    assert_eq!(value["raw_rating"], 4.3);
    assert_eq!(value.as_object().unwrap().len(), 7);
}

#[test]
fn test_captcha_page_has_no_listing() {
    let parser = Parser::new(Region::In.base_url());
    assert!(parser.first_listing(CAPTCHA_FIXTURE).is_none());
}

#[test]
fn test_empty_results_page() {
    let parser = Parser::new(Region::In.base_url());
    let html = r#"
        <html>
        <body>
            <div class="s-no-search-results">No results for zzzqqq</div>
        </body>
        </html>
    "#;

    assert!(parser.first_listing(html).is_none());
}
