//! HTML extraction for Amazon search result pages.
//!
//! Only the first result card is read. Each field is pulled by its own
//! extract-or-default function, so a missing sub-element never aborts the card.

use crate::amazon::models::RawListing;
use crate::amazon::selectors::{errors, search};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace, warn};

/// Raw text used when a price or rating element is missing.
pub const MISSING_NUMBER_TEXT: &str = "0";

/// Parser for Amazon search pages.
pub struct Parser {
    origin: String,
}

impl Parser {
    /// Creates a parser that resolves relative links against `origin`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self { origin: origin.into().trim_end_matches('/').to_string() }
    }

    /// Extracts raw fields from the first search result, if any.
    pub fn first_listing(&self, html: &str) -> Option<RawListing> {
        let document = Html::parse_document(html);

        let Some(card) = document.select(&search::RESULT).next() else {
            if document.select(&errors::CAPTCHA).next().is_some() {
                warn!("CAPTCHA page returned instead of search results");
            } else {
                debug!("No search result containers on page");
            }
            return None;
        };

        let listing = RawListing {
            product_link: self.product_link(card),
            title: title(card),
            price_text: price_text(card),
            rating_text: rating_text(card),
            image_url: image_url(card),
        };
        trace!("First listing: {:?}", listing);

        Some(listing)
    }

    /// Absolute detail page URL. Host-relative hrefs are prefixed with the origin.
    pub fn product_link(&self, card: ElementRef) -> Option<String> {
        let href = first_attr(card, &search::LINK, search::HREF_ATTR);
        if href.is_none() {
            debug!("Result card has no product link");
        }

        href.map(|href| {
            if href.starts_with("http") {
                href
            } else {
                format!("{}{}", self.origin, href)
            }
        })
    }
}

/// Title text, trying the list-layout style before the grid-layout one.
pub fn title(card: ElementRef) -> Option<String> {
    let title = first_text(card, &search::TITLE_MEDIUM)
        .or_else(|| first_text(card, &search::TITLE_BASE_PLUS));
    if title.is_none() {
        debug!("Result card has no recognised title element");
    }
    title
}

/// Whole-unit price text, or [`MISSING_NUMBER_TEXT`].
pub fn price_text(card: ElementRef) -> String {
    first_text(card, &search::PRICE_WHOLE).unwrap_or_else(|| {
        debug!("Result card has no price");
        MISSING_NUMBER_TEXT.to_string()
    })
}

/// Rating phrase, or [`MISSING_NUMBER_TEXT`].
pub fn rating_text(card: ElementRef) -> String {
    first_text(card, &search::RATING).unwrap_or_else(|| {
        debug!("Result card has no rating");
        MISSING_NUMBER_TEXT.to_string()
    })
}

/// Thumbnail source URL.
pub fn image_url(card: ElementRef) -> Option<String> {
    first_attr(card, &search::IMAGE, search::SRC_ATTR)
}

fn first_text(card: ElementRef, selector: &Selector) -> Option<String> {
    card.select(selector).next().map(|e| e.text().collect::<String>().trim().to_string())
}

fn first_attr(card: ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    card.select(selector).next().and_then(|e| e.value().attr(attr)).map(String::from)
}
