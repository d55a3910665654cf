//! Turns raw listing text into typed values and display strings.

use crate::amazon::models::{ProductRecord, RawListing};
use crate::amazon::regions::Region;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Price text present but without a single digit.
    #[error("price text '{0}' contains no digits")]
    PriceWithoutDigits(String),

    #[error("price text '{0}' does not fit in an integer")]
    PriceOverflow(String),
}

/// Builds the product record for `region` from the raw listing.
///
/// Fails only when the price cannot be read; the rating falls back to 0.0.
pub fn normalize(listing: RawListing, region: Region) -> Result<ProductRecord, NormalizeError> {
    let raw_price = parse_price(&listing.price_text)?;
    let raw_rating = parse_rating(&listing.rating_text);

    Ok(ProductRecord {
        title: listing.title,
        price: format_price(region.currency_symbol(), raw_price),
        raw_price,
        rating: format_rating(raw_rating),
        raw_rating,
        image_url: listing.image_url,
        product_link: listing.product_link,
    })
}

/// Zero of each decimal digit block seen on storefronts: ASCII, Arabic-Indic,
/// the Indic scripts, Thai, Lao, Tibetan, Myanmar and fullwidth.
const DIGIT_ZEROS: &[char] = &[
    '0', '\u{0660}', '\u{06F0}', '\u{07C0}', '\u{0966}', '\u{09E6}', '\u{0A66}', '\u{0AE6}',
    '\u{0B66}', '\u{0BE6}', '\u{0C66}', '\u{0CE6}', '\u{0D66}', '\u{0DE6}', '\u{0E50}',
    '\u{0ED0}', '\u{0F20}', '\u{1040}', '\u{FF10}',
];

/// ASCII digit for a decimal digit of any script in [`DIGIT_ZEROS`].
fn decimal_digit(c: char) -> Option<char> {
    if !c.is_numeric() {
        return None;
    }
    DIGIT_ZEROS.iter().find_map(|&zero| {
        let offset = (c as u32).checked_sub(zero as u32)?;
        char::from_digit(offset, 10)
    })
}

/// Keeps every decimal digit of `text` and reads them as one integer.
///
/// Digits of non-Latin scripts (e.g. Devanagari) count as their ASCII values.
pub fn parse_price(text: &str) -> Result<u64, NormalizeError> {
    let digits: String = text.chars().filter_map(decimal_digit).collect();

    if digits.is_empty() {
        return Err(NormalizeError::PriceWithoutDigits(text.to_string()));
    }

    digits.parse().map_err(|_| NormalizeError::PriceOverflow(text.to_string()))
}

/// Reads the first whitespace-separated token of `text` as a star rating.
///
/// Anything unreadable, including NaN and infinities, becomes 0.0.
pub fn parse_rating(text: &str) -> f64 {
    let parsed = text.split_whitespace().next().and_then(|token| token.parse::<f64>().ok());

    match parsed {
        Some(stars) if stars.is_finite() => stars,
        _ => {
            debug!("Unreadable rating text '{}', using 0.0", text);
            0.0
        }
    }
}

/// Formats `amount` with `,` thousands separators behind the currency glyph.
pub fn format_price(symbol: &str, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}", symbol, grouped)
}

/// Formats the rating as "<value> out of 5 stars"; whole values keep one decimal.
pub fn format_rating(stars: f64) -> String {
    let value = if stars.fract() == 0.0 && stars.abs() < 1e16 {
        format!("{:.1}", stars)
    } else {
        stars.to_string()
    };

    format!("{} out of 5 stars", value)
}
