//! CSS selectors for Amazon search result pages.
//!
//! This file is the only place that knows Amazon's markup. Update it when
//! Amazon changes their HTML structure, and add a fixture under `tests/fixtures`.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors scoped to one search result card.
pub mod search {
    use super::*;

    /// Product card container - one search result entry.
    pub static RESULT: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("div[data-component-type='s-search-result']").unwrap()
    });

    /// Image/title link pointing at the detail page (host-relative href).
    pub static LINK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("a.a-link-normal.s-no-outline").unwrap());

    /// Title as rendered in list layout.
    pub static TITLE_MEDIUM: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.a-size-medium").unwrap());

    /// Title as rendered in grid layout.
    pub static TITLE_BASE_PLUS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.a-size-base-plus").unwrap());

    /// Whole-unit part of the price. The fraction lives in a sibling node.
    pub static PRICE_WHOLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.a-price-whole").unwrap());

    /// Star rating text ("4.3 out of 5 stars").
    pub static RATING: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.a-icon-alt").unwrap());

    /// Product thumbnail.
    pub static IMAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("img.s-image").unwrap());

    pub const HREF_ATTR: &str = "href";
    pub const SRC_ATTR: &str = "src";
}

/// Selectors for pages that are not result listings.
pub mod errors {
    use super::*;

    /// Robot check served instead of results.
    pub static CAPTCHA: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "form[action*='validateCaptcha'], \
             img[src*='captcha']",
        )
        .unwrap()
    });
}
