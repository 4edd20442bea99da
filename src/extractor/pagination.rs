//! Resolves the "next entry" navigation link

use scraper::Html;
use url::Url;

use super::schema::NEXT_LINK;
use crate::error::PageError;

/// Absolute URL of the next page, or `None` on the last page of the catalog
pub fn resolve_next(document: &Html, base: &Url) -> Result<Option<Url>, PageError> {
    let Some(href) = document
        .select(&NEXT_LINK)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
    else {
        return Ok(None);
    };

    base.join(href)
        .map(Some)
        .map_err(|source| PageError::InvalidNextLink {
            page: base.to_string(),
            href: href.to_string(),
            source,
        })
}
