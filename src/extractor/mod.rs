//! Page-to-records extraction.
//!
//! [`extract_page`] turns one parsed detail page into the records of every
//! variant it lists, plus the link to the next page. It performs no I/O and
//! keeps no state between pages.

pub mod forms;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod variant;
pub mod zipper;

use scraper::Html;
use url::Url;

use crate::error::{ExtractionError, PageError};
use crate::models::PokemonRecord;
use schema::VARIANT_BLOCKS;

/// A variant that could not be extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFailure {
    pub position: usize,
    pub label: String,
    pub error: ExtractionError,
}

/// Everything extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExtraction {
    pub page: Url,
    /// Records in variant order
    pub records: Vec<PokemonRecord>,
    pub failures: Vec<VariantFailure>,
    /// `None` on the last page of the catalog
    pub next: Option<Url>,
}

/// Extracts every variant of `document`, fetched from `page`.
///
/// A variant that fails to extract is reported in
/// [`PageExtraction::failures`] and the remaining variants are still
/// processed. Only page-wide problems return an error.
pub fn extract_page(document: &Html, page: &Url) -> Result<PageExtraction, PageError> {
    let raw_names = forms::variant_names(document);

    let (records, failures) = if raw_names.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        let name = forms::page_name(document).ok_or_else(|| PageError::MissingName {
            page: page.to_string(),
            variants: raw_names.len(),
        })?;
        let block_count = document.select(&VARIANT_BLOCKS).count();

        let mut records = Vec::with_capacity(raw_names.len());
        let mut failures = Vec::new();

        for descriptor in forms::enumerate_forms(&raw_names, &name) {
            match variant::extract_variant(document, &descriptor, &name, block_count) {
                Ok(record) => records.push(record),
                Err(error) => failures.push(VariantFailure {
                    position: descriptor.position,
                    label: descriptor.label,
                    error,
                }),
            }
        }

        (records, failures)
    };

    let next = pagination::resolve_next(document, page)?;

    Ok(PageExtraction {
        page: page.clone(),
        records,
        failures,
        next,
    })
}
