//! Variant discovery from the page's form tab list

use scraper::Html;

use super::query;
use super::schema::{NAME, VARIANT_NAMES};
use crate::models::VariantDescriptor;

/// Variant names containing one of these are standalone entries
pub const FORM_KEYWORDS: [&str; 4] = ["Mega", "Alolan", "Galarian", "Hisuian"];

/// Primary entity name of the page: the first non-empty `h1` text
pub fn page_name(document: &Html) -> Option<String> {
    query::list(document, &NAME)
        .into_iter()
        .find(|name| !name.is_empty())
}

/// Raw variant names in tab order
pub fn variant_names(document: &Html) -> Vec<String> {
    query::list(document, &VARIANT_NAMES)
}

/// Label and base-form flag of the variant at `position`
pub fn describe_variant(position: usize, raw_name: &str, name: &str) -> VariantDescriptor {
    let is_base_form = raw_name == name;
    let standalone = is_base_form || FORM_KEYWORDS.iter().any(|k| raw_name.contains(k));

    let label = if standalone {
        raw_name.to_string()
    } else {
        format!("{name} ({raw_name})")
    };

    VariantDescriptor {
        position,
        raw_name: raw_name.to_string(),
        label,
        is_base_form,
    }
}

/// One descriptor per listed variant, positions starting at 1
pub fn enumerate_forms(raw_names: &[String], name: &str) -> Vec<VariantDescriptor> {
    raw_names
        .iter()
        .enumerate()
        .map(|(i, raw)| describe_variant(i + 1, raw, name))
        .collect()
}
