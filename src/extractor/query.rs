//! Typed text queries against a parsed page

use scraper::{ElementRef, Html};

use super::schema::{FieldAddress, TextScope};

/// Why a scalar query produced no single value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarMiss {
    Absent,
    Empty,
    Ambiguous(usize),
}

/// Visible text of an element, trimmed
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Every text the address resolves to, in document order.
///
/// [`TextScope::Element`] keeps one entry per matched element even when its
/// text is empty, so parallel key and value columns stay aligned.
pub fn list(document: &Html, address: &FieldAddress) -> Vec<String> {
    let elements = document.select(&address.selector);

    match address.scope {
        TextScope::Element => elements.map(element_text).collect(),
        TextScope::OwnText => elements
            .flat_map(|element| {
                element
                    .children()
                    .filter_map(|child| child.value().as_text())
                    .map(|text| text.trim().to_string())
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>()
            })
            .collect(),
    }
}

/// Exactly one non-empty text for the address
pub fn scalar(document: &Html, address: &FieldAddress) -> Result<String, ScalarMiss> {
    let mut texts = list(document, address);

    match texts.len() {
        0 => Err(ScalarMiss::Absent),
        1 => {
            let text = texts.remove(0);
            if text.is_empty() {
                Err(ScalarMiss::Empty)
            } else {
                Ok(text)
            }
        }
        n => Err(ScalarMiss::Ambiguous(n)),
    }
}
