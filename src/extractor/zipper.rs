//! Builds ordered maps out of parallel key and value columns

use indexmap::IndexMap;

use crate::error::{ExtractionError, MissingReason};
use crate::extractor::schema::Field;

fn normalize(text: &str) -> String {
    text.trim().to_string()
}

/// Zips keys with values in document order.
///
/// Callers check that both columns have the same length first. A repeated
/// key keeps its first position and takes the later value.
pub fn zip_text<K, V>(keys: K, values: V) -> IndexMap<String, String>
where
    K: IntoIterator,
    K::Item: AsRef<str>,
    V: IntoIterator,
    V::Item: AsRef<str>,
{
    keys.into_iter()
        .zip(values)
        .map(|(k, v)| (normalize(k.as_ref()), normalize(v.as_ref())))
        .collect()
}

/// Same as [`zip_text`] but every value must be a base-10 integer
pub fn zip_numeric<K, V>(
    position: usize,
    field: Field,
    keys: K,
    values: V,
) -> Result<IndexMap<String, u32>, ExtractionError>
where
    K: IntoIterator,
    K::Item: AsRef<str>,
    V: IntoIterator,
    V::Item: AsRef<str>,
{
    keys.into_iter()
        .zip(values)
        .map(|(k, v)| -> Result<(String, u32), ExtractionError> {
            let value = normalize(v.as_ref());
            let number = parse_number(&value).ok_or_else(|| {
                ExtractionError::MissingRequiredField {
                    position,
                    field,
                    reason: MissingReason::NotNumeric(value.clone()),
                }
            })?;
            Ok((normalize(k.as_ref()), number))
        })
        .collect()
}

/// Strict base-10 parse: digits only, leading zeros allowed
pub fn parse_number(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
