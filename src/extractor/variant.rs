//! Builds one [`PokemonRecord`] out of one variant block

use scraper::Html;

use super::query::{self, ScalarMiss};
use super::schema::{Field, FieldAddress, FieldSelectorSchema};
use super::zipper;
use crate::error::{ExtractionError, MissingReason};
use crate::models::{BaseStats, PokemonRecord, VariantDescriptor};

struct VariantReader<'a> {
    document: &'a Html,
    schema: FieldSelectorSchema,
}

impl VariantReader<'_> {
    fn position(&self) -> usize {
        self.schema.position()
    }

    fn address(&self, field: Field) -> Result<&FieldAddress, ExtractionError> {
        self.schema
            .address(field)
            .ok_or_else(|| ExtractionError::SchemaMismatch {
                position: self.position(),
                field,
                detail: "field has no address inside a variant block".to_string(),
            })
    }

    fn scalar(&self, field: Field) -> Result<String, ExtractionError> {
        let position = self.position();
        query::scalar(self.document, self.address(field)?).map_err(|miss| match miss {
            ScalarMiss::Absent => ExtractionError::MissingRequiredField {
                position,
                field,
                reason: MissingReason::Absent,
            },
            ScalarMiss::Empty => ExtractionError::MissingRequiredField {
                position,
                field,
                reason: MissingReason::Empty,
            },
            ScalarMiss::Ambiguous(count) => ExtractionError::SchemaMismatch {
                position,
                field,
                detail: format!("expected a single node, matched {count}"),
            },
        })
    }

    fn list(&self, field: Field) -> Result<Vec<String>, ExtractionError> {
        Ok(query::list(self.document, self.address(field)?))
    }

    /// Key and value columns of a table, checked for equal length
    fn columns(
        &self,
        keys: Field,
        values: Field,
    ) -> Result<(Vec<String>, Vec<String>), ExtractionError> {
        let key_texts = self.list(keys)?;
        let value_texts = self.list(values)?;

        if key_texts.len() != value_texts.len() {
            return Err(ExtractionError::SchemaMismatch {
                position: self.position(),
                field: values,
                detail: format!(
                    "{} `{keys}` entries but {} `{values}` entries",
                    key_texts.len(),
                    value_texts.len()
                ),
            });
        }

        Ok((key_texts, value_texts))
    }

    fn index(&self) -> Result<u32, ExtractionError> {
        let text = self.scalar(Field::Index)?;
        zipper::parse_number(&text).ok_or(ExtractionError::MissingRequiredField {
            position: self.position(),
            field: Field::Index,
            reason: MissingReason::NotNumeric(text),
        })
    }
}

/// Extracts the variant described by `variant` from a page whose primary
/// name is `name`.
///
/// `block_count` is the number of detail blocks on the page; a descriptor
/// outside `1..=block_count` means the tab list and the blocks disagree.
pub fn extract_variant(
    document: &Html,
    variant: &VariantDescriptor,
    name: &str,
    block_count: usize,
) -> Result<PokemonRecord, ExtractionError> {
    if variant.position == 0 || variant.position > block_count {
        return Err(ExtractionError::SchemaMismatch {
            position: variant.position,
            field: Field::VariantBlock,
            detail: format!("page has {block_count} detail block(s)"),
        });
    }

    let reader = VariantReader {
        document,
        schema: FieldSelectorSchema::for_position(variant.position),
    };
    let position = reader.position();

    let index = reader.index()?;
    let species = reader.scalar(Field::Species)?;
    let height = reader.scalar(Field::Height)?;
    let weight = reader.scalar(Field::Weight)?;
    let types = reader.list(Field::Types)?;
    let abilities = reader.list(Field::Abilities)?;

    let (regions, local_numbers) = reader.columns(Field::Regions, Field::LocalIndex)?;
    let local_index = zipper::zip_numeric(position, Field::LocalIndex, regions, local_numbers)?;

    let (keys, values) = reader.columns(Field::TrainingKeys, Field::TrainingValues)?;
    let training = zipper::zip_text(keys, values);

    let (keys, values) = reader.columns(Field::BreedingKeys, Field::BreedingValues)?;
    let breeding = zipper::zip_text(keys, values);

    let (keys, values) = reader.columns(Field::BaseStatKeys, Field::BaseStatValues)?;
    let stats = zipper::zip_numeric(position, Field::BaseStatValues, keys, values)?;
    let base_stats =
        BaseStats::from_raw(stats).map_err(|overflow| ExtractionError::SchemaMismatch {
            position,
            field: Field::BaseStatValues,
            detail: overflow.to_string(),
        })?;

    let form = (variant.raw_name != name).then(|| variant.raw_name.clone());

    Ok(PokemonRecord {
        name: name.to_string(),
        form,
        index,
        types,
        species,
        height,
        weight,
        abilities,
        local_index,
        training,
        breeding,
        base_stats,
        record_label: variant.label.clone(),
    })
}
