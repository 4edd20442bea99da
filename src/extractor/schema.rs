//! Structural addresses of every field on a pokedex detail page.
//!
//! The detail page has no per-field identifiers: each variant is one
//! `div` inside the panel list, and every field sits at a fixed position
//! inside that block. All of that positional knowledge lives in the
//! tables below so a layout change only touches this file.

use std::fmt;
use std::sync::LazyLock;

use scraper::Selector;

/// How the text of a matched element is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextScope {
    /// One text per matched element: the visible text of its whole subtree
    Element,
    /// One text per non-blank direct text child of each matched element
    OwnText,
}

/// Every field addressed inside a variant block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Index,
    Types,
    Species,
    Height,
    Weight,
    Abilities,
    LocalIndex,
    Regions,
    TrainingKeys,
    TrainingValues,
    BreedingKeys,
    BreedingValues,
    BaseStatKeys,
    BaseStatValues,
    /// The variant's detail block itself
    VariantBlock,
    /// Page-level primary name
    Name,
    /// Page-level variant tab list
    VariantNames,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Types => "types",
            Self::Species => "species",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Abilities => "abilities",
            Self::LocalIndex => "local_index",
            Self::Regions => "regions",
            Self::TrainingKeys => "training_keys",
            Self::TrainingValues => "training_values",
            Self::BreedingKeys => "breeding_keys",
            Self::BreedingValues => "breeding_values",
            Self::BaseStatKeys => "base_stats_keys",
            Self::BaseStatValues => "base_stats_values",
            Self::VariantBlock => "variant_block",
            Self::Name => "name",
            Self::VariantNames => "variant_names",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root of the n-th variant's detail block. `{n}` is the 1-based position.
const BLOCK: &str = "html > body > main > div:nth-of-type(2) > div:nth-of-type(2) > div:nth-of-type({n})";

/// Field templates, relative to [`BLOCK`]. Ordered like the [`Field`] variants.
const FIELD_TEMPLATES: [(Field, &str, TextScope); 14] = [
    (
        Field::Index,
        "> div:nth-of-type(1) > div:nth-of-type(2) > table > tbody > tr:nth-of-type(1) > td > strong",
        TextScope::Element,
    ),
    (
        Field::Types,
        "> div:nth-of-type(1) > div:nth-of-type(2) > table > tbody > tr:nth-of-type(2) > td > a",
        TextScope::Element,
    ),
    (
        Field::Species,
        "> div:nth-of-type(1) > div:nth-of-type(2) > table > tbody > tr:nth-of-type(3) > td",
        TextScope::Element,
    ),
    (
        Field::Height,
        "> div:nth-of-type(1) > div:nth-of-type(2) > table > tbody > tr:nth-of-type(4) > td",
        TextScope::Element,
    ),
    (
        Field::Weight,
        "> div:nth-of-type(1) > div:nth-of-type(2) > table > tbody > tr:nth-of-type(5) > td",
        TextScope::Element,
    ),
    (
        Field::Abilities,
        "> div:nth-of-type(1) > div:nth-of-type(2) > table > tbody > tr:nth-of-type(6) > td a",
        TextScope::Element,
    ),
    (
        Field::LocalIndex,
        "> div:nth-of-type(1) > div:nth-of-type(2) > table > tbody > tr:nth-of-type(7) > td",
        TextScope::OwnText,
    ),
    (
        Field::Regions,
        "> div:nth-of-type(1) > div:nth-of-type(2) > table > tbody > tr:nth-of-type(7) > td > small",
        TextScope::Element,
    ),
    (
        Field::TrainingKeys,
        "> div:nth-of-type(1) > div:nth-of-type(3) > div > div:nth-of-type(1) > table > tbody > tr > th",
        TextScope::Element,
    ),
    (
        Field::TrainingValues,
        "> div:nth-of-type(1) > div:nth-of-type(3) > div > div:nth-of-type(1) > table > tbody > tr > td",
        TextScope::Element,
    ),
    (
        Field::BreedingKeys,
        "> div:nth-of-type(1) > div:nth-of-type(3) > div > div:nth-of-type(2) > table > tbody > tr > th",
        TextScope::Element,
    ),
    (
        Field::BreedingValues,
        "> div:nth-of-type(1) > div:nth-of-type(3) > div > div:nth-of-type(2) > table > tbody > tr > td",
        TextScope::Element,
    ),
    (
        Field::BaseStatKeys,
        "> div:nth-of-type(2) > div:nth-of-type(1) > div:nth-of-type(2) > table > tbody > tr > th",
        TextScope::Element,
    ),
    (
        Field::BaseStatValues,
        "> div:nth-of-type(2) > div:nth-of-type(1) > div:nth-of-type(2) > table > tbody > tr > td:nth-of-type(1)",
        TextScope::Element,
    ),
];

/// Page title holding the primary entity name
pub static NAME: LazyLock<FieldAddress> =
    LazyLock::new(|| FieldAddress::compile(Field::Name, "h1", TextScope::OwnText));

/// Tab list naming every variant on the page, in detail-block order
pub static VARIANT_NAMES: LazyLock<FieldAddress> = LazyLock::new(|| {
    FieldAddress::compile(
        Field::VariantNames,
        "html > body > main > div:nth-of-type(2) > div:nth-of-type(1) > a",
        TextScope::Element,
    )
});

/// Every variant detail block
pub static VARIANT_BLOCKS: LazyLock<Selector> = LazyLock::new(|| {
    compile("html > body > main > div:nth-of-type(2) > div:nth-of-type(2) > div")
});

/// "Next entry" navigation link
pub static NEXT_LINK: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"a[class*="entity-nav-next"]"#));

/// A compiled structural address
#[derive(Debug, Clone)]
pub struct FieldAddress {
    pub field: Field,
    pub selector: Selector,
    pub scope: TextScope,
}

impl FieldAddress {
    fn compile(field: Field, selector: &str, scope: TextScope) -> Self {
        Self {
            field,
            selector: compile(selector),
            scope,
        }
    }
}

fn compile(selector: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("invalid schema selector {selector:?}: {e:?}"))
}

/// All field addresses for one variant position
#[derive(Debug, Clone)]
pub struct FieldSelectorSchema {
    position: usize,
    addresses: Vec<FieldAddress>,
}

impl FieldSelectorSchema {
    /// Builds the addresses of the variant at `position` (1-based)
    pub fn for_position(position: usize) -> Self {
        let block = BLOCK.replace("{n}", &position.to_string());
        let addresses = FIELD_TEMPLATES
            .iter()
            .map(|(field, template, scope)| {
                FieldAddress::compile(*field, &format!("{block} {template}"), *scope)
            })
            .collect();

        Self {
            position,
            addresses,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Address of `field`. Page-level fields have none.
    pub fn address(&self, field: Field) -> Option<&FieldAddress> {
        self.addresses.get(field as usize).filter(|a| a.field == field)
    }
}
