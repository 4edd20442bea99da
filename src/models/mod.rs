//! Data models for pokedex entries

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key of the synthesized sum entry in [`BaseStats`]
pub const TOTAL: &str = "Total";

/// One variant listed on a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDescriptor {
    /// 1-based, matches the variant's detail block
    pub position: usize,
    /// Name exactly as shown in the variant tab list
    pub raw_name: String,
    pub label: String,
    pub is_base_form: bool,
}

/// The stat values do not fit a `u32` total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("base stat total exceeds {}", u32::MAX)]
pub struct TotalOverflow;

/// Base stats in page order, always ending with a computed `"Total"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "IndexMap<String, u32>", try_from = "IndexMap<String, u32>")]
pub struct BaseStats(IndexMap<String, u32>);

impl BaseStats {
    /// Builds the stats from raw page rows. A `"Total"` row in the input is
    /// dropped and recomputed from the remaining entries.
    pub fn from_raw(mut stats: IndexMap<String, u32>) -> Result<Self, TotalOverflow> {
        stats.shift_remove(TOTAL);
        let total = stats
            .values()
            .try_fold(0u32, |acc, v| acc.checked_add(*v))
            .ok_or(TotalOverflow)?;
        stats.insert(TOTAL.to_string(), total);
        Ok(Self(stats))
    }

    pub fn total(&self) -> u32 {
        self.0.get(TOTAL).copied().unwrap_or_default()
    }

    pub fn get(&self, stat: &str) -> Option<u32> {
        self.0.get(stat).copied()
    }

    /// Every entry including `"Total"`
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<IndexMap<String, u32>> for BaseStats {
    type Error = TotalOverflow;

    fn try_from(stats: IndexMap<String, u32>) -> Result<Self, Self::Error> {
        Self::from_raw(stats)
    }
}

impl From<BaseStats> for IndexMap<String, u32> {
    fn from(stats: BaseStats) -> Self {
        stats.0
    }
}

/// A pokedex entry for one variant of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    pub name: String,
    /// `None` for the base form
    pub form: Option<String>,
    /// National pokedex number
    pub index: u32,
    pub types: Vec<String>,
    pub species: String,
    pub height: String,
    pub weight: String,
    pub abilities: Vec<String>,
    /// Regional pokedex numbers, keyed by the games they belong to
    pub local_index: IndexMap<String, u32>,
    pub training: IndexMap<String, String>,
    pub breeding: IndexMap<String, String>,
    pub base_stats: BaseStats,
    /// Storage label for the variant
    pub record_label: String,
}

impl PokemonRecord {
    /// Progress line printed after a record has been stored
    pub fn progress_line(&self) -> String {
        format!(
            "{:04}: {:>15} = {}",
            self.index,
            self.name,
            self.form.as_deref().unwrap_or(&self.name)
        )
    }

    /// Stable storage key derived from `(name, form, record_label)`
    pub fn storage_id(&self) -> String {
        let key = format!(
            "{}\u{1f}{}\u{1f}{}",
            self.name,
            self.form.as_deref().unwrap_or_default(),
            self.record_label
        );
        format!("{:x}", md5::compute(key))
    }
}
