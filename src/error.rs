//! Error types for extraction, fetching and storage

use thiserror::Error;

use crate::extractor::schema::Field;

/// Why a required field could not be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    /// The address matched no node
    Absent,
    /// The address matched a node whose visible text is empty
    Empty,
    /// The text was expected to be a base-10 integer
    NotNumeric(String),
}

impl std::fmt::Display for MissingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "no matching node"),
            Self::Empty => write!(f, "matching node has no text"),
            Self::NotNumeric(text) => write!(f, "{text:?} is not an integer"),
        }
    }
}

/// Failure to extract a single variant. Fatal for that variant only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("variant {position}: schema mismatch on `{field}`: {detail}")]
    SchemaMismatch {
        position: usize,
        field: Field,
        detail: String,
    },

    #[error("variant {position}: missing required field `{field}`: {reason}")]
    MissingRequiredField {
        position: usize,
        field: Field,
        reason: MissingReason,
    },
}

impl ExtractionError {
    /// Variant position the error occurred in
    pub fn position(&self) -> usize {
        match self {
            Self::SchemaMismatch { position, .. } | Self::MissingRequiredField { position, .. } => {
                *position
            }
        }
    }

    pub fn field(&self) -> Field {
        match self {
            Self::SchemaMismatch { field, .. } | Self::MissingRequiredField { field, .. } => *field,
        }
    }
}

/// Failure that prevents a whole page from being processed
#[derive(Debug, Error)]
pub enum PageError {
    #[error("{page}: page declares {variants} variant(s) but has no primary name")]
    MissingName { page: String, variants: usize },

    #[error("{page}: next link {href:?} cannot be resolved: {source}")]
    InvalidNextLink {
        page: String,
        href: String,
        #[source]
        source: url::ParseError,
    },
}

/// Failure reported by the fetch collaborator
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Failure reported by the sink collaborator
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}
