//! Collaborators of the traversal: page retrieval and record storage

use async_trait::async_trait;
use url::Url;

use crate::error::{FetchError, SinkError};
use crate::models::PokemonRecord;

/// What happened to a record handed to a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Inserted,
    /// A record with the same storage key was already present
    Duplicate,
}

/// Retrieves the markup of a catalog page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url`
    ///
    /// # Returns
    /// * `Result<String, FetchError>` - The page markup or a fetch-layer error
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Persists extracted records
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Store one record. `(name, form, record_label)` is the de-duplication key.
    ///
    /// # Arguments
    /// * `record` - The record to persist
    async fn store(&self, record: &PokemonRecord) -> Result<StoreOutcome, SinkError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

#[async_trait]
impl<T: RecordSink + ?Sized> RecordSink for &T {
    async fn store(&self, record: &PokemonRecord) -> Result<StoreOutcome, SinkError> {
        (**self).store(record).await
    }
}
