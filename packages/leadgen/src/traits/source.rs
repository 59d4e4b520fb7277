//! Discovery source trait.

use async_trait::async_trait;

use crate::error::SourceResult;
use crate::types::DistrictRecord;

/// A source of partial district records (a scraped index, a file, a table).
///
/// Sources return whatever fields they know about. Combining, deduping, and
/// conflict resolution happen later in [`crate::fusion`]. Per-item failures
/// inside a source are logged and skipped; a `SourceError` means the whole
/// source was unusable.
#[async_trait]
pub trait DistrictSource: Send + Sync {
    /// Fetch all districts this source knows about.
    async fn discover(&self) -> SourceResult<Vec<DistrictRecord>>;

    /// Short tag recorded in `source_tags` for provenance.
    fn name(&self) -> &str;
}
