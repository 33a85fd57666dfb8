use crate::Result as DbErrorResult;

use pk_core::{OwnerKey, ProfileFields, ProfileRecord, VisibilitySettings};

use async_trait::async_trait;

/// Persistence seam for profile records.
///
/// Injected as `Arc<dyn ProfileStore>` so callers never reach for a global
/// database handle. One record per owner key; writes are whole-record
/// upserts - a partial patch is a caller bug, not a store feature.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Most recently committed record for `key`, or `None` when the owner
    /// has never saved anything. Read-after-write consistent per key.
    async fn get_by_key(&self, key: &OwnerKey) -> DbErrorResult<Option<ProfileRecord>>;

    /// Create-or-replace the record for `key`.
    ///
    /// Creates with `created_at = now` when absent; preserves `created_at`
    /// on update. Fields, visibility and timestamps commit atomically -
    /// a failed write leaves no partial mutation visible to readers.
    /// `last_updated` lands strictly after any value a previous write left
    /// for the same key.
    async fn upsert(
        &self,
        key: &OwnerKey,
        fields: ProfileFields,
        visibility: VisibilitySettings,
    ) -> DbErrorResult<ProfileRecord>;
}
