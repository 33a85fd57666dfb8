//! Profile record - one per owner identity, keyed by the owner's opaque key.

use crate::{OwnerKey, ProfileFields, VisibilitySettings};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The stored profile record, exactly as the owner's editing surface sees it.
///
/// At most one record exists per owner key. Records are created lazily on the
/// first save and never deleted. `created_at` is written once; `last_updated`
/// advances strictly on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub owner_key: OwnerKey,
    #[serde(default)]
    pub fields: ProfileFields,
    /// Records serialized before a flag existed read as visible-by-default
    #[serde(default)]
    pub visibility: VisibilitySettings,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl ProfileRecord {
    /// Fresh record as produced by a first save
    pub fn new(owner_key: OwnerKey, fields: ProfileFields, visibility: VisibilitySettings) -> Self {
        let now = Utc::now();
        Self {
            owner_key,
            fields,
            visibility,
            created_at: now,
            last_updated: now,
        }
    }
}
