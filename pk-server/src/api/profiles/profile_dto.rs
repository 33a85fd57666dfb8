use pk_core::{ProfileFields, ProfileRecord, VisibilitySettings};

use serde::Serialize;

/// Owner-facing profile DTO for JSON serialization.
///
/// Carries the raw record: every field plus every visibility flag. The
/// owner's editing surface is never handed a pre-filtered view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub owner_key: String,
    pub fields: ProfileFields,
    pub visibility: VisibilitySettings,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds
    pub last_updated: i64,
}

impl From<ProfileRecord> for ProfileDto {
    fn from(record: ProfileRecord) -> Self {
        Self {
            owner_key: record.owner_key.to_string(),
            fields: record.fields,
            visibility: record.visibility,
            created_at: record.created_at.timestamp_millis(),
            last_updated: record.last_updated.timestamp_millis(),
        }
    }
}
