use pk_core::{ProfileFields, VisibilitySettings};

use serde::Deserialize;

/// PUT /api/v1/profile request body.
///
/// Both maps replace the stored state wholesale; callers send the full
/// current form, not a patch. Missing field values default to empty strings
/// and missing visibility flags default to visible.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveProfileRequest {
    pub fields: ProfileFields,
    pub visibility: VisibilitySettings,
}
