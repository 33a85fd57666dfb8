use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Opaque owner identifier, reused as the public record key in share URLs.
///
/// Keys are issued and authenticated by the identity provider upstream; only
/// basic shape validation happens here. A key that fails validation is
/// rejected before it ever reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerKey(String);

impl OwnerKey {
    pub const MAX_LEN: usize = 128;

    #[track_caller]
    pub fn parse(s: &str) -> CoreErrorResult<Self> {
        if s.is_empty() {
            return Err(CoreError::InvalidKey {
                message: "key must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if s.len() > Self::MAX_LEN {
            return Err(CoreError::InvalidKey {
                message: format!("key exceeds {} characters", Self::MAX_LEN),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Keys appear verbatim in URL path segments, so the charset is strict.
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CoreError::InvalidKey {
                message: format!("key '{}' contains characters outside [A-Za-z0-9_-]", s),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Deterministic public URL embedded in the owner's QR code.
    ///
    /// The QR renderer's only input is this string; it has no store access.
    pub fn public_url(&self, base_url: &str) -> String {
        format!("{}/info/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl FromStr for OwnerKey {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for OwnerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
