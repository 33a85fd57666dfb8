use crate::{ConfigError, ConfigErrorResult, DEFAULT_PUBLIC_BASE_URL};

use serde::Deserialize;

/// Settings for the anonymous viewer surface.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublicConfig {
    /// Base URL prefixed to `/info/<key>` share links handed to the QR
    /// renderer. Must match whatever host viewers actually reach.
    pub base_url: String,
}

impl Default for PublicConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_PUBLIC_BASE_URL),
        }
    }
}

impl PublicConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::public("public.base_url must not be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::public(format!(
                "public.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}
