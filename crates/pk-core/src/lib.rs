pub mod error;
pub mod filter;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use filter::project;
pub use models::owner_key::OwnerKey;
pub use models::profile_field::ProfileField;
pub use models::profile_fields::ProfileFields;
pub use models::profile_record::ProfileRecord;
pub use models::public_view::PublicView;
pub use models::visibility_settings::VisibilitySettings;
