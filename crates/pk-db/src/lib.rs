pub mod error;
pub mod profile_store;
pub mod repositories;

pub use error::{DbError, Result};
pub use profile_store::ProfileStore;
pub use repositories::profile_repository::SqliteProfileRepository;
