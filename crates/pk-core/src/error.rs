use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid owner key: {message} {location}")]
    InvalidKey {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid profile field: {value} {location}")]
    InvalidProfileField {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
