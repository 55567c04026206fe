//! Cache errors

use super::BrewmatchError;

/// Creates a cache operation failed error
pub fn operation_failed(message: impl Into<String>) -> BrewmatchError {
    BrewmatchError::CacheOperationFailed {
        message: message.into(),
    }
}
