//! Cask metadata errors

use super::BrewmatchError;

/// Creates a cask not found error
pub fn not_found(name: impl Into<String>) -> BrewmatchError {
    BrewmatchError::CaskNotFound { name: name.into() }
}

/// Creates an invalid cask metadata error
pub fn invalid(message: impl Into<String>) -> BrewmatchError {
    BrewmatchError::InvalidCask {
        message: message.into(),
    }
}
