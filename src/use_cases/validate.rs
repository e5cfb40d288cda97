use serde_json::Value;

use crate::domain::errors::{ProfileError, SessionError};

// Shared payload rules applied before any request leaves the use case layer.

pub(crate) fn validate_guest_id(value: &str) -> Result<String, SessionError> {
    if value.trim().is_empty() || value.trim() != value {
        return Err(SessionError::InvalidGuestId);
    }
    Ok(value.to_string())
}

pub(crate) fn validate_display_name(value: &str) -> Result<String, SessionError> {
    // Keep names compact and readable for client UI and logs.
    const MIN_LEN: usize = 3;
    const MAX_LEN: usize = 32;

    let len = value.chars().count();

    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(SessionError::InvalidDisplayName);
    }
    if value.trim() != value {
        return Err(SessionError::InvalidDisplayName);
    }

    // Allow a simple safe charset across the stack.
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
    {
        return Err(SessionError::InvalidDisplayName);
    }

    Ok(value.to_string())
}

// Metadata must stay a JSON object so downstream consumers can index it.
pub(crate) fn validate_metadata(value: &Option<Value>) -> Result<(), ProfileError> {
    match value {
        Some(v) if !v.is_object() => Err(ProfileError::InvalidMetadata),
        _ => Ok(()),
    }
}
