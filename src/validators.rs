//! Checks applied to user answers before anything reaches the store.
use crate::codec::DELIMITER;
use crate::error::ValidationError;
use crate::types::EntryResponse;

/// Ensures the message of an entry can be stored as a single line.
pub fn validate_entry_response(response: &EntryResponse) -> Result<(), ValidationError> {
    if response.message.trim().is_empty() {
        return Err(ValidationError::EmptyMessage);
    }

    if let Some(c) = response
        .message
        .chars()
        .find(|&c| c == DELIMITER || c == '\n' || c == '\r')
    {
        return Err(ValidationError::ForbiddenCharacter(c));
    }

    Ok(())
}

/// Validates a new collection name and returns the name to create.
///
/// Only the first space is replaced with a hyphen, so `"my log"` becomes
/// `"my-log"` while `"my big log"` becomes `"my-big log"`. The result must
/// stay inside the collections directory and must not match an existing
/// collection, ignoring case.
pub fn validate_new_collection_name(
    candidate: &str,
    existing: &[String],
) -> Result<String, ValidationError> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let name = candidate.replacen(' ', "-", 1);

    if name.starts_with('.') || name.chars().any(|c| c == '/' || c == '\\' || c.is_control()) {
        return Err(ValidationError::UnsafeName(name));
    }

    let lowered = name.to_lowercase();
    if existing.iter().any(|other| other.to_lowercase() == lowered) {
        return Err(ValidationError::DuplicateName(name));
    }

    Ok(name)
}
