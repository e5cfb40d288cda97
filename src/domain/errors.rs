// Domain-level errors for session workflows.
#[derive(Debug)]
pub enum SessionError {
    InvalidGuestId,
    InvalidDisplayName,
    InvalidToken,
    SessionExpired,
    AuthUnavailable,
}

// Domain-level errors for profile workflows.
#[derive(Debug)]
pub enum ProfileError {
    NotFound,
    InvalidDisplayName,
    InvalidMetadata,
    StorageFailure,
}
