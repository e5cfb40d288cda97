use serde::{Deserialize, Serialize};
use serde_json::Value;

// Request payload for session creation.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub guest_id: String,
    pub display_name: String,
    pub metadata: Option<Value>,
}

// Response payload for session creation.
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub token: String,
    pub expires_at: u64,
}

// Request payload for session revocation.
#[derive(Debug, Deserialize)]
pub struct RevokeSessionRequest {
    pub token: String,
}

// Response payload for session revocation.
#[derive(Debug, Serialize)]
pub struct RevokeSessionResponse {
    pub revoked: bool,
}

// Request payload for profile updates.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: String,
    pub metadata: Option<Value>,
}

// Response payload for profile reads and updates.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub guest_id: String,
    pub display_name: String,
    pub metadata: Option<Value>,
}

// Response payload for the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
