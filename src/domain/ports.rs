use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::domain::entities::Profile;
use crate::domain::errors::SessionError;

// The serialization on these boundary types is a dependency leak, but it is
// a pragmatic approach: the auth wire format and the domain contract match.
// Payload sent to the auth service when creating a guest session.
#[derive(Debug, Clone, Serialize)]
pub struct NewSessionRequest {
    pub guest_id: String,
    pub display_name: String,
    pub metadata: Option<Value>,
}

// Session issued by the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: u64,
}

// Identity returned by the auth service for a valid token.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifiedIdentity {
    pub guest_id: String,
    pub display_name: String,
    pub metadata: Option<Value>,
    pub session_id: String,
    pub expires_at: u64,
}

// Handlers and use cases depend on this trait, not the concrete client.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn create_session(&self, req: NewSessionRequest) -> Result<IssuedSession, SessionError>;
    async fn verify_token(&self, token: &str) -> Result<VerifiedIdentity, SessionError>;
    async fn revoke_session(&self, token: &str) -> Result<bool, SessionError>;
}

// Port for profile storage used by profile use cases.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn upsert(&self, profile: &Profile) -> Result<(), String>;
    async fn get(&self, guest_id: &str) -> Result<Option<Profile>, String>;
}

// Shared handles can be injected anywhere the auth port is expected.
#[async_trait]
impl<T: AuthProvider + ?Sized> AuthProvider for Arc<T> {
    async fn create_session(&self, req: NewSessionRequest) -> Result<IssuedSession, SessionError> {
        (**self).create_session(req).await
    }

    async fn verify_token(&self, token: &str) -> Result<VerifiedIdentity, SessionError> {
        (**self).verify_token(token).await
    }

    async fn revoke_session(&self, token: &str) -> Result<bool, SessionError> {
        (**self).revoke_session(token).await
    }
}
