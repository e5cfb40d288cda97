use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::Profile;
use crate::domain::errors::SessionError;
use crate::domain::ports::{
    AuthProvider, IssuedSession, NewSessionRequest, ProfileStore, VerifiedIdentity,
};

// Token and expiry the stub auth provider hands out for every new session.
pub(crate) const TEST_TOKEN: &str = "issued-token";
pub(crate) const TEST_EXPIRES_AT: u64 = 1_700_003_600;

// Canonical identity used when seeding the stub auth provider.
pub(crate) fn test_identity(guest_id: &str) -> VerifiedIdentity {
    VerifiedIdentity {
        guest_id: guest_id.to_string(),
        display_name: "Pilot".to_string(),
        metadata: None,
        session_id: "session-1".to_string(),
        expires_at: TEST_EXPIRES_AT,
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct AuthFailureFlags {
    pub create: bool,
    pub verify: bool,
    pub revoke: bool,
}

// In-memory stand-in for the external auth service.
#[derive(Clone, Default)]
pub(crate) struct StubAuthProvider {
    identities: Arc<Mutex<HashMap<String, VerifiedIdentity>>>,
    expired: Arc<Mutex<HashSet<String>>>,
    revocable: Arc<Mutex<HashSet<String>>>,
    // Last create request seen, so tests can inspect what execute() sent upstream.
    last_create: Arc<Mutex<Option<NewSessionRequest>>>,
    failures: AuthFailureFlags,
}

impl StubAuthProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_failures(mut self, failures: AuthFailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_identity(&self, token: impl Into<String>, identity: VerifiedIdentity) {
        let mut guard = self.identities.lock().expect("identities mutex poisoned");
        guard.insert(token.into(), identity);
    }

    pub(crate) fn insert_expired_token(&self, token: impl Into<String>) {
        let mut guard = self.expired.lock().expect("expired mutex poisoned");
        guard.insert(token.into());
    }

    pub(crate) fn insert_revocable_token(&self, token: impl Into<String>) {
        let mut guard = self.revocable.lock().expect("revocable mutex poisoned");
        guard.insert(token.into());
    }

    pub(crate) fn last_create_request(&self) -> Option<NewSessionRequest> {
        let guard = self.last_create.lock().expect("last_create mutex poisoned");
        guard.clone()
    }
}

#[async_trait]
impl AuthProvider for StubAuthProvider {
    async fn create_session(&self, req: NewSessionRequest) -> Result<IssuedSession, SessionError> {
        // Intentional failure hook used to verify error mapping behavior.
        if self.failures.create {
            return Err(SessionError::AuthUnavailable);
        }

        let mut guard = self.last_create.lock().expect("last_create mutex poisoned");
        *guard = Some(req);

        Ok(IssuedSession {
            token: TEST_TOKEN.to_string(),
            expires_at: TEST_EXPIRES_AT,
        })
    }

    async fn verify_token(&self, token: &str) -> Result<VerifiedIdentity, SessionError> {
        if self.failures.verify {
            return Err(SessionError::AuthUnavailable);
        }

        let expired = self.expired.lock().expect("expired mutex poisoned");
        if expired.contains(token) {
            return Err(SessionError::SessionExpired);
        }

        let guard = self.identities.lock().expect("identities mutex poisoned");
        guard.get(token).cloned().ok_or(SessionError::InvalidToken)
    }

    async fn revoke_session(&self, token: &str) -> Result<bool, SessionError> {
        if self.failures.revoke {
            return Err(SessionError::AuthUnavailable);
        }

        let mut guard = self.revocable.lock().expect("revocable mutex poisoned");
        Ok(guard.remove(token))
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct StoreFailureFlags {
    pub upsert: bool,
    pub get: bool,
}

// Shared in-memory map lets tests inspect what execute() stored.
#[derive(Clone, Default)]
pub(crate) struct RecordingProfileStore {
    profiles: Arc<Mutex<HashMap<String, Profile>>>,
    failures: StoreFailureFlags,
}

impl RecordingProfileStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_failures(mut self, failures: StoreFailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_profile(&self, profile: Profile) {
        let mut guard = self.profiles.lock().expect("profiles mutex poisoned");
        guard.insert(profile.guest_id.clone(), profile);
    }

    pub(crate) fn get_test_profile(&self, guest_id: &str) -> Option<Profile> {
        let guard = self.profiles.lock().expect("profiles mutex poisoned");
        guard.get(guest_id).cloned()
    }
}

#[async_trait]
impl ProfileStore for RecordingProfileStore {
    async fn upsert(&self, profile: &Profile) -> Result<(), String> {
        if self.failures.upsert {
            return Err("upsert failed".to_string());
        }

        let mut guard = self.profiles.lock().expect("profiles mutex poisoned");
        guard.insert(profile.guest_id.clone(), profile.clone());
        Ok(())
    }

    async fn get(&self, guest_id: &str) -> Result<Option<Profile>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.profiles.lock().expect("profiles mutex poisoned");
        Ok(guard.get(guest_id).cloned())
    }
}
