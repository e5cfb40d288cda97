use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::errors::SessionError;
use crate::domain::ports::{AuthProvider, IssuedSession, NewSessionRequest, VerifiedIdentity};

// The clients defined here are reqwest clients for external services.

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthErrorResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct RevokeResponse {
    revoked: bool,
}

// Thin reqwest client for the external auth service.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl AuthProvider for AuthClient {
    async fn create_session(&self, req: NewSessionRequest) -> Result<IssuedSession, SessionError> {
        let url = format!("{}/auth/guest", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&req)
            .send()
            .await
            .map_err(|_| SessionError::AuthUnavailable)?;
        let status = response.status();

        if status.is_success() {
            return response
                .json::<IssuedSession>()
                .await
                .map_err(|_| SessionError::AuthUnavailable);
        }

        // Keep the upstream status/message in the log so operators can see 4xx causes.
        let message = response
            .json::<AuthErrorResponse>()
            .await
            .ok()
            .map(|payload| payload.message);
        tracing::error!(%status, message = ?message, "auth session creation failed");

        Err(SessionError::AuthUnavailable)
    }

    async fn verify_token(&self, token: &str) -> Result<VerifiedIdentity, SessionError> {
        let url = format!("{}/auth/verify-token", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&TokenRequest { token })
            .send()
            .await
            .map_err(|_| SessionError::AuthUnavailable)?;

        if response.status().is_success() {
            return response
                .json::<VerifiedIdentity>()
                .await
                .map_err(|_| SessionError::AuthUnavailable);
        }

        if response.status() == StatusCode::UNAUTHORIZED {
            let error = response
                .json::<AuthErrorResponse>()
                .await
                .map_err(|_| SessionError::AuthUnavailable)?;

            // TODO: switch to stable machine-readable error codes from auth.
            if error.message == "session expired" {
                return Err(SessionError::SessionExpired);
            }
            return Err(SessionError::InvalidToken);
        }

        Err(SessionError::AuthUnavailable)
    }

    async fn revoke_session(&self, token: &str) -> Result<bool, SessionError> {
        let url = format!("{}/auth/logout", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&TokenRequest { token })
            .send()
            .await
            .map_err(|_| SessionError::AuthUnavailable)?;

        if response.status().is_success() {
            return response
                .json::<RevokeResponse>()
                .await
                .map(|payload| payload.revoked)
                .map_err(|_| SessionError::AuthUnavailable);
        }

        Err(SessionError::AuthUnavailable)
    }
}
