use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::warn;

use crate::domain::entities::Profile;
use crate::domain::errors::SessionError;
use crate::domain::ports::ProfileStore;
use crate::interface_adapters::handlers::error_response;
use crate::interface_adapters::protocol::{
    CreateSessionRequest, CreateSessionResponse, ErrorResponse, RevokeSessionRequest,
    RevokeSessionResponse,
};
use crate::interface_adapters::state::{AppState, PostgresProfileStore};
use crate::use_cases::create_session::CreateSessionUseCase;
use crate::use_cases::revoke_session::RevokeSessionUseCase;

// Handler for issuing a session through the auth service.
#[tracing::instrument(name = "create_session", skip_all, fields(guest_id = %body.guest_id))]
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Capture identity fields before moving the payload into the use case.
    let guest_id = body.guest_id.clone();
    let metadata = body.metadata.clone();

    let use_case = CreateSessionUseCase {
        auth: state.auth.clone(),
    };

    let result = use_case
        .execute(body)
        .await
        .map_err(|err| map_session_error(err, SessionErrorContext::Create))?;

    // Best-effort persistence of the guest profile for downstream reads.
    let profile_store = PostgresProfileStore {
        db: state.db.clone(),
    };
    let profile = Profile {
        guest_id,
        display_name: result.display_name.clone(),
        metadata,
    };
    if let Err(err) = profile_store.upsert(&profile).await {
        warn!(error = %err, "failed to upsert guest profile");
    }

    tracing::info!("session created successfully");

    Ok(Json(CreateSessionResponse {
        token: result.token,
        expires_at: result.expires_at,
    }))
}

// Handler for revoking a session token.
pub async fn revoke_session(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RevokeSessionRequest>,
) -> Result<Json<RevokeSessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = RevokeSessionUseCase {
        auth: state.auth.clone(),
    };

    let result = use_case
        .execute(body.token)
        .await
        .map_err(|err| map_session_error(err, SessionErrorContext::Revoke))?;

    Ok(Json(RevokeSessionResponse {
        revoked: result.revoked,
    }))
}

// Maps domain errors to HTTP responses by endpoint context.
enum SessionErrorContext {
    Create,
    Revoke,
}

fn map_session_error(
    err: SessionError,
    context: SessionErrorContext,
) -> (StatusCode, Json<ErrorResponse>) {
    match context {
        SessionErrorContext::Create => match err {
            SessionError::InvalidGuestId => {
                error_response(StatusCode::BAD_REQUEST, "guest_id is required")
            }
            SessionError::InvalidDisplayName => {
                error_response(StatusCode::BAD_REQUEST, "invalid display_name")
            }
            SessionError::AuthUnavailable
            | SessionError::InvalidToken
            | SessionError::SessionExpired => {
                error_response(StatusCode::BAD_GATEWAY, "auth service unavailable")
            }
        },
        SessionErrorContext::Revoke => match err {
            SessionError::AuthUnavailable => {
                error_response(StatusCode::BAD_GATEWAY, "auth service unavailable")
            }
            SessionError::InvalidGuestId
            | SessionError::InvalidDisplayName
            | SessionError::InvalidToken
            | SessionError::SessionExpired => {
                error_response(StatusCode::BAD_REQUEST, "invalid token")
            }
        },
    }
}
