use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::domain::errors::{ProfileError, SessionError};
use crate::domain::ports::VerifiedIdentity;
use crate::interface_adapters::handlers::{bearer_token, error_response};
use crate::interface_adapters::protocol::{ErrorResponse, ProfileResponse, UpdateProfileRequest};
use crate::interface_adapters::state::{AppState, PostgresProfileStore};
use crate::use_cases::get_profile::GetProfileUseCase;
use crate::use_cases::update_profile::UpdateProfileUseCase;

// Handler for reading the caller's profile.
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<ErrorResponse>)> {
    let identity = authorize(&state, &headers).await?;

    let use_case = GetProfileUseCase {
        profiles: PostgresProfileStore {
            db: state.db.clone(),
        },
    };

    let profile = use_case
        .execute(&identity.guest_id)
        .await
        .map_err(map_profile_error)?;

    Ok(Json(ProfileResponse {
        guest_id: profile.guest_id,
        display_name: profile.display_name,
        metadata: profile.metadata,
    }))
}

// Handler for updating the caller's profile.
#[tracing::instrument(name = "update_profile", skip_all)]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<ErrorResponse>)> {
    let identity = authorize(&state, &headers).await?;

    let use_case = UpdateProfileUseCase {
        profiles: PostgresProfileStore {
            db: state.db.clone(),
        },
    };

    let profile = use_case
        .execute(&identity.guest_id, body)
        .await
        .map_err(map_profile_error)?;

    Ok(Json(ProfileResponse {
        guest_id: profile.guest_id,
        display_name: profile.display_name,
        metadata: profile.metadata,
    }))
}

// Resolve the caller's identity from the bearer token via the auth service.
async fn authorize(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<VerifiedIdentity, (StatusCode, Json<ErrorResponse>)> {
    let token = bearer_token(headers)
        .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "missing credentials"))?;

    state.auth.verify_token(token).await.map_err(|err| match err {
        SessionError::InvalidToken => {
            error_response(StatusCode::UNAUTHORIZED, "invalid session token")
        }
        SessionError::SessionExpired => error_response(StatusCode::UNAUTHORIZED, "session expired"),
        SessionError::AuthUnavailable
        | SessionError::InvalidGuestId
        | SessionError::InvalidDisplayName => {
            error_response(StatusCode::BAD_GATEWAY, "auth service unavailable")
        }
    })
}

fn map_profile_error(err: ProfileError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ProfileError::NotFound => error_response(StatusCode::NOT_FOUND, "profile not found"),
        ProfileError::InvalidDisplayName => {
            error_response(StatusCode::BAD_REQUEST, "invalid display_name")
        }
        ProfileError::InvalidMetadata => error_response(StatusCode::BAD_REQUEST, "invalid metadata"),
        ProfileError::StorageFailure => error_response(StatusCode::BAD_GATEWAY, "storage error"),
    }
}
