use crate::domain::errors::SessionError;
use crate::domain::ports::{AuthProvider, NewSessionRequest};
use crate::interface_adapters::protocol::CreateSessionRequest;
use crate::use_cases::validate::{validate_display_name, validate_guest_id};

// Response returned by the session creation use case.
pub struct CreateSessionResult {
    pub token: String,
    pub expires_at: u64,
    pub display_name: String,
}

// Session creation use case with injected dependencies.
pub struct CreateSessionUseCase<A> {
    pub auth: A,
}

impl<A> CreateSessionUseCase<A>
where
    A: AuthProvider,
{
    pub async fn execute(
        &self,
        payload: CreateSessionRequest,
    ) -> Result<CreateSessionResult, SessionError> {
        // Payload rules run before anything leaves for the auth service.
        let guest_id = validate_guest_id(&payload.guest_id)?;
        let display_name = validate_display_name(&payload.display_name)?;

        let issued = self
            .auth
            .create_session(NewSessionRequest {
                guest_id,
                display_name: display_name.clone(),
                metadata: payload.metadata,
            })
            .await?;

        Ok(CreateSessionResult {
            token: issued.token,
            expires_at: issued.expires_at,
            display_name,
        })
    }
}
