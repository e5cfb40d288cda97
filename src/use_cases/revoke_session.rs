use crate::domain::errors::SessionError;
use crate::domain::ports::AuthProvider;

// Response returned by the session revocation use case.
pub struct RevokeSessionResult {
    pub revoked: bool,
}

// Session revocation use case with injected dependencies.
pub struct RevokeSessionUseCase<A> {
    pub auth: A,
}

impl<A> RevokeSessionUseCase<A>
where
    A: AuthProvider,
{
    pub async fn execute(&self, token: String) -> Result<RevokeSessionResult, SessionError> {
        let revoked = self.auth.revoke_session(&token).await?;

        Ok(RevokeSessionResult { revoked })
    }
}
