use crate::domain::entities::Profile;
use crate::domain::errors::ProfileError;
use crate::domain::ports::ProfileStore;
use crate::interface_adapters::protocol::UpdateProfileRequest;
use crate::use_cases::validate::{validate_display_name, validate_metadata};

// Profile update use case with injected dependencies.
pub struct UpdateProfileUseCase<P> {
    pub profiles: P,
}

impl<P> UpdateProfileUseCase<P>
where
    P: ProfileStore,
{
    pub async fn execute(
        &self,
        guest_id: &str,
        payload: UpdateProfileRequest,
    ) -> Result<Profile, ProfileError> {
        let display_name = validate_display_name(&payload.display_name)
            .map_err(|_| ProfileError::InvalidDisplayName)?;
        validate_metadata(&payload.metadata)?;

        let profile = Profile {
            guest_id: guest_id.to_string(),
            display_name,
            metadata: payload.metadata,
        };

        self.profiles
            .upsert(&profile)
            .await
            .map_err(|_| ProfileError::StorageFailure)?;

        Ok(profile)
    }
}
