use crate::domain::entities::Profile;
use crate::domain::errors::ProfileError;
use crate::domain::ports::ProfileStore;

// Profile lookup use case with injected dependencies.
pub struct GetProfileUseCase<P> {
    pub profiles: P,
}

impl<P> GetProfileUseCase<P>
where
    P: ProfileStore,
{
    pub async fn execute(&self, guest_id: &str) -> Result<Profile, ProfileError> {
        self.profiles
            .get(guest_id)
            .await
            .map_err(|_| ProfileError::StorageFailure)?
            .ok_or(ProfileError::NotFound)
    }
}
