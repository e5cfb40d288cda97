use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::Profile;
use crate::domain::ports::{AuthProvider, ProfileStore};

// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub auth: Arc<dyn AuthProvider>,
    // Shared database pool for guest profile persistence.
    pub db: PgPool,
}

// PostgreSQL-backed guest profile store.
#[derive(Clone)]
pub struct PostgresProfileStore {
    pub db: PgPool,
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    async fn upsert(&self, profile: &Profile) -> Result<(), String> {
        // Metadata travels as serialized JSON text; NULL means none was set.
        let metadata_json = profile.metadata.as_ref().map(|value| value.to_string());

        sqlx::query(
            r#"
            INSERT INTO guest_profiles (guest_id, display_name, metadata)
            VALUES ($1, $2, $3)
            ON CONFLICT (guest_id) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                metadata = EXCLUDED.metadata
            "#,
        )
        .bind(&profile.guest_id)
        .bind(&profile.display_name)
        .bind(metadata_json)
        .execute(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(())
    }

    async fn get(&self, guest_id: &str) -> Result<Option<Profile>, String> {
        let row = sqlx::query(
            r#"
            SELECT guest_id, display_name, metadata
            FROM guest_profiles
            WHERE guest_id = $1
            "#,
        )
        .bind(guest_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        let Some(row) = row else {
            return Ok(None);
        };

        let metadata_json: Option<String> =
            row.try_get("metadata").map_err(|err| err.to_string())?;
        let metadata = metadata_json
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(|err| err.to_string())?;

        Ok(Some(Profile {
            guest_id: row.try_get("guest_id").map_err(|err| err.to_string())?,
            display_name: row.try_get("display_name").map_err(|err| err.to_string())?,
            metadata,
        }))
    }
}
