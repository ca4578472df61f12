use std::sync::Arc;

use gasmon_api::models::{CombinedDeviceInfo, DeviceId, LowGasDevice};
use sqlx::{Error, SqliteConnection};

use crate::configs::Storage;
use crate::models::RawDeviceRow;
use crate::repositories::{DeviceReadingRepository, UserDeviceRepository, UserRepository};
use crate::services::device_view::{combined_view, low_gas_view};

/// Resolves a user's devices and loads their latest readings, one connection
/// per call.
pub struct DeviceService {
    storage: Arc<Storage>,
    user_repository: UserRepository,
    user_device_repository: UserDeviceRepository,
    device_reading_repository: DeviceReadingRepository,
}

impl DeviceService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            user_repository: UserRepository::new(storage.clone()),
            user_device_repository: UserDeviceRepository::new(),
            device_reading_repository: DeviceReadingRepository::new(),
            storage,
        }
    }

    /// Devices assigned to `user_name`. An unknown user has no devices.
    pub async fn resolve_devices(
        &self,
        user_name: &str,
        connection: &mut SqliteConnection,
    ) -> Result<Vec<DeviceId>, Error> {
        let Some(user_id) = self
            .user_repository
            .find_id_by_user_name(user_name, connection)
            .await?
        else {
            tracing::debug!("no user record for session user {user_name}");
            return Ok(vec![]);
        };

        self.user_device_repository
            .find_device_ids_by_user_id(user_id, connection)
            .await
    }

    pub async fn latest_rows(&self, user_name: &str) -> Result<Vec<RawDeviceRow>, Error> {
        let mut connection = self.storage.acquire().await?;

        let device_ids = self.resolve_devices(user_name, &mut connection).await?;
        if device_ids.is_empty() {
            return Ok(vec![]);
        }

        let rows = self
            .device_reading_repository
            .fetch_latest(&device_ids, &mut connection)
            .await?;

        tracing::debug!(
            "loaded {} readings for {} devices of {user_name}",
            rows.len(),
            device_ids.len()
        );

        Ok(rows)
    }

    pub async fn low_gas_devices(&self, user_name: &str) -> Result<Vec<LowGasDevice>, Error> {
        Ok(low_gas_view(self.latest_rows(user_name).await?))
    }

    pub async fn combined_devices(&self, user_name: &str) -> Result<CombinedDeviceInfo, Error> {
        Ok(combined_view(self.latest_rows(user_name).await?))
    }
}

#[cfg(test)]
mod tests {
    use crate::configs::{Database, SchemaManager};

    use super::*;

    async fn setup_service() -> (Arc<Storage>, DeviceService) {
        let storage = Arc::new(
            Storage::new(
                Database {
                    migration_path: None,
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                    max_connections: 1,
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        (storage.clone(), DeviceService::new(storage))
    }

    async fn execute(storage: &Storage, sql: &str) {
        sqlx::query(sql).execute(storage.get_pool()).await.unwrap();
    }

    #[tokio::test]
    async fn test_resolve_devices_for_unknown_user() {
        let (storage, service) = setup_service().await;
        let mut connection = storage.acquire().await.unwrap();

        let devices = service.resolve_devices("ghost", &mut connection).await.unwrap();

        assert!(devices.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_devices_collapses_repeated_assignments() {
        let (storage, service) = setup_service().await;
        execute(&storage, "INSERT INTO user_details (user_name, password) VALUES ('operator', 'x'), ('other', 'x')").await;
        execute(
            &storage,
            r#"
            INSERT INTO user_device_list (user_id, device_id)
                VALUES (1, 'GS-2'), (1, 'GS-1'), (1, 'GS-2'), (2, 'GS-3');
            "#,
        )
        .await;

        let mut connection = storage.acquire().await.unwrap();
        let devices = service.resolve_devices("operator", &mut connection).await.unwrap();

        assert_eq!(devices, vec!["GS-2".to_string(), "GS-1".to_string()]);
    }

    #[tokio::test]
    async fn test_latest_rows_without_assignments() {
        let (storage, service) = setup_service().await;
        execute(&storage, "INSERT INTO user_details (user_name, password) VALUES ('operator', 'x')").await;

        assert!(service.latest_rows("operator").await.unwrap().is_empty());
        assert!(service.low_gas_devices("operator").await.unwrap().is_empty());
        assert_eq!(service.combined_devices("operator").await.unwrap(), CombinedDeviceInfo::default());
    }
}
