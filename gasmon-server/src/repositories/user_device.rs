use std::collections::HashSet;

use sqlx::{Error, SqliteConnection};

pub struct UserDeviceRepository;

impl UserDeviceRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UserDeviceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDeviceRepository {
    /// Device identifiers assigned to a user, without repeats, in assignment order.
    pub async fn find_device_ids_by_user_id(
        &self,
        user_id: i64,
        connection: &mut SqliteConnection,
    ) -> Result<Vec<String>, Error> {
        let device_ids: Vec<String> =
            sqlx::query_scalar("SELECT device_id FROM user_device_list WHERE user_id = $1 ORDER BY id")
                .bind(user_id)
                .fetch_all(&mut *connection)
                .await?;

        let mut seen = HashSet::new();

        Ok(device_ids
            .into_iter()
            .filter(|device_id| seen.insert(device_id.clone()))
            .collect())
    }
}
