use std::sync::Arc;

use sqlx::{Error, SqliteConnection};

use crate::configs::Storage;
use crate::models::User;

pub struct UserRepository {
    storage: Arc<Storage>,
}

impl UserRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl UserRepository {
    // Find user by name
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, Error> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM user_details WHERE user_name = $1")
            .bind(user_name)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(user)
    }

    // Resolve the internal key of a user on an already checked out connection
    pub async fn find_id_by_user_name(
        &self,
        user_name: &str,
        connection: &mut SqliteConnection,
    ) -> Result<Option<i64>, Error> {
        let user_id: Option<i64> =
            sqlx::query_scalar("SELECT user_id FROM user_details WHERE user_name = $1")
                .bind(user_name)
                .fetch_optional(&mut *connection)
                .await?;

        Ok(user_id)
    }
}
