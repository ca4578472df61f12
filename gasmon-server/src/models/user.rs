use serde::{Deserialize, Serialize};

use super::Table;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub user_name: String,
    /// Argon2 PHC string
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Clone)]
pub struct UserDetailsTable;

impl Table for UserDetailsTable {
    fn name(&self) -> &'static str {
        "user_details"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS user_details (
                user_id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_name TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS user_details;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
