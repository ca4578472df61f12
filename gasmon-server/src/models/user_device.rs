use serde::{Deserialize, Serialize};

use super::Table;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserDevice {
    pub id: i64,
    pub user_id: i64,
    pub device_id: String,
}

#[derive(Clone)]
pub struct UserDeviceListTable;

impl Table for UserDeviceListTable {
    fn name(&self) -> &'static str {
        "user_device_list"
    }

    fn create(&self) -> String {
        // device_id is not a foreign key: devices may be assigned before
        // they are registered in devicelist
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS user_device_list (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                device_id TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES user_details (user_id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS user_device_list;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["user_details"]
    }
}
