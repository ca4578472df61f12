use serde::{Deserialize, Serialize};

use super::Table;

/// Latest snapshot reported by a device. The gateway may leave more than one
/// row per device behind.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DeviceLogCurrent {
    pub id: i64,
    pub device_id: String,
    pub gas_level: Option<String>,
    pub coordinates: Option<String>,
    pub device_location: Option<String>,
    pub log_time: Option<String>,
}

#[derive(Clone)]
pub struct DeviceLogCurrentTable;

impl Table for DeviceLogCurrentTable {
    fn name(&self) -> &'static str {
        "device_log_current"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS device_log_current (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                device_id TEXT NOT NULL,
                gas_level TEXT,
                coordinates TEXT,
                device_location TEXT,
                log_time DATETIME
            );
            CREATE INDEX IF NOT EXISTS idx_device_log_current_device
                ON device_log_current (device_id, log_time);
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS device_log_current;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
