use serde::{Deserialize, Serialize};

use super::Table;

/// Analog channel configuration of a device. Channel 3 carries the gas
/// sensor, so `ang3_lower_limit` is the low gas threshold on the raw scale
/// multiplied by 1000.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Analog {
    pub id: i64,
    pub device_id: String,
    pub ang3_lower_limit: Option<String>,
}

#[derive(Clone)]
pub struct AnalogTable;

impl Table for AnalogTable {
    fn name(&self) -> &'static str {
        "analog"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS analog (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                device_id TEXT NOT NULL,
                ang3_lower_limit TEXT
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS analog;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
