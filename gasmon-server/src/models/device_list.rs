use serde::{Deserialize, Serialize};

use super::Table;

/// Master record of a device, the fallback source of its position.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DeviceList {
    pub device_id: String,
    pub customer_name: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<String>,
}

#[derive(Clone)]
pub struct DeviceListTable;

impl Table for DeviceListTable {
    fn name(&self) -> &'static str {
        "devicelist"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS devicelist (
                device_id TEXT PRIMARY KEY,
                customer_name TEXT,
                address TEXT,
                coordinates TEXT
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS devicelist;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
