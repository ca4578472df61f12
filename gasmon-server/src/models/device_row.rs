use serde::{Deserialize, Serialize};

/// One joined row of assignment, current reading, master record and
/// threshold configuration. Numeric and time columns are kept as text and
/// parsed leniently by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RawDeviceRow {
    pub device_id: String,
    pub gas_level_raw: Option<String>,
    pub coordinates: Option<String>,
    pub current_log_time: Option<String>,
    pub customer_name: Option<String>,
    pub device_location: Option<String>,
    pub ang3_lower_limit: Option<String>,
}
