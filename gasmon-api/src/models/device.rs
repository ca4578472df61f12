use serde::{Deserialize, Serialize};

use super::DeviceId;

/// A device whose gas level is below its threshold, as drawn on the map
/// overlay and listed in the low gas table.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowGasDevice {
    /// Device identifier
    pub device_id: DeviceId,
    /// Normalized `"lat,lng"`, empty when the position is unknown or malformed
    pub coordinates: String,
    /// Sensor value on the internal scale
    pub gas_level_raw: Option<f64>,
    /// Rounded gas level percentage
    pub gas_percentage: Option<i64>,
    /// Rounded threshold percentage, absent when no limit is configured
    pub threshold_percent: Option<i64>,
    /// Reported location or the registered address
    pub device_location: Option<String>,
    /// Customer the device is registered to
    pub customer_name: Option<String>,
    /// ISO-8601 time of the latest reading
    pub current_log_time: Option<String>,
}

/// A device entry of the device information tab.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device identifier
    pub device_id: DeviceId,
    /// Rounded gas level percentage, absent without a reading
    pub gas_percentage: Option<i64>,
    /// Rounded threshold percentage
    pub threshold_percent: i64,
    /// Customer the device is registered to
    pub customer_name: Option<String>,
    /// Reported location or the registered address
    pub device_location: Option<String>,
    /// Coordinates as stored, empty when unknown
    pub coordinates: String,
    /// Time of the latest reading
    pub last_log_time: Option<String>,
    /// Human readable status, e.g. `Low Gas Level (7%)`, `OK (45%)` or `No Data`
    pub device_status: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedDeviceInfo {
    pub low_gas: Vec<DeviceInfo>,
    /// Devices at or above their threshold, plus devices without data
    pub normal_gas: Vec<DeviceInfo>,
}
