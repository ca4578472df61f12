use std::collections::HashSet;

use sqlx::{Error, SqliteConnection};

use crate::models::RawDeviceRow;

pub struct DeviceReadingRepository;

impl DeviceReadingRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeviceReadingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceReadingRepository {
    /// Latest joined row per device, most recent reading first.
    ///
    /// The live reading's position wins over the master record. Devices with
    /// no reading row are still returned, after all devices that have one.
    /// Reading times are compared as dates, so space and `T` separated
    /// timestamps order correctly against each other.
    pub async fn fetch_latest(
        &self,
        device_ids: &[String],
        connection: &mut SqliteConnection,
    ) -> Result<Vec<RawDeviceRow>, Error> {
        if device_ids.is_empty() {
            return Ok(vec![]);
        }

        let placeholders = vec!["?"; device_ids.len()].join(", ");

        let sql = format!(
            r#"
            SELECT
                udl.device_id,
                CAST(d.gas_level AS TEXT) AS gas_level_raw,
                COALESCE(d.coordinates, dl.coordinates) AS coordinates,
                CAST(d.log_time AS TEXT) AS current_log_time,
                dl.customer_name,
                COALESCE(d.device_location, dl.address) AS device_location,
                CAST(a.ang3_lower_limit AS TEXT) AS ang3_lower_limit
            FROM user_device_list udl
            LEFT JOIN device_log_current d ON udl.device_id = d.device_id
            LEFT JOIN devicelist dl ON udl.device_id = dl.device_id
            LEFT JOIN analog a ON udl.device_id = a.device_id
            WHERE udl.device_id IN ({placeholders})
            ORDER BY julianday(d.log_time) DESC
            "#
        );

        let mut query = sqlx::query_as::<_, RawDeviceRow>(&sql);
        for device_id in device_ids {
            query = query.bind(device_id.as_str());
        }

        let rows = query.fetch_all(&mut *connection).await?;

        Ok(collapse_latest(rows))
    }
}

/// Keeps the first row seen for each device. Input must already be ordered
/// most recent first.
fn collapse_latest(rows: Vec<RawDeviceRow>) -> Vec<RawDeviceRow> {
    let mut seen = HashSet::new();

    rows.into_iter()
        .filter(|row| seen.insert(row.device_id.clone()))
        .collect()
}
