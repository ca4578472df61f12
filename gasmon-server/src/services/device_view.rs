use gasmon_api::models::{CombinedDeviceInfo, DeviceInfo, LowGasDevice};
use time::format_description::well_known::Iso8601;
use time::macros::format_description;
use time::PrimitiveDateTime;

use crate::models::RawDeviceRow;
use crate::services::gas_status::{classify, parse_numeric, round_percent, GasStatus, ThresholdPolicy};

/// Devices below their threshold, for the map overlay and the low gas table.
/// Devices without a reading are left out.
pub fn low_gas_view(rows: Vec<RawDeviceRow>) -> Vec<LowGasDevice> {
    rows.into_iter()
        .filter_map(|row| {
            let raw_gas = parse_numeric(row.gas_level_raw.as_deref());
            let lower_limit = parse_numeric(row.ang3_lower_limit.as_deref());
            let classification = classify(raw_gas, lower_limit, ThresholdPolicy::AbsoluteFallback);

            if classification.status != GasStatus::Low {
                return None;
            }

            Some(LowGasDevice {
                coordinates: normalize_coordinates(row.coordinates.as_deref()),
                gas_level_raw: raw_gas,
                gas_percentage: classification.gas_percentage.map(round_percent),
                threshold_percent: classification.threshold_percentage.map(round_percent),
                current_log_time: parse_log_time(row.current_log_time.as_deref())
                    .map(format_iso),
                device_id: row.device_id,
                device_location: row.device_location,
                customer_name: row.customer_name,
            })
        })
        .collect()
}

/// Every assigned device split into low and normal; devices without a
/// reading count as normal.
pub fn combined_view(rows: Vec<RawDeviceRow>) -> CombinedDeviceInfo {
    let mut combined = CombinedDeviceInfo::default();

    for row in rows {
        let raw_gas = parse_numeric(row.gas_level_raw.as_deref());
        let lower_limit = parse_numeric(row.ang3_lower_limit.as_deref());
        let classification = classify(raw_gas, lower_limit, ThresholdPolicy::DefaultThreshold);

        let gas_percentage = classification.gas_percentage.map(round_percent);
        let device_status = match (classification.status, gas_percentage) {
            (GasStatus::Low, Some(percent)) => format!("Low Gas Level ({percent}%)"),
            (GasStatus::Ok, Some(percent)) => format!("OK ({percent}%)"),
            _ => String::from("No Data"),
        };

        let device = DeviceInfo {
            gas_percentage,
            threshold_percent: classification
                .threshold_percentage
                .map(round_percent)
                .unwrap_or_default(),
            coordinates: row.coordinates.unwrap_or_default(),
            last_log_time: parse_log_time(row.current_log_time.as_deref()).map(format_plain),
            device_id: row.device_id,
            customer_name: row.customer_name,
            device_location: row.device_location,
            device_status,
        };

        match classification.status {
            GasStatus::Low => combined.low_gas.push(device),
            GasStatus::Ok | GasStatus::NoData => combined.normal_gas.push(device),
        }
    }

    combined
}

/// Reformats `"lat,lng"` or `"lat;lng"` text as `"lat,lng"`. Anything that
/// does not yield two numbers becomes an empty string.
pub fn normalize_coordinates(text: Option<&str>) -> String {
    let Some(text) = text.map(str::trim).filter(|text| !text.is_empty()) else {
        return String::new();
    };

    let parts: Vec<&str> = text.split([',', ';']).collect();
    if parts.len() < 2 {
        return String::new();
    }

    match (parse_numeric(Some(parts[0])), parse_numeric(Some(parts[1]))) {
        (Some(lat), Some(lng)) => format!("{},{}", format_coordinate(lat), format_coordinate(lng)),
        _ => String::new(),
    }
}

/// Integral values keep one decimal (`12.0`). Other values use Rust's
/// shortest decimal form, which never switches to exponent notation:
/// `1e-05` prints as `0.00001`. Real latitudes and longitudes never reach
/// such magnitudes.
fn format_coordinate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Reading times are stored without an offset, either as
/// `YYYY-MM-DD HH:MM:SS` or in ISO-8601 form, optionally with fractions.
fn parse_log_time(text: Option<&str>) -> Option<PrimitiveDateTime> {
    let text = text.map(str::trim).filter(|text| !text.is_empty())?;

    PrimitiveDateTime::parse(&text.replacen(' ', "T", 1), &Iso8601::DEFAULT).ok()
}

fn format_iso(datetime: PrimitiveDateTime) -> String {
    format_with_separator(datetime, 'T')
}

fn format_plain(datetime: PrimitiveDateTime) -> String {
    format_with_separator(datetime, ' ')
}

fn format_with_separator(datetime: PrimitiveDateTime, separator: char) -> String {
    let date = datetime
        .date()
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default();
    let clock = datetime
        .time()
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default();

    match datetime.microsecond() {
        0 => format!("{date}{separator}{clock}"),
        micros => format!("{date}{separator}{clock}.{micros:06}"),
    }
}
