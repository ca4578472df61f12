//! Gas level classification.
//!
//! Sensors report gas on an internal scale where `5.0` is a full tank, so the
//! display percentage is the raw value times 20. Thresholds are configured per
//! device as `ang3_lower_limit`, on the raw scale times 1000.

/// Raw sensor units to percent.
pub const GAS_SCALE: f64 = 20.0;

/// Divisor that brings a configured lower limit back to the raw scale.
pub const LIMIT_DIVISOR: f64 = 1000.0;

/// Threshold used when a device has no configured lower limit.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasStatus {
    Low,
    Ok,
    NoData,
}

/// How a device without a configured lower limit is judged.
///
/// The map and the device table disagree here and both behaviours are kept:
/// the map reports no threshold at all and falls back to an absolute 10%
/// rule, while the device table substitutes a 10% threshold so that every
/// entry shows one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdPolicy {
    /// No threshold is reported; `gas < 10%` is low.
    AbsoluteFallback,
    /// The threshold defaults to 10%.
    DefaultThreshold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub status: GasStatus,
    pub gas_percentage: Option<f64>,
    pub threshold_percentage: Option<f64>,
}

/// Parses a numeric column. Blank, malformed and non-finite text is treated
/// as a missing value.
pub fn parse_numeric(text: Option<&str>) -> Option<f64> {
    text.map(str::trim)
        .filter(|text| !text.is_empty())
        .and_then(|text| text.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

pub fn gas_percentage(raw_gas: Option<f64>) -> Option<f64> {
    raw_gas.map(|raw| raw * GAS_SCALE)
}

pub fn threshold_percentage(lower_limit: Option<f64>) -> Option<f64> {
    lower_limit.map(|limit| (limit / LIMIT_DIVISOR) * GAS_SCALE)
}

pub fn classify(
    raw_gas: Option<f64>,
    lower_limit: Option<f64>,
    policy: ThresholdPolicy,
) -> Classification {
    let gas_percentage = gas_percentage(raw_gas);
    let threshold_percentage = match policy {
        ThresholdPolicy::AbsoluteFallback => threshold_percentage(lower_limit),
        ThresholdPolicy::DefaultThreshold => {
            Some(threshold_percentage(lower_limit).unwrap_or(DEFAULT_THRESHOLD_PERCENT))
        }
    };

    let status = match gas_percentage {
        None => GasStatus::NoData,
        Some(gas) => {
            let threshold = threshold_percentage.unwrap_or(DEFAULT_THRESHOLD_PERCENT);
            if gas < threshold {
                GasStatus::Low
            } else {
                GasStatus::Ok
            }
        }
    };

    Classification {
        status,
        gas_percentage,
        threshold_percentage,
    }
}

/// Rounds a percentage for display, halfway cases to the even neighbour.
pub fn round_percent(value: f64) -> i64 {
    value.round_ties_even() as i64
}
