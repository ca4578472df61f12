mod auth;
mod device;

pub use auth::*;
pub use device::*;

/// Identifier of a gas sensor device as stored in the device tables.
pub type DeviceId = String;
