mod auth_service;
mod device_service;
pub mod device_view;
pub mod gas_status;
mod token_service;

pub use auth_service::*;
pub use device_service::*;
pub use token_service::*;
