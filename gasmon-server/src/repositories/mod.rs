mod device_reading;
mod user;
mod user_device;

pub use device_reading::DeviceReadingRepository;
pub use user::UserRepository;
pub use user_device::UserDeviceRepository;
