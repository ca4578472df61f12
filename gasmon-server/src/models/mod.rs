mod analog;
mod device_list;
mod device_log_current;
mod device_row;
mod user;
mod user_device;

pub use analog::{Analog, AnalogTable};
pub use device_list::{DeviceList, DeviceListTable};
pub use device_log_current::{DeviceLogCurrent, DeviceLogCurrentTable};
pub use device_row::RawDeviceRow;
pub use user::{User, UserDetailsTable};
pub use user_device::{UserDevice, UserDeviceListTable};

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;
}
