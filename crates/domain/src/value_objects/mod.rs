//! Value objects: validated names and the setting value normalization.

mod names;
mod setting_value;

pub use names::{CategoryName, SettingKey, MAX_NAME_LENGTH};
pub(crate) use names::validate_name;
pub use setting_value::SettingValue;
