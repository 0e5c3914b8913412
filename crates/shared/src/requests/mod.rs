//! Request bodies and query strings.

mod profile;
mod setting;

pub use profile::CreateProfileRequest;
pub use setting::{HistoryQuery, SettingsBulkUpdateRequest, UpdateSettingRequest};
