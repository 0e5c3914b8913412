//! Domain types for the myFun profile settings service.
//!
//! Everything here is pure: validated identifiers, the setting value
//! normalization rule and the graph entities as plain structs. Persistence
//! lives in `myfun-engine`.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{ChangeType, HistoryEntry, Profile, Setting};
pub use error::DomainError;
pub use ids::ProfileId;
pub use value_objects::{CategoryName, SettingKey, SettingValue, MAX_NAME_LENGTH};
