//! Graph entities.
//!
//! ## Graph Design
//!
//! - `(:Profile)-[:HAS_SETTING]->(:Setting)-[:BELONGS_TO]->(:Category)`
//! - `(:Profile)-[:HAS_HISTORY]->(:History)`
//!
//! Categories have no struct of their own; a `Setting` carries its category
//! name and the node exists only to group settings across profiles.

mod history;
mod profile;
mod setting;

pub use history::{ChangeType, HistoryEntry};
pub use profile::Profile;
pub use setting::Setting;
