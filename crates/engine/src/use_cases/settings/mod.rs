//! Settings use cases.
//!
//! Per-profile key/value settings, grouped into shared categories, with an
//! append-only change history.

mod settings_ops;

use std::sync::Arc;

pub use settings_ops::{SettingsError, SettingsOps, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};

/// Container for settings use cases.
pub struct SettingsUseCases {
    pub ops: Arc<SettingsOps>,
}

impl SettingsUseCases {
    pub fn new(ops: Arc<SettingsOps>) -> Self {
        Self { ops }
    }
}
