//! myFun Protocol - REST wire types
//!
//! Request bodies and response payloads of the `/api/v1` surface, shared by
//! the engine and anything that talks to it (tests, the browser extension's
//! typed client).
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde and serde_json
//! 2. **No business logic** - pure data types and serialization
//! 3. **No domain types** - raw strings and JSON values; validation happens in the engine

pub mod requests;
pub mod responses;

pub use requests::{
    CreateProfileRequest, HistoryQuery, SettingsBulkUpdateRequest, UpdateSettingRequest,
};
pub use responses::{
    HealthResponse, HistoryEntryResponse, HistoryResponse, MessageResponse, ProfileResponse,
    ServiceInfoResponse, SettingResponse, SettingsResponse,
};
