//! Common utility functions shared by the domain and engine crates.
//!
//! Pure functions only: no I/O, no clocks.

pub mod datetime;
pub mod string;

pub use datetime::parse_datetime;
pub use string::StringExt;
