//! Configuration types
//!
//! Console settings, persisted as postcard binary data when the `serde`
//! feature is enabled.

pub mod console;

pub use console::*;
