//! Configuration module for search requests
//!
//! This module provides the `SearchConfig` struct and its builder
//! for configuring extraction bounds with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::SearchConfigBuilder;
pub use types::SearchConfig;
