//! Shared domain types for Promptform.
//!
//! This crate contains the core domain types used across the Promptform
//! service: prompt templates, presets, generation parameters, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod generation;
pub mod preset;
pub mod template;
