//! Infrastructure layer for Promptform.
//!
//! Contains the implementation of the backend port defined in
//! `promptform-core` (the Hugging Face Inference API client), environment
//! credential resolution, and the `config.toml` loader.

pub mod config;
pub mod credentials;
pub mod llm;
