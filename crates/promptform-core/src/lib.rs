//! Business logic for Promptform.
//!
//! This crate defines the backend "port" (the [`llm::generator::TextGenerator`]
//! trait) that the infrastructure layer implements, the [`dispatch::Dispatcher`]
//! that renders templates and forwards prompts, and the built-in presets.
//! It depends only on `promptform-types` -- never on any HTTP or IO crate.

pub mod dispatch;
pub mod llm;
pub mod presets;
