//! Observability support for Promptform.

pub mod tracing_setup;
