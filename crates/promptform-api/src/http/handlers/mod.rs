//! HTTP request handlers.

pub mod form;
pub mod generate;
