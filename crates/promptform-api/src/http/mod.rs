//! HTTP layer: router, handlers, error mapping, and the response envelope.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
