//! Backend client implementations.

pub mod huggingface;

pub use huggingface::HuggingFaceGenerator;
