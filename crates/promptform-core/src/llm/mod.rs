//! Backend port: the text-generation trait and its type-erased wrapper.

pub mod box_generator;
pub mod generator;

pub use box_generator::BoxTextGenerator;
pub use generator::TextGenerator;
