//! Domain layer - records, value objects and errors.

pub mod foundation;
pub mod tool;
