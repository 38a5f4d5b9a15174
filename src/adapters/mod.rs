//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `firestore` - Tool store over the Firestore REST API
//! - `memory` - In-process tool store for development and tests
//! - `http` - axum page and JSON endpoints

pub mod firestore;
pub mod http;
pub mod memory;

pub use firestore::{FirestoreConfig, FirestoreToolStore};
pub use memory::InMemoryToolStore;
