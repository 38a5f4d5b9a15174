//! Firestore adapter - REST client for the tools collection.

mod document;
mod firestore_tool_store;

pub use document::{FirestoreDocument, FirestoreValue, ListDocumentsResponse};
pub use firestore_tool_store::{FirestoreConfig, FirestoreToolStore};
