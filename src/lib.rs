//! Tool Shelf - a page listing tools (title, description, url) kept in a
//! document store, with inline create, edit and delete.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
