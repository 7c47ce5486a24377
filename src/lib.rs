//! Task Board Mock API Library
//!
//! This library provides a minimal CRUD backend for a task client
//! application, persisting everything in one flat JSON file.

pub mod api;
pub mod domain;
pub mod infrastructure;
