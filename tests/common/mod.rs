//! Common test helpers for integration tests.
//!
//! This module provides shared utilities for creating temp-dir-backed
//! stores, `AppState` instances, and seeded tasks.
//!
//! # Note
//!
//! The `#![allow(dead_code)]` attribute is necessary because Rust compiles
//! each integration test file as a separate crate. Helpers used by only one
//! test file would otherwise generate dead code warnings during compilation
//! of the other test files.

#![allow(dead_code)]

use tempfile::TempDir;

use taskboard_api::api::{AppState, CreateTaskRequest};
use taskboard_api::domain::Task;
use taskboard_api::infrastructure::FileStore;

/// Creates an `AppState` backed by a store inside a fresh temp directory.
///
/// The returned `TempDir` guard must be kept alive for the duration of the
/// test; dropping it deletes the backing file.
pub fn create_test_app_state() -> (AppState, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path().join("db.json"));
    (AppState::new(store), dir)
}

/// Creates an `AppState` whose store points inside a directory that does
/// not exist, so every load and save fails with an I/O error.
pub fn create_broken_app_state() -> (AppState, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path().join("missing").join("db.json"));
    (AppState::new(store), dir)
}

/// Creates a task with the given title and saves it through the store.
pub fn create_and_save_task(state: &AppState, title: &str) -> Task {
    let request = CreateTaskRequest {
        title: Some(title.to_string()),
        ..CreateTaskRequest::default()
    };
    let task = request.into_task();

    let mut document = state.store.load().expect("Failed to load document");
    document.tasks.push(task.clone());
    state.store.save(&document).expect("Failed to save document");

    task
}

/// Returns how many tasks the store currently holds.
pub fn stored_task_count(state: &AppState) -> usize {
    state
        .store
        .load()
        .expect("Failed to load document")
        .tasks
        .len()
}
