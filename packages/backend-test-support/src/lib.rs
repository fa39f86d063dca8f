//! Backend test support utilities
//!
//! Shared helpers for the reversi backend test suites: logging bootstrap and
//! generators for unique identifiers so tests never collide on shared stores.

pub mod logging;
pub mod unique_helpers;
