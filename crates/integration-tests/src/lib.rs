//! Integration tests for the question board.
//!
//! Tests drive the Axum `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates routing, handlers, the session
//! layer and persistence against a temporary data file.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p question-board-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
