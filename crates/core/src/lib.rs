//! Question Board Core - Domain logic library.
//!
//! This crate provides the domain model shared by the question board
//! components:
//! - `server` - The public board, student submission page, and admin panel
//!
//! # Architecture
//!
//! The core crate contains the aggregate record, the board state machine
//! (rotation, lazy expiration, answer intake, admin merges) and the
//! JSON-file persistent store. No HTTP, no async - the clock is passed in
//! as a unix timestamp so every transition is deterministic under test.
//!
//! # Modules
//!
//! - [`board`] - The aggregate and its state transitions
//! - [`store`] - Whole-document JSON persistence

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod board;
pub mod store;

pub use board::{Aggregate, Answer, Settings, SettingsPatch, SubmitError, UpdatePatch};
pub use store::{JsonStore, StoreError};
