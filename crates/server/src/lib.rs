//! Question Board Server library.
//!
//! This crate provides the web server as a library so the router can be
//! built in-process by the integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
