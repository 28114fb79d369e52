//! JSON API route handlers.

pub mod admin;
pub mod public;
