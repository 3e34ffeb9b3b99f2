//! # PawSync Core
//!
//! Domain types and state machines for sharing a weekly availability post:
//! the drag-to-select time grid, the multi-step share form, and the traits
//! describing the geocoding and persistence collaborators.

pub mod errors;
pub mod form;
pub mod grid;
pub mod models;
pub mod services;
