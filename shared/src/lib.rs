//! Shared types and models for the Medical Store Inventory backend
//!
//! This crate holds the domain models, the stock alert rule and form-field
//! validation. It has no database dependency so the rules can be tested on
//! their own.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
