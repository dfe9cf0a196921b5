//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, dates, errors)
//! - `workout` - Workout sessions, exercise records and the root store
//! - `records` - Personal record ledger
//! - `template` - Reusable workout templates
//! - `analytics` - Pure functions for volume, history and trends

pub mod analytics;
pub mod foundation;
pub mod records;
pub mod template;
pub mod workout;
