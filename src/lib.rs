//! LiftLog - Strength Training Log
//!
//! This crate records strength-training workouts (dated groups of exercises
//! with weight, sets and reps), keeps a ledger of personal records, manages
//! reusable workout templates, and derives volume and trend statistics.
//!
//! Stores are persisted as whole JSON snapshots behind the
//! [`ports::SnapshotStorage`] port; [`application::TrainingLog`] is the
//! usual entry point.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
