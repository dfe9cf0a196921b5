//! Analytics Module - Pure functions over training data.
//!
//! # Components
//!
//! - `VolumeAnalyzer` - Volume totals and per-session summaries
//! - `HistoryAnalyzer` - Per-exercise timelines and progress trends
//! - `TrendAnalyzer` - Weekly volume, exercise frequency, overall totals
//!
//! Nothing here performs I/O or mutates its input. Callers pass data already
//! loaded by the repositories.

mod history;
mod trends;
mod volume;

pub use history::{HistoryAnalyzer, HistoryEntry, Trend};
pub use trends::{ExerciseFrequency, TrainingOverview, TrendAnalyzer, WeeklyVolume};
pub use volume::{HeaviestLift, SessionSummary, VolumeAnalyzer};
