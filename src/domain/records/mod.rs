//! Personal record tracking.
//!
//! Records are updated as a side effect of adding an exercise to a workout.

mod ledger;

pub use ledger::{PersonalRecord, PersonalRecordLedger, RecordOutcome};
