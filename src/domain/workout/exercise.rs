//! Exercise records and the inputs that create or modify them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExerciseId, ValidationError};

/// One logged exercise within a workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub id: ExerciseId,
    /// Free-text label; exact-match grouping key for records and history.
    pub name: String,
    pub weight: f64,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub note: String,
}

impl ExerciseRecord {
    /// Builds a record with a fresh id from a validated draft.
    pub fn from_draft(draft: ExerciseDraft) -> Self {
        Self {
            id: ExerciseId::new(),
            name: draft.name,
            weight: draft.weight,
            sets: draft.sets,
            reps: draft.reps,
            note: draft.note,
        }
    }

    /// weight × sets × reps
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.sets) * f64::from(self.reps)
    }
}

/// Validated input for a new exercise record.
///
/// # Invariants
///
/// - `name` is trimmed and non-empty
/// - `weight` is finite and > 0
/// - `sets` and `reps` are > 0
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    name: String,
    weight: f64,
    sets: u32,
    reps: u32,
    note: String,
}

impl ExerciseDraft {
    /// Creates a draft, validating every field.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is blank
    /// - `NotPositive` if weight, sets or reps is not positive
    pub fn new(
        name: impl AsRef<str>,
        weight: f64,
        sets: u32,
        reps: u32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name.as_ref())?,
            weight: validate_weight(weight)?,
            sets: validate_count("sets", sets)?,
            reps: validate_count("reps", reps)?,
            note: String::new(),
        })
    }

    /// Attaches a free-text note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn sets(&self) -> u32 {
        self.sets
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Untyped exercise input as collected from a form or prompt.
///
/// Numeric fields are coerced from text when converted to a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawExerciseInput {
    pub name: Option<String>,
    pub weight: Option<String>,
    pub sets: Option<String>,
    pub reps: Option<String>,
    pub note: Option<String>,
}

impl RawExerciseInput {
    /// Coerces and validates the raw input.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name, weight, sets or reps is missing or blank
    /// - `InvalidFormat` if a numeric field does not parse
    /// - `NotPositive` if a numeric field is zero or negative
    pub fn into_draft(self) -> Result<ExerciseDraft, ValidationError> {
        let name = required("name", self.name)?;
        let weight = parse_number::<f64>("weight", self.weight)?;
        let sets = parse_count("sets", self.sets)?;
        let reps = parse_count("reps", self.reps)?;

        let draft = ExerciseDraft::new(name, weight, sets, reps)?;
        Ok(match self.note {
            Some(note) => draft.with_note(note),
            None => draft,
        })
    }
}

/// Partial update of an exercise record. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub note: Option<String>,
}

impl ExercisePatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn sets(mut self, sets: u32) -> Self {
        self.sets = Some(sets);
        self
    }

    pub fn reps(mut self, reps: u32) -> Self {
        self.reps = Some(reps);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.weight.is_none()
            && self.sets.is_none()
            && self.reps.is_none()
            && self.note.is_none()
    }

    /// Validates every present field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(weight) = self.weight {
            validate_weight(weight)?;
        }
        if let Some(sets) = self.sets {
            validate_count("sets", sets)?;
        }
        if let Some(reps) = self.reps {
            validate_count("reps", reps)?;
        }
        Ok(())
    }

    /// Merges present fields into `record`. Call `validate` first.
    pub(crate) fn apply_to(&self, record: &mut ExerciseRecord) {
        if let Some(name) = &self.name {
            record.name = name.trim().to_string();
        }
        if let Some(weight) = self.weight {
            record.weight = weight;
        }
        if let Some(sets) = self.sets {
            record.sets = sets;
        }
        if let Some(reps) = self.reps {
            record.reps = reps;
        }
        if let Some(note) = &self.note {
            record.note = note.clone();
        }
    }
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    Ok(trimmed.to_string())
}

fn validate_weight(weight: f64) -> Result<f64, ValidationError> {
    if !weight.is_finite() {
        return Err(ValidationError::invalid_format("weight", "must be a finite number"));
    }
    if weight <= 0.0 {
        return Err(ValidationError::not_positive("weight", weight));
    }
    Ok(weight)
}

fn validate_count(field: &str, value: u32) -> Result<u32, ValidationError> {
    if value == 0 {
        return Err(ValidationError::not_positive(field, 0.0));
    }
    Ok(value)
}

fn required(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::empty_field(field)),
    }
}

fn parse_number<T: std::str::FromStr>(
    field: &str,
    value: Option<String>,
) -> Result<T, ValidationError>
where
    T::Err: std::fmt::Display,
{
    let raw = required(field, value)?;
    raw.trim()
        .parse::<T>()
        .map_err(|e| ValidationError::invalid_format(field, e.to_string()))
}

// Counts go through f64 so "-3" reports NotPositive instead of a parse error.
fn parse_count(field: &str, value: Option<String>) -> Result<u32, ValidationError> {
    let n = parse_number::<f64>(field, value)?;
    if n.fract() != 0.0 {
        return Err(ValidationError::invalid_format(field, "must be a whole number"));
    }
    if n <= 0.0 {
        return Err(ValidationError::not_positive(field, n));
    }
    if n > f64::from(u32::MAX) {
        return Err(ValidationError::invalid_format(field, "too large"));
    }
    Ok(n as u32)
}
