//! Workout templates: reusable exercise blueprints persisted apart from sessions.

mod aggregate;

pub use aggregate::{Template, TemplateExercise, TemplateStore, TemplateSummary};
