#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use chrono::{DateTime, Utc};
use liftplan_domain::{Plan, PlanInput, WorkoutName};
use serde::{Deserialize, Serialize};

pub mod json_lines;

pub use json_lines::JsonLinesStore;

/// Persistence of generated plans under a user chosen name.
pub trait PlanStore {
    /// Replaces an existing plan of the same name.
    fn save(
        &self,
        name: &WorkoutName,
        input: &PlanInput,
        plan: &Plan,
    ) -> Result<SaveOutcome, StorageError>;
    fn load(&self, name: &WorkoutName) -> Result<Option<SavedPlan>, StorageError>;
    fn saved_at(&self, name: &WorkoutName) -> Result<Option<DateTime<Utc>>, StorageError>;
    fn names(&self) -> Result<Vec<String>, StorageError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub input_params: PlanInput,
    pub workout: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub name: WorkoutName,
    pub overwritten: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
