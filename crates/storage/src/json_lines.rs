use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use liftplan_domain::{Plan, PlanInput, WorkoutName};
use log::{debug, warn};

use crate::{PlanStore, SaveOutcome, SavedPlan, StorageError};

pub const FILE_NAME: &str = "saved_workouts.jsonl";

/// Stores one plan per line in a JSON Lines file.
pub struct JsonLinesStore {
    path: PathBuf,
}

impl JsonLinesStore {
    /// The directory is created on the first save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(FILE_NAME),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<SavedPlan>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
            Err(err) => return Err(err.into()),
        };

        Ok(content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(i, line)| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("skipping line {} of {}: {err}", i + 1, self.path.display());
                    None
                }
            })
            .collect())
    }

    fn write_records(&self, records: &[SavedPlan]) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut content = String::new();
        for record in records {
            content.push_str(&serde_json::to_string(record)?);
            content.push('\n');
        }

        fs::write(&self.path, content)?;
        Ok(())
    }

    fn find(&self, name: &WorkoutName) -> Result<Option<SavedPlan>, StorageError> {
        Ok(self
            .read_records()?
            .into_iter()
            .find(|r| r.name == name.as_str()))
    }
}

impl PlanStore for JsonLinesStore {
    fn save(
        &self,
        name: &WorkoutName,
        input: &PlanInput,
        plan: &Plan,
    ) -> Result<SaveOutcome, StorageError> {
        let mut records = self.read_records()?;
        let record = SavedPlan {
            name: name.to_string(),
            saved_at: Utc::now(),
            input_params: input.clone(),
            workout: serde_json::to_value(plan)?,
        };

        let overwritten = match records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => {
                records.push(record);
                false
            }
        };

        self.write_records(&records)?;
        debug!(
            "{} {name} in {}",
            if overwritten { "replaced" } else { "saved" },
            self.path.display()
        );

        Ok(SaveOutcome {
            name: name.clone(),
            overwritten,
        })
    }

    fn load(&self, name: &WorkoutName) -> Result<Option<SavedPlan>, StorageError> {
        self.find(name)
    }

    fn saved_at(&self, name: &WorkoutName) -> Result<Option<DateTime<Utc>>, StorageError> {
        Ok(self.find(name)?.map(|r| r.saved_at))
    }

    fn names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.read_records()?.into_iter().map(|r| r.name).collect())
    }
}
