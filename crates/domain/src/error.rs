use crate::{Equipment, ExerciseID, MuscleGroup, Property, SubRegion};

/// Rejection of a plan request before any selection work starts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("gender must be one of: male, female")]
    Gender(String),
    #[error("goal must be one of: strength, hypertrophy, endurance, weight_loss")]
    Goal(String),
    #[error("experience must be one of: beginner, intermediate, advanced")]
    Experience(String),
    #[error("Invalid equipment: {}. Valid options: {}", .0.join(", "), valid_equipment())]
    Equipment(Vec<String>),
    #[error("daysPerWeek must be an integer between 3 and 6 ({0} given)")]
    DaysPerWeek(i64),
    #[error("sessionDuration must be an integer between 30 and 120 ({0} given)")]
    SessionDuration(i64),
}

fn valid_equipment() -> String {
    Equipment::iter()
        .map(|e| e.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate exercise {0}")]
    DuplicateExercise(ExerciseID),
    #[error("sub-region {sub_region} of exercise {id} does not belong to {muscle_group}")]
    SubRegionMismatch {
        id: ExerciseID,
        sub_region: SubRegion,
        muscle_group: MuscleGroup,
    },
    #[error("exercise {0} does not list any equipment")]
    NoEquipment(ExerciseID),
    #[error("unknown exercise {0}")]
    UnknownExercise(ExerciseID),
    #[error("exercise {0} is mapped to more than one movement pattern")]
    DuplicatePattern(ExerciseID),
}
