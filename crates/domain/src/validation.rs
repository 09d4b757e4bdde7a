use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use serde::{Serialize, Serializer};

use crate::{
    MIN_EXERCISES_PER_DAY, MovementPattern, MovementPatternIndex, MuscleGroup, PlannedExercise,
    SubRegion,
};

/// Advisory finding attached to a generated day. Never aborts plan generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    NoNonRedundantExercise(SubRegion),
    MissingCoverage(Vec<SubRegion>),
    RelaxedVariantExclusion,
    BelowMinimum(usize),
    NoExercises(MuscleGroup),
    MissingSubRegions(MuscleGroup, Vec<SubRegion>),
    RedundantPattern {
        pattern: MovementPattern,
        first: &'static str,
        second: &'static str,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NoNonRedundantExercise(sub_region) => {
                write!(f, "Could not find non-redundant exercise for {sub_region}")
            }
            Warning::MissingCoverage(sub_regions) => {
                write!(f, "Missing coverage for: {}", join(sub_regions))
            }
            Warning::RelaxedVariantExclusion => write!(
                f,
                "Reused exercises from other variants to reach the minimum of \
                 {MIN_EXERCISES_PER_DAY} exercises"
            ),
            Warning::BelowMinimum(count) => write!(
                f,
                "Only {count} exercises available, below the minimum of {MIN_EXERCISES_PER_DAY}"
            ),
            Warning::NoExercises(muscle_group) => write!(f, "No exercises for {muscle_group}"),
            Warning::MissingSubRegions(muscle_group, sub_regions) => {
                write!(f, "{muscle_group}: missing sub-regions {}", join(sub_regions))
            }
            Warning::RedundantPattern {
                pattern,
                first,
                second,
            } => write!(f, "Redundant pattern '{pattern}': {first} and {second}"),
        }
    }
}

impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn join(sub_regions: &[SubRegion]) -> String {
    sub_regions
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}

/// Post-hoc check of sub-region coverage and movement pattern redundancy.
pub struct WorkoutValidator<'a> {
    patterns: &'a MovementPatternIndex,
}

impl<'a> WorkoutValidator<'a> {
    #[must_use]
    pub fn new(patterns: &'a MovementPatternIndex) -> Self {
        Self { patterns }
    }

    /// Muscle groups missing from `targets` are checked against all their sub-regions.
    #[must_use]
    pub fn validate(
        &self,
        exercises: &[PlannedExercise],
        muscle_groups: &[MuscleGroup],
        targets: &BTreeMap<MuscleGroup, Vec<SubRegion>>,
    ) -> Vec<Warning> {
        let mut warnings = vec![];

        for muscle_group in muscle_groups {
            let covered = exercises
                .iter()
                .filter(|e| e.muscle_group == *muscle_group)
                .map(|e| e.sub_region)
                .collect::<BTreeSet<_>>();

            if covered.is_empty() {
                warnings.push(Warning::NoExercises(*muscle_group));
                continue;
            }

            let required = targets
                .get(muscle_group)
                .map_or(muscle_group.sub_regions(), Vec::as_slice);
            let missing = required
                .iter()
                .filter(|s| !covered.contains(s))
                .copied()
                .collect::<Vec<_>>();

            if !missing.is_empty() {
                warnings.push(Warning::MissingSubRegions(*muscle_group, missing));
            }
        }

        let mut seen = BTreeMap::new();
        for exercise in exercises {
            if let Some(pattern) = self.patterns.pattern_of(&exercise.id) {
                match seen.get(&pattern) {
                    Some(first) => warnings.push(Warning::RedundantPattern {
                        pattern,
                        first: *first,
                        second: exercise.name,
                    }),
                    None => {
                        seen.insert(pattern, exercise.name);
                    }
                }
            }
        }

        warnings
    }
}
