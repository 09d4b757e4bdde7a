use std::slice::Iter;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

use crate::{Difficulty, MuscleGroup, Property, SelectionConfig, SplitType, SubRegion};

/// Upper bound of exercises per day regardless of gender and split.
pub const MAX_EXERCISES_PER_DAY: usize = 9;
pub const MIN_EXERCISES_PER_DAY: usize = 4;

#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Property for Gender {
    fn iter() -> Iter<'static, Gender> {
        static GENDER: [Gender; 2] = [Gender::Male, Gender::Female];
        GENDER.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl Gender {
    /// Factor applied to the per-muscle-group exercise count.
    #[must_use]
    pub fn volume_multiplier(self, muscle_group: MuscleGroup) -> f64 {
        match (self, muscle_group) {
            (Gender::Male, _) | (Gender::Female, MuscleGroup::Back) => 1.0,
            (Gender::Female, MuscleGroup::Legs) => 2.0,
            (Gender::Female, MuscleGroup::Chest | MuscleGroup::Shoulders | MuscleGroup::Arms) => {
                0.5
            }
        }
    }

    #[must_use]
    pub fn max_exercises(self, split_type: SplitType) -> usize {
        let max = match (self, split_type) {
            (Gender::Female, SplitType::Push) => 6,
            (Gender::Female, SplitType::Pull | SplitType::Upper) => 8,
            _ => MAX_EXERCISES_PER_DAY,
        };
        max.min(MAX_EXERCISES_PER_DAY)
    }

    #[must_use]
    pub fn excluded_sub_regions(self) -> &'static [SubRegion] {
        match self {
            Gender::Male => &[SubRegion::Glutes],
            Gender::Female => &[],
        }
    }

    /// Whether glutes are moved to the front of the legs sub-regions.
    #[must_use]
    pub fn prioritizes_glutes(self) -> bool {
        self == Gender::Female
    }
}

#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
    WeightLoss,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOAL: [Goal; 4] = [
            Goal::Strength,
            Goal::Hypertrophy,
            Goal::Endurance,
            Goal::WeightLoss,
        ];
        GOAL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Hypertrophy => "Hypertrophy",
            Goal::Endurance => "Endurance",
            Goal::WeightLoss => "Weight Loss",
        }
    }
}

impl Goal {
    #[must_use]
    pub fn parameters(self) -> GoalParameters {
        match self {
            Goal::Strength => GoalParameters {
                reps: "3-6",
                sets: 4,
            },
            Goal::Hypertrophy => GoalParameters {
                reps: "8-12",
                sets: 3,
            },
            Goal::Endurance => GoalParameters {
                reps: "15-20",
                sets: 3,
            },
            Goal::WeightLoss => GoalParameters {
                reps: "12-15",
                sets: 3,
            },
        }
    }

    #[must_use]
    pub fn progression(self) -> Progression {
        match self {
            Goal::Strength => Progression {
                method: "Linear Progression",
                increment: "Add 2.5-5 lbs when you complete all sets at target reps",
                deload: "Reduce weight by 10% after 3 failed sessions",
            },
            Goal::Hypertrophy => Progression {
                method: "Double Progression",
                increment: "Increase reps to top of range, then add weight and reset to bottom",
                deload: "Reduce weight by 20% every 5-6 weeks",
            },
            Goal::Endurance => Progression {
                method: "Volume Progression",
                increment: "Add 1-2 reps per set each week until reaching 25 reps",
                deload: "Reduce volume by 40% every 4 weeks",
            },
            Goal::WeightLoss => Progression {
                method: "Density Progression",
                increment: "Reduce rest periods by 5-10 seconds each week",
                deload: "Return to original rest periods every 4 weeks",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalParameters {
    pub reps: &'static str,
    pub sets: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progression {
    pub method: &'static str,
    pub increment: &'static str,
    pub deload: &'static str,
}

#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Experience {
    fn iter() -> Iter<'static, Experience> {
        static EXPERIENCE: [Experience; 3] = [
            Experience::Beginner,
            Experience::Intermediate,
            Experience::Advanced,
        ];
        EXPERIENCE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Experience::Beginner => "Beginner",
            Experience::Intermediate => "Intermediate",
            Experience::Advanced => "Advanced",
        }
    }
}

impl Experience {
    #[must_use]
    pub fn selection_config(self) -> SelectionConfig {
        match self {
            Experience::Beginner => SelectionConfig {
                exercises_per_muscle_group: 2,
                max_difficulty: Difficulty::Medium,
                require_full_coverage: false,
            },
            Experience::Intermediate => SelectionConfig {
                exercises_per_muscle_group: 3,
                max_difficulty: Difficulty::Hard,
                require_full_coverage: true,
            },
            Experience::Advanced => SelectionConfig {
                exercises_per_muscle_group: 4,
                max_difficulty: Difficulty::Hard,
                require_full_coverage: true,
            },
        }
    }

    #[must_use]
    pub fn set_multiplier(self) -> f64 {
        match self {
            Experience::Beginner => 0.85,
            Experience::Intermediate => 1.0,
            Experience::Advanced => 1.15,
        }
    }

    /// Number of sets for a goal, never below two.
    #[must_use]
    pub fn sets(self, goal: &GoalParameters) -> u32 {
        let sets = (f64::from(goal.sets) * self.set_multiplier()).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let sets = sets as u32;
        sets.max(2)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Goal::Strength, Experience::Beginner, 3)]
    #[case(Goal::Strength, Experience::Intermediate, 4)]
    #[case(Goal::Strength, Experience::Advanced, 5)]
    #[case(Goal::Hypertrophy, Experience::Beginner, 3)]
    #[case(Goal::Hypertrophy, Experience::Advanced, 3)]
    #[case(Goal::Endurance, Experience::Intermediate, 3)]
    fn test_experience_sets(
        #[case] goal: Goal,
        #[case] experience: Experience,
        #[case] expected: u32,
    ) {
        assert_eq!(experience.sets(&goal.parameters()), expected);
    }

    #[test]
    fn test_experience_sets_minimum() {
        assert_eq!(
            Experience::Beginner.sets(&GoalParameters {
                reps: "8-12",
                sets: 1
            }),
            2
        );
    }

    #[rstest]
    #[case(Gender::Male, SplitType::Push, 9)]
    #[case(Gender::Male, SplitType::FullBody, 9)]
    #[case(Gender::Female, SplitType::Push, 6)]
    #[case(Gender::Female, SplitType::Pull, 8)]
    #[case(Gender::Female, SplitType::Upper, 8)]
    #[case(Gender::Female, SplitType::Legs, 9)]
    #[case(Gender::Female, SplitType::FullBody, 9)]
    fn test_gender_max_exercises(
        #[case] gender: Gender,
        #[case] split_type: SplitType,
        #[case] expected: usize,
    ) {
        assert_eq!(gender.max_exercises(split_type), expected);
    }

    #[test]
    fn test_gender_volume_multiplier() {
        for muscle_group in MuscleGroup::iter() {
            assert!((Gender::Male.volume_multiplier(*muscle_group) - 1.0).abs() < f64::EPSILON);
        }
        assert!((Gender::Female.volume_multiplier(MuscleGroup::Legs) - 2.0).abs() < f64::EPSILON);
        assert!((Gender::Female.volume_multiplier(MuscleGroup::Arms) - 0.5).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("male", Ok(Gender::Male))]
    #[case("female", Ok(Gender::Female))]
    #[case("Male", Err(strum::ParseError::VariantNotFound))]
    fn test_gender_from_str(#[case] value: &str, #[case] expected: Result<Gender, strum::ParseError>) {
        assert_eq!(Gender::from_str(value), expected);
    }

    #[test]
    fn test_goal_wire_names() {
        assert_eq!(
            Goal::iter().map(|g| g.as_ref()).collect::<Vec<_>>(),
            vec!["strength", "hypertrophy", "endurance", "weight_loss"]
        );
        assert_eq!(Goal::from_str("weight_loss"), Ok(Goal::WeightLoss));
    }

    #[test]
    fn test_progression() {
        let mut methods = Goal::iter()
            .map(|g| g.progression().method)
            .collect::<Vec<_>>();
        methods.dedup();
        assert_eq!(methods.len(), 4);
        assert_eq!(Goal::Hypertrophy.progression().method, "Double Progression");
    }

    #[test]
    fn test_selection_config() {
        assert_eq!(
            Experience::Beginner.selection_config(),
            SelectionConfig {
                exercises_per_muscle_group: 2,
                max_difficulty: Difficulty::Medium,
                require_full_coverage: false,
            }
        );
        assert!(Experience::Advanced.selection_config().require_full_coverage);
    }
}
