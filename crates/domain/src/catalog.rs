use std::collections::{BTreeMap, BTreeSet};

use crate::{
    CatalogError, Difficulty, Equipment, Exercise, ExerciseID, Mechanic, MuscleGroup, SubRegion,
    Tier,
};

/// Read-only collection of exercises, indexed by identifier.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    index: BTreeMap<ExerciseID, usize>,
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, CatalogError> {
        let mut index = BTreeMap::new();

        for (i, exercise) in exercises.iter().enumerate() {
            if index.insert(exercise.id, i).is_some() {
                return Err(CatalogError::DuplicateExercise(exercise.id));
            }
            if exercise.sub_region.muscle_group() != exercise.muscle_group {
                return Err(CatalogError::SubRegionMismatch {
                    id: exercise.id,
                    sub_region: exercise.sub_region,
                    muscle_group: exercise.muscle_group,
                });
            }
            if exercise.equipment.is_empty() {
                return Err(CatalogError::NoEquipment(exercise.id));
            }
        }

        Ok(Self { exercises, index })
    }

    /// The bundled exercise dataset.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(EXERCISES.to_vec())
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.index.get(id).and_then(|&i| self.exercises.get(i))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn by_muscle_group(&self, muscle_group: MuscleGroup) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(move |e| e.muscle_group == muscle_group)
    }

    pub fn by_sub_region(&self, sub_region: SubRegion) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(move |e| e.sub_region == sub_region)
    }

    /// Exercises hitting the same sub-region with the same mechanic, best first.
    #[must_use]
    pub fn substitutes(
        &self,
        id: &str,
        equipment: Option<&BTreeSet<Equipment>>,
    ) -> Vec<&Exercise> {
        let Some(original) = self.get(id) else {
            return vec![];
        };
        let mut substitutes = self
            .by_sub_region(original.sub_region)
            .filter(|e| {
                e.id != original.id
                    && e.mechanic == original.mechanic
                    && equipment.is_none_or(|equipment| e.is_available_with(equipment))
            })
            .collect::<Vec<_>>();
        substitutes.sort_by(|a, b| a.cmp_priority(b));
        substitutes
    }
}

const EXERCISES: [Exercise; 147] = [
    Exercise {
        id: ExerciseID::new("incline-barbell-bench-press"),
        name: "Incline Barbell Bench Press",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::UpperChest,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Bench, Equipment::Rack],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["upper_pec", "anterior_deltoid", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("incline-dumbbell-press"),
        name: "Incline Dumbbell Press",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::UpperChest,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["upper_pec", "anterior_deltoid", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("low-to-high-cable-fly"),
        name: "Low-to-High Cable Fly",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::UpperChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["upper_pec", "anterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("incline-dumbbell-fly"),
        name: "Incline Dumbbell Fly",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::UpperChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["upper_pec"],
    },
    Exercise {
        id: ExerciseID::new("seated-cable-fly-low"),
        name: "Seated Cable Fly (Low Position)",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::UpperChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["upper_pec"],
    },
    Exercise {
        id: ExerciseID::new("incline-smith-machine-press"),
        name: "Incline Smith Machine Press",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::UpperChest,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Machine, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["upper_pec", "anterior_deltoid", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("reverse-grip-bench-press"),
        name: "Reverse-Grip Bench Press",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::UpperChest,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Barbell, Equipment::Bench, Equipment::Rack],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["upper_pec", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("landmine-press"),
        name: "Landmine Press",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::UpperChest,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["upper_pec", "anterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("machine-chest-press"),
        name: "Machine Chest Press",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::MidChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
        tier: Tier::S,
        rest_seconds: 90,
        targets: &["mid_pec", "anterior_deltoid", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("flat-barbell-bench-press"),
        name: "Flat Barbell Bench Press",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::MidChest,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Bench, Equipment::Rack],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["all_pec_regions", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("flat-dumbbell-press"),
        name: "Flat Dumbbell Press",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::MidChest,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["mid_pec", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("seated-cable-fly-mid"),
        name: "Seated Cable Fly (Mid Position)",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::MidChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["mid_pec"],
    },
    Exercise {
        id: ExerciseID::new("pec-deck-machine"),
        name: "Pec Deck Machine",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::MidChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["mid_pec"],
    },
    Exercise {
        id: ExerciseID::new("cable-crossover-mid"),
        name: "Cable Crossover (Mid Height)",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::MidChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["mid_pec"],
    },
    Exercise {
        id: ExerciseID::new("flat-dumbbell-fly"),
        name: "Flat Dumbbell Fly",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::MidChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 60,
        targets: &["mid_pec"],
    },
    Exercise {
        id: ExerciseID::new("push-ups-standard"),
        name: "Push-Ups (Standard)",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::MidChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["mid_pec", "triceps", "anterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("deficit-push-ups"),
        name: "Deficit Push-Ups",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::MidChest,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Bodyweight, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["mid_pec", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("chest-dips"),
        name: "Chest Dips",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::LowerChest,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["lower_pec", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("weighted-dips"),
        name: "Weighted Dips",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::LowerChest,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["lower_pec", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("decline-barbell-bench-press"),
        name: "Decline Barbell Bench Press",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::LowerChest,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Bench, Equipment::Rack],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["lower_pec", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("decline-dumbbell-press"),
        name: "Decline Dumbbell Press",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::LowerChest,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["lower_pec", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("high-to-low-cable-fly"),
        name: "High-to-Low Cable Fly",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::LowerChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["lower_pec"],
    },
    Exercise {
        id: ExerciseID::new("decline-push-ups"),
        name: "Decline Push-Ups",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::LowerChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Bodyweight, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["lower_pec", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("decline-dumbbell-fly"),
        name: "Decline Dumbbell Fly",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::LowerChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["lower_pec"],
    },
    Exercise {
        id: ExerciseID::new("dip-machine-assisted"),
        name: "Dip Machine (Assisted)",
        muscle_group: MuscleGroup::Chest,
        sub_region: SubRegion::LowerChest,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["lower_pec", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("preacher-curl"),
        name: "Preacher Curl (45°)",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsShortHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["biceps_short_head"],
    },
    Exercise {
        id: ExerciseID::new("concentration-curl"),
        name: "Concentration Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsShortHead,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_short_head", "overall_biceps"],
    },
    Exercise {
        id: ExerciseID::new("wide-grip-barbell-curl"),
        name: "Wide-Grip Barbell Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsShortHead,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_short_head"],
    },
    Exercise {
        id: ExerciseID::new("wide-grip-cable-curl"),
        name: "Wide-Grip Cable Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsShortHead,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_short_head"],
    },
    Exercise {
        id: ExerciseID::new("spider-curl"),
        name: "Spider Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsShortHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_short_head"],
    },
    Exercise {
        id: ExerciseID::new("ez-bar-curl-wide"),
        name: "EZ Bar Curl (Wide Grip)",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsShortHead,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::EzBar],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_short_head"],
    },
    Exercise {
        id: ExerciseID::new("machine-preacher-curl"),
        name: "Machine Preacher Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsShortHead,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_short_head"],
    },
    Exercise {
        id: ExerciseID::new("no-money-curl"),
        name: "No Money Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsShortHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_short_head"],
    },
    Exercise {
        id: ExerciseID::new("bayesian-cable-curl"),
        name: "Bayesian Cable Curl (Face Away)",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsLongHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["biceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("incline-dumbbell-curl"),
        name: "Incline Dumbbell Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsLongHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 60,
        targets: &["biceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("drag-curl"),
        name: "Drag Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsLongHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Dumbbell],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("hammer-curl"),
        name: "Hammer Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsLongHead,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_long_head", "brachialis"],
    },
    Exercise {
        id: ExerciseID::new("chin-up"),
        name: "Chin-Up",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsLongHead,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::PullUpBar],
        mechanic: Mechanic::Compound,
        tier: Tier::B,
        rest_seconds: 120,
        targets: &["biceps_long_head", "lats"],
    },
    Exercise {
        id: ExerciseID::new("lying-flat-bench-curl"),
        name: "Lying Flat Bench Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsLongHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("narrow-grip-ez-bar-curl"),
        name: "Narrow-Grip EZ Bar Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsLongHead,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::EzBar],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("overhead-cable-curl"),
        name: "Overhead Cable Curl",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::BicepsLongHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_long_head", "biceps_peak"],
    },
    Exercise {
        id: ExerciseID::new("cable-pushdown-rope"),
        name: "Cable Pushdown (Rope)",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLateralMedial,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 60,
        targets: &["triceps_lateral", "triceps_medial"],
    },
    Exercise {
        id: ExerciseID::new("cable-pushdown-straight-bar"),
        name: "Cable Pushdown (Straight Bar)",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLateralMedial,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["triceps_lateral", "triceps_medial"],
    },
    Exercise {
        id: ExerciseID::new("reverse-grip-pushdown"),
        name: "Reverse-Grip Pushdown",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLateralMedial,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["triceps_medial"],
    },
    Exercise {
        id: ExerciseID::new("close-grip-bench-press"),
        name: "Close-Grip Bench Press",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLateralMedial,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["triceps_all", "triceps_lateral"],
    },
    Exercise {
        id: ExerciseID::new("diamond-push-ups"),
        name: "Diamond Push-Ups",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLateralMedial,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["triceps_lateral", "triceps_medial"],
    },
    Exercise {
        id: ExerciseID::new("bench-dips"),
        name: "Bench Dips",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLateralMedial,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["triceps_lateral"],
    },
    Exercise {
        id: ExerciseID::new("tricep-kickback-cable"),
        name: "Tricep Kickback (Cable)",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLateralMedial,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 60,
        targets: &["triceps_lateral", "triceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("jm-press"),
        name: "JM Press",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLateralMedial,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Barbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["triceps_lateral", "triceps_all"],
    },
    Exercise {
        id: ExerciseID::new("overhead-cable-extension-straight-bar"),
        name: "Overhead Cable Extension (Straight Bar)",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLongHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["triceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("skull-crushers"),
        name: "Skull Crushers (EZ Bar)",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLongHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::EzBar, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 90,
        targets: &["triceps_long_head", "triceps_all"],
    },
    Exercise {
        id: ExerciseID::new("dumbbell-overhead-extension"),
        name: "Dumbbell Overhead Extension",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLongHead,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["triceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("cable-overhead-extension-rope"),
        name: "Cable Overhead Extension (Rope)",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLongHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 60,
        targets: &["triceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("incline-dumbbell-kickback"),
        name: "Incline Dumbbell Kickback",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLongHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["triceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("weighted-dips-upright"),
        name: "Weighted Dips (Upright)",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLongHead,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["triceps_long_head", "triceps_all"],
    },
    Exercise {
        id: ExerciseID::new("katana-cable-extension"),
        name: "Katana Cable Extension",
        muscle_group: MuscleGroup::Arms,
        sub_region: SubRegion::TricepsLongHead,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["triceps_long_head"],
    },
    Exercise {
        id: ExerciseID::new("machine-shoulder-press"),
        name: "Machine Shoulder Press",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::FrontDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
        tier: Tier::APlus,
        rest_seconds: 120,
        targets: &["anterior_deltoid", "medial_deltoid", "triceps"],
    },
    Exercise {
        id: ExerciseID::new("seated-dumbbell-overhead-press"),
        name: "Seated Dumbbell Overhead Press",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::FrontDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["anterior_deltoid", "medial_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("standing-barbell-overhead-press"),
        name: "Standing Barbell Overhead Press",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::FrontDelt,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Barbell, Equipment::Rack],
        mechanic: Mechanic::Compound,
        tier: Tier::BPlus,
        rest_seconds: 120,
        targets: &["anterior_deltoid", "core"],
    },
    Exercise {
        id: ExerciseID::new("dumbbell-overhead-press-standing"),
        name: "Dumbbell Overhead Press (Standing)",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::FrontDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["anterior_deltoid", "medial_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("arnold-press"),
        name: "Arnold Press",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::FrontDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["anterior_deltoid", "medial_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("incline-bench-press-shoulders"),
        name: "Incline Bench Press",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::FrontDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["upper_pec", "anterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("front-raise"),
        name: "Front Raise (Dumbbell/Cable)",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::FrontDelt,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Dumbbell, Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::D,
        rest_seconds: 60,
        targets: &["anterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("push-up-shoulders"),
        name: "Push-Up",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::FrontDelt,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["anterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("single-arm-cable-lateral-raise"),
        name: "Single-Arm Cable Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::SideDelt,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::SPlus,
        rest_seconds: 60,
        targets: &["lateral_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("cable-y-raise"),
        name: "Cable Y-Raise",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::SideDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["lateral_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("behind-back-cuffed-cable-lateral-raise"),
        name: "Behind-Back Cuffed Cable Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::SideDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["lateral_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("cross-body-cable-lateral-raise"),
        name: "Cross-Body Cable Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::SideDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["lateral_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("lean-in-dumbbell-lateral-raise"),
        name: "Lean-In Dumbbell Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::SideDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 60,
        targets: &["lateral_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("standing-dumbbell-lateral-raise"),
        name: "Standing Dumbbell Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::SideDelt,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Isolation,
        tier: Tier::B,
        rest_seconds: 60,
        targets: &["lateral_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("arnold-style-side-lying-raise"),
        name: "Arnold-Style Side-Lying Raise",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::SideDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 60,
        targets: &["lateral_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("atlantis-machine-lateral-raise"),
        name: "Atlantis Standing Machine Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::SideDelt,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
        tier: Tier::APlus,
        rest_seconds: 60,
        targets: &["lateral_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("upright-row"),
        name: "Upright Row (Cable/Rope)",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::SideDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable, Equipment::Barbell],
        mechanic: Mechanic::Compound,
        tier: Tier::B,
        rest_seconds: 90,
        targets: &["lateral_deltoid", "upper_traps"],
    },
    Exercise {
        id: ExerciseID::new("45-degree-incline-row-shoulders"),
        name: "45-Degree Incline Row",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::SideDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["medial_deltoid", "posterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("reverse-cable-crossover"),
        name: "Reverse Cable Crossover",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::RearDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["posterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("reverse-pec-deck"),
        name: "Reverse Pec Deck",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::RearDelt,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["posterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("lying-incline-rear-delt-fly"),
        name: "Lying Incline Rear Delt Fly",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::RearDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["posterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("rope-face-pull"),
        name: "Rope Face Pull (Underhand)",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::RearDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 60,
        targets: &["posterior_deltoid", "external_rotators"],
    },
    Exercise {
        id: ExerciseID::new("seated-rear-lateral-raise"),
        name: "Seated Rear Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::RearDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["posterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("45-degree-incline-row-rear-delt"),
        name: "45-Degree Incline Row",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::RearDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["posterior_deltoid", "medial_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("bent-over-reverse-dumbbell-fly"),
        name: "Bent-Over Reverse Dumbbell Fly",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::RearDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Isolation,
        tier: Tier::B,
        rest_seconds: 60,
        targets: &["posterior_deltoid"],
    },
    Exercise {
        id: ExerciseID::new("chest-supported-row-rear-delt"),
        name: "Chest-Supported Row",
        muscle_group: MuscleGroup::Shoulders,
        sub_region: SubRegion::RearDelt,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["rear_deltoid", "lats"],
    },
    Exercise {
        id: ExerciseID::new("i-y-t-raises"),
        name: "I-Y-T Raises (Prone)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::UpperBack,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["middle_traps", "lower_traps", "rhomboids"],
    },
    Exercise {
        id: ExerciseID::new("face-pulls-omni"),
        name: "Face Pulls (Omni-Direction)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::UpperBack,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["middle_traps", "rear_delts", "rhomboids"],
    },
    Exercise {
        id: ExerciseID::new("bent-over-row-wide"),
        name: "Bent-Over Row (Wide Grip)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::UpperBack,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["middle_traps", "rhomboids", "lats"],
    },
    Exercise {
        id: ExerciseID::new("chest-supported-row-wide"),
        name: "Chest-Supported Row (Wide, High Pull)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::UpperBack,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Machine, Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::SPlus,
        rest_seconds: 90,
        targets: &["middle_traps", "rhomboids", "rear_delts"],
    },
    Exercise {
        id: ExerciseID::new("inverted-row"),
        name: "Inverted Row",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::UpperBack,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::PullUpBar, Equipment::Rack],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["middle_traps", "rhomboids", "lats"],
    },
    Exercise {
        id: ExerciseID::new("seated-cable-row-wide"),
        name: "Seated Cable Row (Wide Grip)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::UpperBack,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["middle_traps", "rhomboids", "lats"],
    },
    Exercise {
        id: ExerciseID::new("barbell-shrugs"),
        name: "Barbell Shrugs",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::UpperBack,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Barbell, Equipment::Dumbbell],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["upper_trapezius"],
    },
    Exercise {
        id: ExerciseID::new("cable-shrugs"),
        name: "Cable Shrugs",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::UpperBack,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["upper_trapezius", "middle_trapezius"],
    },
    Exercise {
        id: ExerciseID::new("cable-y-raise-traps"),
        name: "Cable Y-Raise",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::UpperBack,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["lower_trapezius", "serratus"],
    },
    Exercise {
        id: ExerciseID::new("reverse-pec-deck-back"),
        name: "Reverse Pec Deck",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::UpperBack,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["rear_delts", "middle_traps"],
    },
    Exercise {
        id: ExerciseID::new("pull-ups"),
        name: "Pull-Ups (Overhand)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::PullUpBar],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["upper_lats", "teres_major", "biceps"],
    },
    Exercise {
        id: ExerciseID::new("chin-ups-back"),
        name: "Chin-Ups (Underhand)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::PullUpBar],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["lats", "lower_lats", "biceps"],
    },
    Exercise {
        id: ExerciseID::new("lat-pulldown"),
        name: "Lat Pulldown (Medium Grip)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
        tier: Tier::S,
        rest_seconds: 90,
        targets: &["lats", "teres_major", "biceps"],
    },
    Exercise {
        id: ExerciseID::new("single-arm-lat-pulldown"),
        name: "Single-Arm Lat Pulldown (Kneeling)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Compound,
        tier: Tier::S,
        rest_seconds: 90,
        targets: &["lats", "teres_major"],
    },
    Exercise {
        id: ExerciseID::new("chest-supported-row-neutral"),
        name: "Chest-Supported Row (Neutral Grip)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Machine, Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::SPlus,
        rest_seconds: 90,
        targets: &["lats", "rhomboids", "teres_major"],
    },
    Exercise {
        id: ExerciseID::new("seated-cable-row-close"),
        name: "Seated Cable Row (Close Grip)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Compound,
        tier: Tier::S,
        rest_seconds: 90,
        targets: &["lats", "lower_lats", "rhomboids"],
    },
    Exercise {
        id: ExerciseID::new("single-arm-dumbbell-row"),
        name: "Single-Arm Dumbbell Row",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 90,
        targets: &["lats", "rhomboids", "rear_delts"],
    },
    Exercise {
        id: ExerciseID::new("bent-over-row-underhand"),
        name: "Bent-Over Row (Underhand)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["lats", "lower_lats", "biceps"],
    },
    Exercise {
        id: ExerciseID::new("straight-arm-pulldown"),
        name: "Straight-Arm Pulldown",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["lats"],
    },
    Exercise {
        id: ExerciseID::new("dumbbell-pullover"),
        name: "Dumbbell Pullover (Bottom-Half)",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 60,
        targets: &["lats"],
    },
    Exercise {
        id: ExerciseID::new("kroc-row"),
        name: "Kroc Row",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::Lats,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 90,
        targets: &["lats", "rhomboids", "grip"],
    },
    Exercise {
        id: ExerciseID::new("conventional-deadlift"),
        name: "Conventional Deadlift",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::LowerBack,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Compound,
        tier: Tier::C,
        rest_seconds: 180,
        targets: &["erector_spinae", "glutes", "hamstrings"],
    },
    Exercise {
        id: ExerciseID::new("romanian-deadlift-back"),
        name: "Romanian Deadlift",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::LowerBack,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Dumbbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["erector_spinae", "hamstrings", "glutes"],
    },
    Exercise {
        id: ExerciseID::new("45-degree-back-extension"),
        name: "45-Degree Back Extension",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::LowerBack,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["erector_spinae", "glutes", "hamstrings"],
    },
    Exercise {
        id: ExerciseID::new("prone-lumbar-extension"),
        name: "Prone Lumbar Extension",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::LowerBack,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Bench, Equipment::Dumbbell],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["lumbar_multifidus", "longissimus"],
    },
    Exercise {
        id: ExerciseID::new("good-mornings-back"),
        name: "Good Mornings",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::LowerBack,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["erector_spinae", "hamstrings", "glutes"],
    },
    Exercise {
        id: ExerciseID::new("superman-hold"),
        name: "Superman Hold",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::LowerBack,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["erector_spinae", "glutes", "rhomboids"],
    },
    Exercise {
        id: ExerciseID::new("bird-dog"),
        name: "Bird Dog",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::LowerBack,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["erector_spinae", "multifidus", "core"],
    },
    Exercise {
        id: ExerciseID::new("glute-bridge-back"),
        name: "Glute Bridge",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::LowerBack,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["erector_spinae", "glutes"],
    },
    Exercise {
        id: ExerciseID::new("jefferson-curl"),
        name: "Jefferson Curl",
        muscle_group: MuscleGroup::Back,
        sub_region: SubRegion::LowerBack,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["erector_spinae"],
    },
    Exercise {
        id: ExerciseID::new("barbell-back-squat"),
        name: "Barbell Back Squat",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Rack],
        mechanic: Mechanic::Compound,
        tier: Tier::S,
        rest_seconds: 180,
        targets: &["all_quad_heads", "glutes"],
    },
    Exercise {
        id: ExerciseID::new("barbell-front-squat"),
        name: "Barbell Front Squat",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Barbell, Equipment::Rack],
        mechanic: Mechanic::Compound,
        tier: Tier::S,
        rest_seconds: 180,
        targets: &["all_quad_heads", "rectus_femoris"],
    },
    Exercise {
        id: ExerciseID::new("hack-squat"),
        name: "Hack Squat",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
        tier: Tier::S,
        rest_seconds: 120,
        targets: &["all_quad_heads"],
    },
    Exercise {
        id: ExerciseID::new("pendulum-squat"),
        name: "Pendulum Squat",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
        tier: Tier::S,
        rest_seconds: 120,
        targets: &["all_quad_heads"],
    },
    Exercise {
        id: ExerciseID::new("smith-machine-squat"),
        name: "Smith Machine Squat",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
        tier: Tier::S,
        rest_seconds: 120,
        targets: &["all_quad_heads"],
    },
    Exercise {
        id: ExerciseID::new("leg-extension"),
        name: "Leg Extension",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["rectus_femoris", "vastus_lateralis", "vastus_medialis"],
    },
    Exercise {
        id: ExerciseID::new("bulgarian-split-squat"),
        name: "Bulgarian Split Squat",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 90,
        targets: &["vastus_lateralis", "vastus_medialis", "rectus_femoris"],
    },
    Exercise {
        id: ExerciseID::new("45-degree-leg-press"),
        name: "45-Degree Leg Press",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["vastus_lateralis", "vastus_medialis", "vastus_intermedius"],
    },
    Exercise {
        id: ExerciseID::new("goblet-squat"),
        name: "Goblet Squat",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["all_quad_heads"],
    },
    Exercise {
        id: ExerciseID::new("reverse-nordic-curl"),
        name: "Reverse Nordic Curl",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 90,
        targets: &["all_quad_heads", "rectus_femoris"],
    },
    Exercise {
        id: ExerciseID::new("sissy-squat"),
        name: "Sissy Squat",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Cable, Equipment::Bodyweight],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["rectus_femoris", "vastus_medialis"],
    },
    Exercise {
        id: ExerciseID::new("walking-lunges-short"),
        name: "Walking Lunges (Short Steps)",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Quadriceps,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Barbell],
        mechanic: Mechanic::Compound,
        tier: Tier::B,
        rest_seconds: 90,
        targets: &["quadriceps"],
    },
    Exercise {
        id: ExerciseID::new("seated-leg-curl"),
        name: "Seated Leg Curl",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Hamstrings,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["biceps_femoris", "semitendinosus", "semimembranosus"],
    },
    Exercise {
        id: ExerciseID::new("romanian-deadlift"),
        name: "Romanian Deadlift",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Hamstrings,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Dumbbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["biceps_femoris", "semitendinosus", "semimembranosus"],
    },
    Exercise {
        id: ExerciseID::new("nordic-hamstring-curl"),
        name: "Nordic Hamstring Curl",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Hamstrings,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["biceps_femoris", "semitendinosus"],
    },
    Exercise {
        id: ExerciseID::new("glute-ham-raise"),
        name: "Glute-Ham Raise",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Hamstrings,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["biceps_femoris", "semitendinosus", "glutes"],
    },
    Exercise {
        id: ExerciseID::new("lying-leg-curl"),
        name: "Lying/Prone Leg Curl",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Hamstrings,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["biceps_femoris", "semitendinosus"],
    },
    Exercise {
        id: ExerciseID::new("stiff-leg-deadlift"),
        name: "Stiff-Leg Deadlift",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Hamstrings,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Dumbbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 120,
        targets: &["all_hamstring_muscles"],
    },
    Exercise {
        id: ExerciseID::new("single-leg-rdl"),
        name: "Single-Leg RDL",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Hamstrings,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["hamstrings", "glute_medius"],
    },
    Exercise {
        id: ExerciseID::new("stability-ball-hamstring-curl"),
        name: "Stability Ball Hamstring Curl",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Hamstrings,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["semitendinosus", "biceps_femoris"],
    },
    Exercise {
        id: ExerciseID::new("good-mornings"),
        name: "Good Mornings",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Hamstrings,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Compound,
        tier: Tier::B,
        rest_seconds: 120,
        targets: &["biceps_femoris", "semitendinosus", "erectors"],
    },
    Exercise {
        id: ExerciseID::new("barbell-hip-thrust"),
        name: "Barbell Hip Thrust",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 120,
        targets: &["gluteus_maximus"],
    },
    Exercise {
        id: ExerciseID::new("walking-lunges-long"),
        name: "Walking Lunges (Long Steps)",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Barbell],
        mechanic: Mechanic::Compound,
        tier: Tier::S,
        rest_seconds: 90,
        targets: &["gluteus_maximus", "gluteus_medius"],
    },
    Exercise {
        id: ExerciseID::new("machine-hip-abduction"),
        name: "Machine Hip Abduction",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
        tier: Tier::S,
        rest_seconds: 60,
        targets: &["gluteus_medius", "gluteus_minimus"],
    },
    Exercise {
        id: ExerciseID::new("step-ups"),
        name: "Step-Ups",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Bench, Equipment::Dumbbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["gluteus_maximus", "gluteus_medius", "gluteus_minimus"],
    },
    Exercise {
        id: ExerciseID::new("deep-back-squat"),
        name: "Deep Back Squat",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Barbell, Equipment::Rack],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 180,
        targets: &["gluteus_maximus", "gluteus_medius", "adductors"],
    },
    Exercise {
        id: ExerciseID::new("cable-kickback"),
        name: "Cable Kickback",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
        tier: Tier::A,
        rest_seconds: 60,
        targets: &["gluteus_maximus", "gluteus_medius"],
    },
    Exercise {
        id: ExerciseID::new("bulgarian-split-squat-glutes"),
        name: "Bulgarian Split Squat",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Hard,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["gluteus_maximus", "gluteus_medius"],
    },
    Exercise {
        id: ExerciseID::new("machine-hip-thrust"),
        name: "Machine Hip Thrust",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
        tier: Tier::A,
        rest_seconds: 90,
        targets: &["gluteus_maximus"],
    },
    Exercise {
        id: ExerciseID::new("single-leg-hip-thrust"),
        name: "Single-Leg Hip Thrust",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Bench],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["gluteus_maximus", "gluteus_medius", "gluteus_minimus"],
    },
    Exercise {
        id: ExerciseID::new("glute-bridge"),
        name: "Glute Bridge",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Bodyweight, Equipment::Dumbbell],
        mechanic: Mechanic::Compound,
        tier: Tier::B,
        rest_seconds: 60,
        targets: &["gluteus_maximus"],
    },
    Exercise {
        id: ExerciseID::new("cable-pull-through"),
        name: "Cable Pull-Through",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["gluteus_maximus", "hamstrings"],
    },
    Exercise {
        id: ExerciseID::new("side-lying-hip-abduction"),
        name: "Side-Lying Hip Abduction",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["gluteus_medius", "gluteus_minimus"],
    },
    Exercise {
        id: ExerciseID::new("lateral-band-walks"),
        name: "Lateral Band Walks",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Easy,
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Isolation,
        tier: Tier::Untiered,
        rest_seconds: 60,
        targets: &["gluteus_medius", "gluteus_minimus"],
    },
    Exercise {
        id: ExerciseID::new("reverse-lunge"),
        name: "Reverse Lunge",
        muscle_group: MuscleGroup::Legs,
        sub_region: SubRegion::Glutes,
        difficulty: Difficulty::Medium,
        equipment: &[Equipment::Dumbbell, Equipment::Barbell],
        mechanic: Mechanic::Compound,
        tier: Tier::Untiered,
        rest_seconds: 90,
        targets: &["gluteus_maximus", "quads", "hamstrings"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Property;

    #[test]
    fn test_builtin() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 147);
        assert_eq!(catalog.exercises(), EXERCISES);
    }

    #[test]
    fn test_exercises() {
        for exercise in EXERCISES {
            let id = *exercise.id;
            let name = exercise.name;

            assert!(
                id.split('-')
                    .all(|part| !part.is_empty()
                        && part
                            .chars()
                            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())),
                "invalid id {id}"
            );
            assert!(!name.is_empty());
            assert!(!exercise.targets.is_empty(), "no targets for {id}");
            assert!(
                [60, 90, 120, 180].contains(&exercise.rest_seconds),
                "unexpected rest for {id}"
            );

            if name.contains("Barbell") {
                assert!(exercise.equipment.contains(&Equipment::Barbell));
            }
            if name.contains("EZ") {
                assert!(exercise.equipment.contains(&Equipment::EzBar));
            }
            if name.contains("Bench") {
                assert!(exercise.equipment.contains(&Equipment::Bench));
            }
            if name.contains("Cable") {
                assert!(exercise.equipment.contains(&Equipment::Cable));
            }
            if name.contains("Dumbbell") {
                assert!(exercise.equipment.contains(&Equipment::Dumbbell));
            }
            if name.contains("Machine") {
                assert!(exercise.equipment.contains(&Equipment::Machine));
            }
        }
    }

    #[test]
    fn test_exercises_duplicate_ids() {
        let mut ids = HashSet::new();

        for exercise in EXERCISES {
            let id = *exercise.id;
            assert!(!ids.contains(id), "duplicate id {id}");
            ids.insert(id);
        }
    }

    #[test]
    fn test_exercises_duplicate_equipment() {
        for exercise in EXERCISES {
            let equipment: HashSet<Equipment> = exercise.equipment.iter().copied().collect();
            assert_eq!(
                exercise.equipment.len(),
                equipment.len(),
                "duplicate equipment entries for \"{}\"",
                exercise.id
            );
        }
    }

    #[test]
    fn test_sub_region_coverage() {
        let catalog = Catalog::builtin().unwrap();
        for sub_region in SubRegion::iter() {
            assert!(
                catalog.by_sub_region(*sub_region).count() >= 7,
                "too few exercises for {sub_region}"
            );
        }
        for muscle_group in MuscleGroup::iter() {
            assert!(
                catalog.by_muscle_group(*muscle_group).any(Exercise::is_top_tier),
                "no top tier exercise for {muscle_group}"
            );
        }
    }

    #[test]
    fn test_new_duplicate_exercise() {
        let exercise = EXERCISES[0].clone();
        assert_eq!(
            Catalog::new(vec![exercise.clone(), exercise.clone()]).err(),
            Some(CatalogError::DuplicateExercise(exercise.id))
        );
    }

    #[test]
    fn test_new_sub_region_mismatch() {
        let exercise = Exercise {
            muscle_group: MuscleGroup::Back,
            ..EXERCISES[0].clone()
        };
        assert_eq!(
            Catalog::new(vec![exercise.clone()]).err(),
            Some(CatalogError::SubRegionMismatch {
                id: exercise.id,
                sub_region: SubRegion::UpperChest,
                muscle_group: MuscleGroup::Back,
            })
        );
    }

    #[test]
    fn test_new_no_equipment() {
        let exercise = Exercise {
            equipment: &[],
            ..EXERCISES[0].clone()
        };
        assert_eq!(
            Catalog::new(vec![exercise.clone()]).err(),
            Some(CatalogError::NoEquipment(exercise.id))
        );
    }

    #[rstest]
    #[case("incline-barbell-bench-press", Some("Incline Barbell Bench Press"))]
    #[case("pull-ups", Some("Pull-Ups (Overhand)"))]
    #[case("unknown", None)]
    fn test_get(#[case] id: &str, #[case] expected: Option<&str>) {
        assert_eq!(Catalog::builtin().unwrap().get(id).map(|e| e.name), expected);
    }

    #[test]
    fn test_substitutes() {
        let catalog = Catalog::builtin().unwrap();
        let original = catalog.get("incline-dumbbell-press").unwrap();
        let substitutes = catalog.substitutes("incline-dumbbell-press", None);

        assert!(!substitutes.is_empty());
        for substitute in &substitutes {
            assert!(substitute.id != original.id);
            assert_eq!(substitute.sub_region, original.sub_region);
            assert_eq!(substitute.mechanic, original.mechanic);
        }
        assert!(
            substitutes
                .windows(2)
                .all(|w| w[0].cmp_priority(w[1]).is_le())
        );

        let equipment = BTreeSet::from([Equipment::Bodyweight, Equipment::Dumbbell, Equipment::Bench]);
        for substitute in catalog.substitutes("incline-dumbbell-press", Some(&equipment)) {
            assert!(substitute.is_available_with(&equipment));
        }

        assert!(catalog.substitutes("unknown", None).is_empty());
    }
}
