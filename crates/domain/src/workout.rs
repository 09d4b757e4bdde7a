use std::{
    cmp::Reverse,
    collections::{BTreeMap, BTreeSet},
};

use log::debug;
use serde::Serialize;

use crate::{
    DayTemplate, Exercise, ExerciseID, ExerciseSelector, Experience, Gender, GoalParameters,
    MIN_EXERCISES_PER_DAY, Mechanic, MovementPattern, MuscleGroup, SplitType, SubRegion, Tier,
    Variant, VariantGroup, Warning,
};

const FULL_BODY_MUSCLE_GROUPS: usize = 4;
const FULL_BODY_EXERCISES_PER_MUSCLE_GROUP: usize = 2;
const MAX_ISOLATION_REST_SECONDS: u32 = 90;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    pub id: ExerciseID,
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub sub_region: SubRegion,
    pub sets: u32,
    pub reps: &'static str,
    pub rest_seconds: u32,
    #[serde(rename = "type")]
    pub mechanic: Mechanic,
    pub tier: Tier,
    pub targets: &'static [&'static str],
}

impl PlannedExercise {
    #[must_use]
    pub fn new(exercise: &Exercise, sets: u32, reps: &'static str) -> Self {
        let rest_seconds = match exercise.mechanic {
            Mechanic::Compound => exercise.rest_seconds,
            Mechanic::Isolation => exercise.rest_seconds.min(MAX_ISOLATION_REST_SECONDS),
        };
        Self {
            id: exercise.id,
            name: exercise.name,
            muscle_group: exercise.muscle_group,
            sub_region: exercise.sub_region,
            sets,
            reps,
            rest_seconds,
            mechanic: exercise.mechanic,
            tier: exercise.tier,
            targets: exercise.targets,
        }
    }

    #[must_use]
    pub fn is_top_tier(&self) -> bool {
        self.tier.is_top()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub day: &'static str,
    pub variant: Option<Variant>,
    #[serde(skip)]
    pub variant_group: Option<VariantGroup>,
    pub split_type: SplitType,
    pub muscle_groups: &'static [MuscleGroup],
    pub exercises: Vec<PlannedExercise>,
    pub warnings: Vec<Warning>,
    pub validation_warnings: Vec<Warning>,
}

impl WorkoutDay {
    /// Identifiers of the exercises that rotate between variants.
    #[must_use]
    pub fn lower_tier_ids(&self) -> BTreeSet<ExerciseID> {
        self.exercises
            .iter()
            .filter(|e| !e.is_top_tier())
            .map(|e| e.id)
            .collect()
    }

    #[must_use]
    pub fn top_tier_ids(&self) -> BTreeSet<ExerciseID> {
        self.exercises
            .iter()
            .filter(|e| e.is_top_tier())
            .map(|e| e.id)
            .collect()
    }
}

/// What a day inherits from the variants of its group that were built before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantConstraints {
    /// Lower tier exercises used by the other variants.
    pub excluded: BTreeSet<ExerciseID>,
    /// Top tier exercises of the first variant. Later variants take no other top tier
    /// exercises when filling up to the minimum.
    pub anchors: Option<BTreeSet<ExerciseID>>,
}

/// Turns a day template into a bounded, ordered list of exercises with sets, reps and rest.
pub struct WorkoutDayBuilder<'s, 'a> {
    selector: &'s ExerciseSelector<'a>,
    goal: GoalParameters,
    experience: Experience,
    gender: Gender,
}

impl<'s, 'a> WorkoutDayBuilder<'s, 'a> {
    #[must_use]
    pub fn new(
        selector: &'s ExerciseSelector<'a>,
        goal: GoalParameters,
        experience: Experience,
        gender: Gender,
    ) -> Self {
        Self {
            selector,
            goal,
            experience,
            gender,
        }
    }

    /// Lower tier exercises excluded by `constraints` are avoided unless the day would otherwise
    /// stay below the minimum number of exercises.
    #[must_use]
    pub fn build_day(&self, day: &DayTemplate, constraints: &VariantConstraints) -> WorkoutDay {
        let targets = day.split_type.target_sub_regions(self.gender, day.muscle_groups);
        let per_muscle_group = self.selector.config().exercises_per_muscle_group;
        let full_body = day.muscle_groups.len() >= FULL_BODY_MUSCLE_GROUPS;

        let mut used_patterns = BTreeSet::new();
        let mut selected = vec![];
        let mut warnings = vec![];

        for muscle_group in day.muscle_groups {
            let count = scaled_count(
                per_muscle_group,
                self.gender.volume_multiplier(*muscle_group),
            );
            let selection = self.selector.select_for_muscle_group(
                *muscle_group,
                count,
                used_patterns,
                targets.get(muscle_group).map(Vec::as_slice),
                &constraints.excluded,
            );
            used_patterns = selection.used_patterns;
            warnings.extend(selection.warnings);

            let mut exercises = selection.exercises;
            if full_body {
                exercises.truncate(FULL_BODY_EXERCISES_PER_MUSCLE_GROUP);
            }
            selected.extend(exercises);
        }

        let mut selected = compounds_first(selected);

        let max = self.gender.max_exercises(day.split_type);
        if selected.len() > max {
            selected = clamp(selected, max);
        }

        if selected.len() < MIN_EXERCISES_PER_DAY {
            warnings.extend(self.fill_to_minimum(
                day,
                &targets,
                &mut selected,
                &mut used_patterns,
                constraints,
            ));
            selected = compounds_first(selected);
        }

        debug!("built {} with {} exercises", day.name, selected.len());

        let sets = self.experience.sets(&self.goal);
        WorkoutDay {
            day: day.name,
            variant: day.variant.map(|v| v.label),
            variant_group: day.variant.map(|v| v.group),
            split_type: day.split_type,
            muscle_groups: day.muscle_groups,
            exercises: selected
                .into_iter()
                .map(|e| PlannedExercise::new(e, sets, self.goal.reps))
                .collect(),
            warnings,
            validation_warnings: vec![],
        }
    }

    fn fill_to_minimum(
        &self,
        day: &DayTemplate,
        targets: &BTreeMap<MuscleGroup, Vec<SubRegion>>,
        selected: &mut Vec<&'a Exercise>,
        used_patterns: &mut BTreeSet<MovementPattern>,
        constraints: &VariantConstraints,
    ) -> Vec<Warning> {
        let mut sub_regions = day
            .muscle_groups
            .iter()
            .filter_map(|m| targets.get(m))
            .flatten()
            .copied()
            .collect::<Vec<_>>();
        if day.split_type == SplitType::Legs {
            if let Some(i) = sub_regions.iter().position(|s| *s == SubRegion::Glutes) {
                let glutes = sub_regions.remove(i);
                sub_regions.insert(0, glutes);
            }
        }

        let scanned = sub_regions
            .iter()
            .flat_map(|s| self.selector.candidates(*s))
            .copied();
        let candidates: Vec<&'a Exercise> = match &constraints.anchors {
            None => scanned.collect(),
            Some(anchors) => {
                let (mut candidates, lower_tier): (Vec<_>, Vec<_>) = scanned
                    .filter(|e| !e.is_top_tier() || anchors.contains(&e.id))
                    .partition(|e| e.is_top_tier());
                candidates.extend(lower_tier);
                candidates
            }
        };

        let mut warnings = vec![];

        for relax_exclusion in [false, true] {
            let mut relaxed = false;

            for &exercise in &candidates {
                if selected.len() >= MIN_EXERCISES_PER_DAY {
                    break;
                }
                let pattern = self.selector.pattern_of(exercise);
                if selected.iter().any(|e| e.id == exercise.id)
                    || pattern.is_some_and(|p| used_patterns.contains(&p))
                {
                    continue;
                }
                if constraints.excluded.contains(&exercise.id) && !exercise.is_top_tier() {
                    if !relax_exclusion {
                        continue;
                    }
                    relaxed = true;
                }
                selected.push(exercise);
                if let Some(pattern) = pattern {
                    used_patterns.insert(pattern);
                }
            }

            if relaxed {
                debug!("relaxed variant exclusion for {}", day.name);
                warnings.push(Warning::RelaxedVariantExclusion);
            }
            if selected.len() >= MIN_EXERCISES_PER_DAY {
                break;
            }
        }

        if selected.len() < MIN_EXERCISES_PER_DAY {
            warnings.push(Warning::BelowMinimum(selected.len()));
        }

        warnings
    }
}

fn scaled_count(count: usize, multiplier: f64) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let scaled = (count as f64 * multiplier).round() as usize;
    scaled.max(1)
}

fn compounds_first(exercises: Vec<&Exercise>) -> Vec<&Exercise> {
    let (mut compounds, isolations): (Vec<_>, Vec<_>) =
        exercises.into_iter().partition(|e| e.is_compound());
    compounds.extend(isolations);
    compounds
}

/// Keeps `max` exercises: top tier ones first, then lower tier compounds, then lower tier
/// isolations, each by tier. Ties keep the earlier exercise. The relative order is preserved.
fn clamp(exercises: Vec<&Exercise>, max: usize) -> Vec<&Exercise> {
    let mut ranked = exercises.iter().enumerate().collect::<Vec<_>>();
    ranked.sort_by_key(|(_, e)| (!e.is_top_tier(), !e.is_compound(), Reverse(e.tier)));
    let kept = ranked
        .into_iter()
        .take(max)
        .map(|(i, _)| i)
        .collect::<BTreeSet<_>>();

    exercises
        .into_iter()
        .enumerate()
        .filter(|(i, _)| kept.contains(i))
        .map(|(_, e)| e)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::{Catalog, Equipment, Goal, MovementPatternIndex, SplitTemplate};

    struct Data {
        catalog: Catalog,
        patterns: MovementPatternIndex,
    }

    #[fixture]
    fn data() -> Data {
        let catalog = Catalog::builtin().unwrap();
        let patterns = MovementPatternIndex::builtin(&catalog).unwrap();
        Data { catalog, patterns }
    }

    fn full_gym() -> BTreeSet<Equipment> {
        BTreeSet::from([
            Equipment::Bodyweight,
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Cable,
            Equipment::Bench,
            Equipment::Rack,
            Equipment::Machine,
        ])
    }

    fn ids(day: &WorkoutDay) -> Vec<&'static str> {
        day.exercises.iter().map(|e| *e.id).collect()
    }

    fn template(days: u8, index: usize) -> &'static DayTemplate {
        &SplitTemplate::for_days(days).unwrap().days[index]
    }

    #[rstest]
    #[case(2, 1.0, 2)]
    #[case(2, 0.5, 1)]
    #[case(3, 0.5, 2)]
    #[case(4, 0.5, 2)]
    #[case(3, 2.0, 6)]
    #[case(1, 0.4, 1)]
    fn test_scaled_count(#[case] count: usize, #[case] multiplier: f64, #[case] expected: usize) {
        assert_eq!(scaled_count(count, multiplier), expected);
    }

    #[rstest]
    fn test_planned_exercise_rest(data: Data) {
        let nordic = data.catalog.get("nordic-hamstring-curl").unwrap();
        assert_eq!(nordic.mechanic, Mechanic::Isolation);
        assert_eq!(nordic.rest_seconds, 120);
        assert_eq!(PlannedExercise::new(nordic, 3, "8-12").rest_seconds, 90);

        let squat = data.catalog.get("barbell-back-squat").unwrap();
        assert_eq!(
            PlannedExercise::new(squat, 3, "8-12").rest_seconds,
            squat.rest_seconds
        );
    }

    #[rstest]
    fn test_compounds_first(data: Data) {
        let exercises = [
            "leg-extension",
            "barbell-back-squat",
            "nordic-hamstring-curl",
            "hack-squat",
        ]
        .iter()
        .map(|id| data.catalog.get(id).unwrap())
        .collect::<Vec<_>>();

        assert_eq!(
            compounds_first(exercises)
                .iter()
                .map(|e| *e.id)
                .collect::<Vec<_>>(),
            vec![
                "barbell-back-squat",
                "hack-squat",
                "leg-extension",
                "nordic-hamstring-curl"
            ]
        );
    }

    #[rstest]
    #[case(5, &["barbell-back-squat", "45-degree-leg-press", "walking-lunges-short", "leg-extension", "nordic-hamstring-curl"])]
    #[case(4, &["barbell-back-squat", "45-degree-leg-press", "walking-lunges-short", "leg-extension"])]
    #[case(3, &["barbell-back-squat", "45-degree-leg-press", "leg-extension"])]
    #[case(2, &["barbell-back-squat", "leg-extension"])]
    #[case(1, &["barbell-back-squat"])]
    fn test_clamp(data: Data, #[case] max: usize, #[case] expected: &[&str]) {
        let exercises = [
            "barbell-back-squat",
            "45-degree-leg-press",
            "walking-lunges-short",
            "leg-extension",
            "nordic-hamstring-curl",
        ]
        .iter()
        .map(|id| data.catalog.get(id).unwrap())
        .collect::<Vec<_>>();

        assert_eq!(
            clamp(exercises, max).iter().map(|e| *e.id).collect::<Vec<_>>(),
            expected
        );
    }

    #[rstest]
    fn test_clamp_keeps_earlier_on_ties(data: Data) {
        let exercises = ["machine-hip-abduction", "leg-extension"]
            .iter()
            .map(|id| data.catalog.get(id).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(
            clamp(exercises, 1).iter().map(|e| *e.id).collect::<Vec<_>>(),
            vec!["machine-hip-abduction"]
        );
    }

    #[rstest]
    #[case(Gender::Male, Experience::Intermediate)]
    #[case(Gender::Male, Experience::Beginner)]
    #[case(Gender::Female, Experience::Advanced)]
    fn test_build_day(data: Data, #[case] gender: Gender, #[case] experience: Experience) {
        let equipment = full_gym();
        let selector =
            ExerciseSelector::new(&data.catalog, &data.patterns, &equipment, experience);
        let builder =
            WorkoutDayBuilder::new(&selector, Goal::Hypertrophy.parameters(), experience, gender);

        for days in 3..=6 {
            for template in SplitTemplate::for_days(days).unwrap().days {
                let day = builder.build_day(template, &VariantConstraints::default());

                assert_eq!(day.day, template.name);
                assert!(
                    (MIN_EXERCISES_PER_DAY..=gender.max_exercises(template.split_type))
                        .contains(&day.exercises.len()),
                    "{} has {} exercises",
                    day.day,
                    day.exercises.len()
                );
                assert!(
                    day.exercises
                        .iter()
                        .skip_while(|e| e.mechanic == Mechanic::Compound)
                        .all(|e| e.mechanic == Mechanic::Isolation)
                );

                let mut patterns = BTreeSet::new();
                for exercise in &day.exercises {
                    assert_eq!(exercise.reps, "8-12");
                    assert_eq!(exercise.sets, experience.sets(&Goal::Hypertrophy.parameters()));
                    if exercise.mechanic == Mechanic::Isolation {
                        assert!(exercise.rest_seconds <= 90);
                    }
                    if let Some(pattern) = data.patterns.pattern_of(&exercise.id) {
                        assert!(patterns.insert(pattern), "{} repeats {pattern}", day.day);
                    }
                }
            }
        }
    }

    #[rstest]
    fn test_build_day_full_body_caps_muscle_groups(data: Data) {
        let equipment = full_gym();
        let selector = ExerciseSelector::new(
            &data.catalog,
            &data.patterns,
            &equipment,
            Experience::Advanced,
        );
        let builder = WorkoutDayBuilder::new(
            &selector,
            Goal::Strength.parameters(),
            Experience::Advanced,
            Gender::Male,
        );

        let day = builder.build_day(template(3, 0), &VariantConstraints::default());

        for muscle_group in day.muscle_groups {
            assert!(
                day.exercises
                    .iter()
                    .filter(|e| e.muscle_group == *muscle_group)
                    .count()
                    <= 2
            );
        }
        assert_eq!(day.variant, Some(Variant::A));
        assert_eq!(day.variant_group, Some(VariantGroup::FullBody));
        assert!(day.exercises.iter().all(|e| e.sets == 5 && e.reps == "3-6"));
    }

    #[rstest]
    fn test_build_day_female_push_limit(data: Data) {
        let equipment = full_gym();
        let selector = ExerciseSelector::new(
            &data.catalog,
            &data.patterns,
            &equipment,
            Experience::Advanced,
        );
        let builder = WorkoutDayBuilder::new(
            &selector,
            Goal::Hypertrophy.parameters(),
            Experience::Advanced,
            Gender::Female,
        );

        let day = builder.build_day(template(6, 0), &VariantConstraints::default());

        assert!(day.exercises.len() <= 6);
    }

    #[rstest]
    fn test_build_day_excludes_lower_tier(data: Data) {
        let equipment = full_gym();
        let selector = ExerciseSelector::new(
            &data.catalog,
            &data.patterns,
            &equipment,
            Experience::Intermediate,
        );
        let builder = WorkoutDayBuilder::new(
            &selector,
            Goal::Hypertrophy.parameters(),
            Experience::Intermediate,
            Gender::Male,
        );

        let first = builder.build_day(template(6, 0), &VariantConstraints::default());
        let constraints = VariantConstraints {
            excluded: first.lower_tier_ids(),
            anchors: Some(first.top_tier_ids()),
        };
        let second = builder.build_day(template(6, 3), &constraints);

        assert!(!constraints.excluded.is_empty());
        assert!(second.lower_tier_ids().is_disjoint(&constraints.excluded));
        assert_eq!(second.top_tier_ids(), first.top_tier_ids());
        assert_eq!(second.warnings, first.warnings);
    }

    #[rstest]
    fn test_build_day_fills_by_sub_region(data: Data) {
        let equipment = BTreeSet::from([
            Equipment::Bodyweight,
            Equipment::Dumbbell,
            Equipment::Cable,
            Equipment::Machine,
            Equipment::EzBar,
        ]);
        let selector = ExerciseSelector::new(
            &data.catalog,
            &data.patterns,
            &equipment,
            Experience::Beginner,
        );
        let builder = WorkoutDayBuilder::new(
            &selector,
            Goal::Hypertrophy.parameters(),
            Experience::Beginner,
            Gender::Female,
        );

        let first = builder.build_day(template(6, 0), &VariantConstraints::default());
        let second = builder.build_day(
            template(6, 3),
            &VariantConstraints {
                excluded: first.lower_tier_ids(),
                anchors: Some(first.top_tier_ids()),
            },
        );

        assert_eq!(
            ids(&first),
            vec![
                "machine-chest-press",
                "single-arm-cable-lateral-raise",
                "overhead-cable-extension-straight-bar",
                "low-to-high-cable-fly",
            ]
        );
        assert_eq!(
            ids(&second),
            vec![
                "machine-chest-press",
                "single-arm-cable-lateral-raise",
                "overhead-cable-extension-straight-bar",
                "cable-crossover-mid",
            ]
        );
        assert_eq!(first.warnings, vec![]);
        assert_eq!(second.warnings, vec![]);
    }

    #[rstest]
    fn test_build_day_fills_with_anchors_only(data: Data) {
        let equipment = full_gym();
        let selector = ExerciseSelector::new(
            &data.catalog,
            &data.patterns,
            &equipment,
            Experience::Beginner,
        );
        let builder = WorkoutDayBuilder::new(
            &selector,
            Goal::Hypertrophy.parameters(),
            Experience::Beginner,
            Gender::Male,
        );

        let first = builder.build_day(template(6, 2), &VariantConstraints::default());
        let excluded = first.lower_tier_ids();
        let second = builder.build_day(
            template(6, 5),
            &VariantConstraints {
                excluded: excluded.clone(),
                anchors: Some(first.top_tier_ids()),
            },
        );
        let unanchored = builder.build_day(
            template(6, 5),
            &VariantConstraints {
                excluded,
                anchors: None,
            },
        );

        assert_eq!(
            ids(&first),
            vec![
                "barbell-back-squat",
                "45-degree-leg-press",
                "walking-lunges-short",
                "leg-extension",
            ]
        );
        assert_eq!(
            ids(&second),
            vec![
                "barbell-back-squat",
                "good-mornings",
                "leg-extension",
                "lying-leg-curl",
            ]
        );
        assert_eq!(second.top_tier_ids(), first.top_tier_ids());
        assert!(unanchored.top_tier_ids().contains("seated-leg-curl"));
    }

    #[rstest]
    fn test_build_day_below_minimum(data: Data) {
        let equipment = BTreeSet::from([Equipment::Bodyweight, Equipment::Dumbbell, Equipment::Bench]);
        let selector = ExerciseSelector::new(
            &data.catalog,
            &data.patterns,
            &equipment,
            Experience::Beginner,
        );
        let builder = WorkoutDayBuilder::new(
            &selector,
            Goal::Hypertrophy.parameters(),
            Experience::Beginner,
            Gender::Male,
        );

        let day = builder.build_day(template(5, 2), &VariantConstraints::default());

        assert_eq!(day.exercises.len(), 2);
        assert_eq!(day.warnings, vec![Warning::BelowMinimum(2)]);
    }
}
