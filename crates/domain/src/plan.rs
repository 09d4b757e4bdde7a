use std::{
    collections::{BTreeMap, BTreeSet},
    str::FromStr,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    Catalog, Equipment, ExerciseID, ExerciseSelector, Experience, Gender, Goal,
    MovementPatternIndex, MuscleGroup, Progression, SplitTemplate, ValidationError, Variant,
    VariantConstraints, VariantGroup, Warning, WorkoutDay, WorkoutDayBuilder, WorkoutValidator,
};

pub const DEFAULT_SESSION_DURATION: u32 = 60;

/// Raw plan request as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    pub gender: String,
    pub goal: String,
    pub experience: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(alias = "days_per_week")]
    pub days_per_week: i64,
    #[serde(
        alias = "session_duration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub session_duration: Option<i64>,
}

/// Validated plan request. Only obtainable from a [`PlanInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    gender: Gender,
    goal: Goal,
    experience: Experience,
    equipment: BTreeSet<Equipment>,
    days_per_week: u8,
    session_duration: u32,
    split: &'static SplitTemplate,
}

impl PlanRequest {
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn goal(&self) -> Goal {
        self.goal
    }

    #[must_use]
    pub fn experience(&self) -> Experience {
        self.experience
    }

    /// Always contains bodyweight.
    #[must_use]
    pub fn equipment(&self) -> &BTreeSet<Equipment> {
        &self.equipment
    }

    #[must_use]
    pub fn days_per_week(&self) -> u8 {
        self.days_per_week
    }

    #[must_use]
    pub fn session_duration(&self) -> u32 {
        self.session_duration
    }

    #[must_use]
    pub fn split(&self) -> &'static SplitTemplate {
        self.split
    }
}

impl TryFrom<&PlanInput> for PlanRequest {
    type Error = ValidationError;

    fn try_from(input: &PlanInput) -> Result<Self, Self::Error> {
        let gender = Gender::from_str(&input.gender)
            .map_err(|_| ValidationError::Gender(input.gender.clone()))?;
        let goal =
            Goal::from_str(&input.goal).map_err(|_| ValidationError::Goal(input.goal.clone()))?;
        let experience = Experience::from_str(&input.experience)
            .map_err(|_| ValidationError::Experience(input.experience.clone()))?;

        let mut equipment = BTreeSet::from([Equipment::Bodyweight]);
        let mut invalid = vec![];
        for name in &input.equipment {
            match Equipment::from_str(name) {
                Ok(e) => {
                    equipment.insert(e);
                }
                Err(_) => {
                    if !invalid.contains(name) {
                        invalid.push(name.clone());
                    }
                }
            }
        }
        if !invalid.is_empty() {
            return Err(ValidationError::Equipment(invalid));
        }

        let (days_per_week, split) = u8::try_from(input.days_per_week)
            .ok()
            .and_then(|d| SplitTemplate::for_days(d).map(|split| (d, split)))
            .ok_or(ValidationError::DaysPerWeek(input.days_per_week))?;

        let session_duration = match input.session_duration {
            None => DEFAULT_SESSION_DURATION,
            Some(d) => u32::try_from(d)
                .ok()
                .filter(|d| (30..=120).contains(d))
                .ok_or(ValidationError::SessionDuration(d))?,
        };

        Ok(Self {
            gender,
            goal,
            experience,
            equipment,
            days_per_week,
            session_duration,
            split,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub split: SplitSummary,
    pub workouts: Vec<WorkoutDay>,
    pub progression: Progression,
    pub parameters: PlanParameters,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub name: &'static str,
    pub days: Vec<DaySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub name: &'static str,
    pub muscle_groups: &'static [MuscleGroup],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanParameters {
    pub goal: Goal,
    pub experience: Experience,
    pub days_per_week: u8,
    pub session_duration: u32,
}

/// Lower tier exercises already used by each variant of a plan and the top tier exercises
/// fixed by the first variant of each group.
#[derive(Debug, Default)]
struct VariantState {
    used: BTreeMap<(VariantGroup, Variant), BTreeSet<ExerciseID>>,
    anchors: BTreeMap<VariantGroup, BTreeSet<ExerciseID>>,
}

impl VariantState {
    fn constraints_for(&self, group: VariantGroup, label: Variant) -> VariantConstraints {
        VariantConstraints {
            excluded: self.excluded_for(group, label),
            anchors: self.anchors.get(&group).cloned(),
        }
    }

    fn excluded_for(&self, group: VariantGroup, label: Variant) -> BTreeSet<ExerciseID> {
        self.used
            .iter()
            .filter(|((g, l), _)| *g == group && *l != label)
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect()
    }

    fn record(
        &mut self,
        group: VariantGroup,
        label: Variant,
        top_tier: BTreeSet<ExerciseID>,
        lower_tier: BTreeSet<ExerciseID>,
    ) {
        self.anchors.entry(group).or_insert(top_tier);
        self.used.entry((group, label)).or_default().extend(lower_tier);
    }
}

/// Generates complete weekly plans from a catalog and its movement patterns.
pub struct Planner<'a> {
    catalog: &'a Catalog,
    patterns: &'a MovementPatternIndex,
}

impl<'a> Planner<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, patterns: &'a MovementPatternIndex) -> Self {
        Self { catalog, patterns }
    }

    pub fn suggest(&self, input: &PlanInput) -> Result<Plan, ValidationError> {
        let request = PlanRequest::try_from(input)?;
        Ok(self.plan(&request))
    }

    #[must_use]
    pub fn plan(&self, request: &PlanRequest) -> Plan {
        let split = request.split;

        let selector = ExerciseSelector::new(
            self.catalog,
            self.patterns,
            &request.equipment,
            request.experience,
        );
        let builder = WorkoutDayBuilder::new(
            &selector,
            request.goal.parameters(),
            request.experience,
            request.gender,
        );
        let validator = WorkoutValidator::new(self.patterns);

        let mut variants = VariantState::default();
        let mut workouts = vec![];

        for template in split.days {
            let constraints = template
                .variant
                .map(|v| variants.constraints_for(v.group, v.label))
                .unwrap_or_default();

            let mut day = builder.build_day(template, &constraints);

            if let Some(v) = template.variant {
                variants.record(v.group, v.label, day.top_tier_ids(), day.lower_tier_ids());
            }

            let targets = template
                .split_type
                .target_sub_regions(request.gender, template.muscle_groups);
            day.validation_warnings =
                validator.validate(&day.exercises, template.muscle_groups, &targets);

            workouts.push(day);
        }

        let warnings = workouts
            .iter()
            .flat_map(|w| w.warnings.iter().chain(&w.validation_warnings))
            .cloned()
            .collect::<Vec<_>>();

        info!(
            "generated {} with {} workouts and {} warnings",
            split.name,
            workouts.len(),
            warnings.len()
        );

        Plan {
            split: SplitSummary {
                name: split.name,
                days: split
                    .days
                    .iter()
                    .map(|d| DaySummary {
                        name: d.name,
                        muscle_groups: d.muscle_groups,
                    })
                    .collect(),
            },
            workouts,
            progression: request.goal.progression(),
            parameters: parameters(request),
            warnings,
        }
    }
}

fn parameters(request: &PlanRequest) -> PlanParameters {
    PlanParameters {
        goal: request.goal,
        experience: request.experience,
        days_per_week: request.days_per_week,
        session_duration: request.session_duration,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::{Difficulty, Property};

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

    fn input(
        gender: &str,
        experience: &str,
        equipment: &[&str],
        days_per_week: i64,
    ) -> PlanInput {
        PlanInput {
            gender: gender.to_string(),
            goal: "hypertrophy".to_string(),
            experience: experience.to_string(),
            equipment: equipment.iter().map(ToString::to_string).collect(),
            days_per_week,
            session_duration: None,
        }
    }

    const FULL_GYM: &[&str] = &["barbell", "dumbbell", "cable", "bench", "rack", "machine"];
    const ALL_EQUIPMENT: &[&str] = &[
        "barbell",
        "dumbbell",
        "cable",
        "bench",
        "rack",
        "machine",
        "pullup_bar",
        "barbell_ez",
    ];

    fn ids(day: &WorkoutDay) -> Vec<&'static str> {
        day.exercises.iter().map(|e| *e.id).collect()
    }

    #[rstest]
    #[case(
        PlanInput { gender: "other".to_string(), ..input("male", "beginner", &[], 3) },
        ValidationError::Gender("other".to_string())
    )]
    #[case(
        PlanInput { goal: "power".to_string(), ..input("male", "beginner", &[], 3) },
        ValidationError::Goal("power".to_string())
    )]
    #[case(
        input("male", "expert", &[], 3),
        ValidationError::Experience("expert".to_string())
    )]
    #[case(
        input("male", "beginner", &["dumbbell", "kettlebell", "band", "kettlebell"], 3),
        ValidationError::Equipment(vec!["kettlebell".to_string(), "band".to_string()])
    )]
    #[case(input("male", "beginner", &[], 10), ValidationError::DaysPerWeek(10))]
    #[case(input("male", "beginner", &[], 2), ValidationError::DaysPerWeek(2))]
    #[case(input("male", "beginner", &[], -4), ValidationError::DaysPerWeek(-4))]
    #[case(
        PlanInput { session_duration: Some(20), ..input("male", "beginner", &[], 3) },
        ValidationError::SessionDuration(20)
    )]
    #[case(
        PlanInput { session_duration: Some(121), ..input("male", "beginner", &[], 3) },
        ValidationError::SessionDuration(121)
    )]
    fn test_plan_request_invalid(#[case] input: PlanInput, #[case] expected: ValidationError) {
        assert_eq!(PlanRequest::try_from(&input), Err(expected));
    }

    #[test]
    fn test_plan_request() {
        let full = PlanInput {
            session_duration: Some(45),
            ..input("female", "advanced", &["pullup_bar", "barbell_ez"], 4)
        };
        assert_eq!(
            PlanRequest::try_from(&full),
            Ok(PlanRequest {
                gender: Gender::Female,
                goal: Goal::Hypertrophy,
                experience: Experience::Advanced,
                equipment: BTreeSet::from([
                    Equipment::Bodyweight,
                    Equipment::EzBar,
                    Equipment::PullUpBar
                ]),
                days_per_week: 4,
                session_duration: 45,
                split: SplitTemplate::for_days(4).unwrap(),
            })
        );

        let request = PlanRequest::try_from(&input("male", "beginner", &[], 3)).unwrap();
        assert_eq!(request.session_duration(), DEFAULT_SESSION_DURATION);
        assert_eq!(request.split().name, "Full Body 3x/week");
        assert_eq!(request.equipment(), &BTreeSet::from([Equipment::Bodyweight]));
    }

    #[test]
    fn test_plan_input_deserialize() {
        let camel = serde_json::from_str::<PlanInput>(
            r#"{"gender": "male", "goal": "strength", "experience": "beginner",
                "equipment": ["dumbbell"], "daysPerWeek": 4, "sessionDuration": 45}"#,
        )
        .unwrap();
        let snake = serde_json::from_str::<PlanInput>(
            r#"{"gender": "male", "goal": "strength", "experience": "beginner",
                "equipment": ["dumbbell"], "days_per_week": 4, "session_duration": 45}"#,
        )
        .unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.days_per_week, 4);
        assert_eq!(camel.session_duration, Some(45));
    }

    #[test]
    fn test_variant_state() {
        let mut state = VariantState::default();
        let anchors = BTreeSet::from([ExerciseID::new("lat-pulldown")]);
        let a = BTreeSet::from([ExerciseID::new("preacher-curl")]);
        let b = BTreeSet::from([ExerciseID::new("concentration-curl")]);

        assert_eq!(
            state.constraints_for(VariantGroup::Pull, Variant::A),
            VariantConstraints::default()
        );

        state.record(VariantGroup::Pull, Variant::A, anchors.clone(), a.clone());
        state.record(
            VariantGroup::Pull,
            Variant::B,
            BTreeSet::from([ExerciseID::new("pull-ups")]),
            b.clone(),
        );
        state.record(
            VariantGroup::Push,
            Variant::A,
            BTreeSet::new(),
            BTreeSet::from([ExerciseID::new("tricep-kickback-cable")]),
        );

        assert_eq!(state.excluded_for(VariantGroup::Pull, Variant::A), b);
        assert_eq!(state.excluded_for(VariantGroup::Pull, Variant::B), a);
        assert_eq!(
            state.constraints_for(VariantGroup::Pull, Variant::C),
            VariantConstraints {
                excluded: a.union(&b).copied().collect(),
                anchors: Some(anchors),
            }
        );
        assert_eq!(
            state.constraints_for(VariantGroup::Push, Variant::B).anchors,
            Some(BTreeSet::new())
        );
    }

    #[rstest]
    fn test_suggest_push_pull_legs(data: Data) {
        let planner = Planner::new(&data.catalog, &data.patterns);

        let plan = planner
            .suggest(&input("male", "intermediate", FULL_GYM, 6))
            .unwrap();

        assert_eq!(plan.split.name, "Push/Pull/Legs 6x/week");
        assert_eq!(
            plan.workouts.iter().map(|w| w.day).collect::<Vec<_>>(),
            vec!["Push A", "Pull A", "Legs A", "Push B", "Pull B", "Legs B"]
        );
        assert!(
            plan.workouts
                .iter()
                .all(|w| matches!(w.variant, Some(Variant::A | Variant::B)))
        );
        assert_eq!(
            ids(&plan.workouts[0]),
            vec![
                "machine-chest-press",
                "machine-shoulder-press",
                "close-grip-bench-press",
                "seated-cable-fly-low",
                "seated-cable-fly-mid",
                "single-arm-cable-lateral-raise",
                "atlantis-machine-lateral-raise",
                "cable-pushdown-straight-bar",
                "overhead-cable-extension-straight-bar",
            ]
        );
        assert_eq!(
            ids(&plan.workouts[4]),
            vec![
                "lat-pulldown",
                "chest-supported-row-neutral",
                "chest-supported-row-wide",
                "bayesian-cable-curl",
                "preacher-curl",
                "concentration-curl",
            ]
        );

        for (a, b) in [(0, 3), (1, 4), (2, 5)] {
            let (a, b) = (&plan.workouts[a], &plan.workouts[b]);
            assert_eq!(a.top_tier_ids(), b.top_tier_ids(), "{} / {}", a.day, b.day);
            assert!(
                a.lower_tier_ids().is_disjoint(&b.lower_tier_ids()),
                "{} / {}",
                a.day,
                b.day
            );
        }

        assert_eq!(
            plan.parameters,
            PlanParameters {
                goal: Goal::Hypertrophy,
                experience: Experience::Intermediate,
                days_per_week: 6,
                session_duration: 60,
            }
        );
        assert_eq!(plan.progression.method, "Double Progression");
    }

    #[rstest]
    #[case(Gender::Male, Experience::Beginner, [9, 6, 4])]
    #[case(Gender::Male, Experience::Intermediate, [9, 8, 5])]
    #[case(Gender::Male, Experience::Advanced, [9, 8, 5])]
    #[case(Gender::Female, Experience::Beginner, [7, 6, 5])]
    #[case(Gender::Female, Experience::Intermediate, [9, 9, 7])]
    #[case(Gender::Female, Experience::Advanced, [9, 9, 7])]
    fn test_suggest_full_body_dumbbells(
        data: Data,
        #[case] gender: Gender,
        #[case] experience: Experience,
        #[case] expected: [usize; 3],
    ) {
        let planner = Planner::new(&data.catalog, &data.patterns);

        let plan = planner
            .suggest(&input(
                gender.as_ref(),
                experience.as_ref(),
                &["dumbbell", "bench"],
                3,
            ))
            .unwrap();

        assert_eq!(plan.split.name, "Full Body 3x/week");
        assert_eq!(
            plan.workouts
                .iter()
                .map(|w| w.exercises.len())
                .collect::<Vec<_>>(),
            expected
        );
        assert!(plan.workouts.iter().all(|w| w.day.starts_with("Full Body")));
    }

    #[rstest]
    fn test_suggest_relaxed_exclusion(data: Data) {
        let planner = Planner::new(&data.catalog, &data.patterns);

        let plan = planner
            .suggest(&input("male", "beginner", &["dumbbell", "bench"], 3))
            .unwrap();

        assert!(
            !plan.workouts[0]
                .warnings
                .contains(&Warning::RelaxedVariantExclusion)
        );
        assert!(
            plan.workouts[2]
                .warnings
                .contains(&Warning::RelaxedVariantExclusion)
        );
        assert!(plan.warnings.contains(&Warning::RelaxedVariantExclusion));
    }

    #[rstest]
    fn test_suggest_invalid(data: Data) {
        let planner = Planner::new(&data.catalog, &data.patterns);

        assert_eq!(
            planner.suggest(&input("male", "beginner", FULL_GYM, 10)),
            Err(ValidationError::DaysPerWeek(10))
        );
    }

    #[rstest]
    fn test_suggest_deterministic(data: Data) {
        let planner = Planner::new(&data.catalog, &data.patterns);
        let input = input("female", "advanced", &["dumbbell", "cable", "bench"], 5);

        assert_eq!(
            serde_json::to_string(&planner.suggest(&input).unwrap()).unwrap(),
            serde_json::to_string(&planner.suggest(&input).unwrap()).unwrap()
        );
    }

    #[rstest]
    fn test_suggest_properties(data: Data) {
        let planner = Planner::new(&data.catalog, &data.patterns);
        let equipment_sets: [&[&str]; 4] = [
            FULL_GYM,
            &["dumbbell", "bench"],
            &["barbell", "rack", "bench", "pullup_bar"],
            &["dumbbell", "cable", "machine", "barbell_ez"],
        ];

        for equipment in equipment_sets {
            let available = equipment
                .iter()
                .map(|e| Equipment::from_str(e).unwrap())
                .chain([Equipment::Bodyweight])
                .collect::<BTreeSet<_>>();

            for gender in Gender::iter() {
                for experience in Experience::iter() {
                    for days in 3..=6 {
                        let plan = planner
                            .suggest(&input(
                                gender.as_ref(),
                                experience.as_ref(),
                                equipment,
                                days,
                            ))
                            .unwrap();

                        assert_eq!(plan.workouts.len(), usize::try_from(days).unwrap());

                        for day in &plan.workouts {
                            let mut patterns = BTreeSet::new();
                            for planned in &day.exercises {
                                let exercise = data.catalog.get(&planned.id).unwrap();
                                assert!(exercise.is_available_with(&available));
                                if *experience == Experience::Beginner {
                                    assert!(exercise.difficulty <= Difficulty::Medium);
                                }
                                if let Some(pattern) = data.patterns.pattern_of(&planned.id) {
                                    assert!(patterns.insert(pattern));
                                }
                            }
                            assert!(
                                day.exercises.len() <= 9,
                                "{} has {} exercises",
                                day.day,
                                day.exercises.len()
                            );
                            assert!(
                                day.exercises.len() >= 4
                                    || day
                                        .warnings
                                        .iter()
                                        .any(|w| matches!(w, Warning::BelowMinimum(_)))
                            );
                            if *experience != Experience::Beginner {
                                assert_covered_or_named(day, *gender);
                            }
                        }
                    }
                }
            }
        }
    }

    fn assert_covered_or_named(day: &WorkoutDay, gender: Gender) {
        let targets = day.split_type.target_sub_regions(gender, day.muscle_groups);
        let warnings = day
            .warnings
            .iter()
            .chain(&day.validation_warnings)
            .collect::<Vec<_>>();

        for muscle_group in day.muscle_groups {
            let required = targets
                .get(muscle_group)
                .map_or(muscle_group.sub_regions(), Vec::as_slice);
            for sub_region in required {
                let covered = day.exercises.iter().any(|e| e.sub_region == *sub_region);
                let named = warnings.iter().any(|w| match w {
                    Warning::NoNonRedundantExercise(s) => s == sub_region,
                    Warning::MissingCoverage(s) | Warning::MissingSubRegions(_, s) => {
                        s.contains(sub_region)
                    }
                    Warning::NoExercises(m) => m == muscle_group,
                    _ => false,
                });
                assert!(covered || named, "{} misses {sub_region}", day.day);
            }
        }
    }

    #[rstest]
    fn test_suggest_variants(data: Data) {
        let planner = Planner::new(&data.catalog, &data.patterns);
        let equipment_sets: [&[&str]; 6] = [
            FULL_GYM,
            ALL_EQUIPMENT,
            &["dumbbell", "bench"],
            &[],
            &["dumbbell", "cable", "machine", "barbell_ez"],
            &["barbell", "rack", "bench", "pullup_bar"],
        ];

        for equipment in equipment_sets {
            for gender in Gender::iter() {
                for experience in Experience::iter() {
                    for days in [3, 4, 6] {
                        let plan = planner
                            .suggest(&input(
                                gender.as_ref(),
                                experience.as_ref(),
                                equipment,
                                days,
                            ))
                            .unwrap();

                        for (i, a) in plan.workouts.iter().enumerate() {
                            for b in &plan.workouts[i + 1..] {
                                if a.variant_group.is_none() || a.variant_group != b.variant_group
                                {
                                    continue;
                                }
                                assert_eq!(
                                    a.top_tier_ids(),
                                    b.top_tier_ids(),
                                    "{equipment:?} {gender} {experience} {} / {}",
                                    a.day,
                                    b.day
                                );
                                if !b.warnings.contains(&Warning::RelaxedVariantExclusion) {
                                    assert!(
                                        a.lower_tier_ids().is_disjoint(&b.lower_tier_ids()),
                                        "{equipment:?} {gender} {experience} {} / {}",
                                        a.day,
                                        b.day
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[rstest]
    fn test_suggest_keeps_top_tier_isolations(data: Data) {
        let planner = Planner::new(&data.catalog, &data.patterns);

        let plan = planner
            .suggest(&input("male", "advanced", ALL_EQUIPMENT, 6))
            .unwrap();

        assert_eq!(
            ids(&plan.workouts[0]),
            vec![
                "machine-chest-press",
                "chest-dips",
                "machine-shoulder-press",
                "seated-cable-fly-low",
                "seated-cable-fly-mid",
                "single-arm-cable-lateral-raise",
                "cable-pushdown-straight-bar",
                "overhead-cable-extension-straight-bar",
                "skull-crushers",
            ]
        );
        assert_eq!(
            ids(&plan.workouts[3]),
            vec![
                "machine-chest-press",
                "dumbbell-overhead-press-standing",
                "close-grip-bench-press",
                "seated-cable-fly-low",
                "seated-cable-fly-mid",
                "single-arm-cable-lateral-raise",
                "cable-pushdown-straight-bar",
                "overhead-cable-extension-straight-bar",
                "skull-crushers",
            ]
        );
    }

    #[rstest]
    fn test_suggest_full_gym_bounds(data: Data) {
        let planner = Planner::new(&data.catalog, &data.patterns);

        for gender in Gender::iter() {
            for experience in Experience::iter() {
                for days in 3..=6 {
                    let plan = planner
                        .suggest(&input(gender.as_ref(), experience.as_ref(), FULL_GYM, days))
                        .unwrap();
                    for day in &plan.workouts {
                        assert!((4..=9).contains(&day.exercises.len()));
                        assert!(
                            !day.warnings
                                .iter()
                                .any(|w| matches!(w, Warning::BelowMinimum(_)))
                        );
                    }
                }
            }
        }
    }

    #[rstest]
    fn test_plan_serialize(data: Data) {
        let planner = Planner::new(&data.catalog, &data.patterns);
        let plan = planner
            .suggest(&input("male", "intermediate", FULL_GYM, 4))
            .unwrap();

        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["split"]["name"], "Upper/Lower 4x/week");
        assert_eq!(value["split"]["days"][1]["name"], "Lower A");
        assert_eq!(
            value["split"]["days"][1]["muscleGroups"],
            serde_json::json!(["legs"])
        );
        assert_eq!(value["workouts"][0]["variant"], "A");
        assert_eq!(value["workouts"][0]["splitType"], "upper");
        assert!(value["workouts"][0].get("variantGroup").is_none());
        assert!(value["workouts"][0]["exercises"][0]["restSeconds"].is_u64());
        assert!(value["workouts"][0]["exercises"][0]["type"].is_string());
        assert_eq!(value["parameters"]["daysPerWeek"], 4);
        assert_eq!(value["parameters"]["sessionDuration"], 60);
        assert_eq!(value["parameters"]["goal"], "hypertrophy");
        assert_eq!(
            value["warnings"].as_array().unwrap().len(),
            plan.warnings.len()
        );
    }
}
