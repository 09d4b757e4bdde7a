use std::{
    collections::{BTreeMap, BTreeSet},
    slice::Iter,
};

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

use crate::{Catalog, CatalogError, ExerciseID, MuscleGroup};

/// Group of exercises that produce an equivalent training stimulus.
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MovementPattern {
    ChestHorizontalPress,
    ChestInclinePress,
    ChestDeclinePress,
    ChestFlyUpper,
    ChestFlyMid,
    ChestFlyLower,
    BackVerticalPull,
    BackHorizontalRowWide,
    BackHorizontalRowClose,
    BackShrug,
    BackPullover,
    BackFacePull,
    BackExtension,
    BackHinge,
    ShoulderOverheadPress,
    ShoulderLateralRaiseCable,
    ShoulderLateralRaiseDumbbell,
    ShoulderLateralRaiseMachine,
    ShoulderRearFlyCable,
    ShoulderRearFlyDumbbell,
    ShoulderRearFlyMachine,
    ShoulderUprightRow,
    BicepsPreacher,
    BicepsStandingCurl,
    BicepsInclineCurl,
    BicepsCableCurl,
    BicepsHammer,
    BicepsConcentration,
    BicepsChinup,
    TricepsPushdown,
    TricepsOverheadCable,
    TricepsOverheadDumbbell,
    TricepsSkullCrusher,
    TricepsCloseGripPress,
    TricepsDip,
    TricepsKickback,
    QuadSquatBilateral,
    QuadSquatUnilateral,
    QuadLegPress,
    QuadLegExtension,
    QuadSissySquat,
    HamstringLegCurlSeated,
    HamstringLegCurlLying,
    HamstringHipHinge,
    HamstringGluteHam,
    GluteHipThrust,
    GluteBridge,
    GluteSquatDeep,
    GluteLunge,
    GluteAbductionMachine,
    GluteAbductionFloor,
    GluteKickback,
    GluteStepUp,
}

impl MovementPattern {
    pub fn iter() -> Iter<'static, MovementPattern> {
        static PATTERNS: [MovementPattern; 53] = [
            MovementPattern::ChestHorizontalPress,
            MovementPattern::ChestInclinePress,
            MovementPattern::ChestDeclinePress,
            MovementPattern::ChestFlyUpper,
            MovementPattern::ChestFlyMid,
            MovementPattern::ChestFlyLower,
            MovementPattern::BackVerticalPull,
            MovementPattern::BackHorizontalRowWide,
            MovementPattern::BackHorizontalRowClose,
            MovementPattern::BackShrug,
            MovementPattern::BackPullover,
            MovementPattern::BackFacePull,
            MovementPattern::BackExtension,
            MovementPattern::BackHinge,
            MovementPattern::ShoulderOverheadPress,
            MovementPattern::ShoulderLateralRaiseCable,
            MovementPattern::ShoulderLateralRaiseDumbbell,
            MovementPattern::ShoulderLateralRaiseMachine,
            MovementPattern::ShoulderRearFlyCable,
            MovementPattern::ShoulderRearFlyDumbbell,
            MovementPattern::ShoulderRearFlyMachine,
            MovementPattern::ShoulderUprightRow,
            MovementPattern::BicepsPreacher,
            MovementPattern::BicepsStandingCurl,
            MovementPattern::BicepsInclineCurl,
            MovementPattern::BicepsCableCurl,
            MovementPattern::BicepsHammer,
            MovementPattern::BicepsConcentration,
            MovementPattern::BicepsChinup,
            MovementPattern::TricepsPushdown,
            MovementPattern::TricepsOverheadCable,
            MovementPattern::TricepsOverheadDumbbell,
            MovementPattern::TricepsSkullCrusher,
            MovementPattern::TricepsCloseGripPress,
            MovementPattern::TricepsDip,
            MovementPattern::TricepsKickback,
            MovementPattern::QuadSquatBilateral,
            MovementPattern::QuadSquatUnilateral,
            MovementPattern::QuadLegPress,
            MovementPattern::QuadLegExtension,
            MovementPattern::QuadSissySquat,
            MovementPattern::HamstringLegCurlSeated,
            MovementPattern::HamstringLegCurlLying,
            MovementPattern::HamstringHipHinge,
            MovementPattern::HamstringGluteHam,
            MovementPattern::GluteHipThrust,
            MovementPattern::GluteBridge,
            MovementPattern::GluteSquatDeep,
            MovementPattern::GluteLunge,
            MovementPattern::GluteAbductionMachine,
            MovementPattern::GluteAbductionFloor,
            MovementPattern::GluteKickback,
            MovementPattern::GluteStepUp,
        ];
        PATTERNS.iter()
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            MovementPattern::ChestHorizontalPress => "Flat pressing (bench press variations)",
            MovementPattern::ChestInclinePress => "Incline pressing (15-45° angle)",
            MovementPattern::ChestDeclinePress => "Decline pressing or dips with forward lean",
            MovementPattern::ChestFlyUpper => "Fly movements targeting upper chest (low-to-high)",
            MovementPattern::ChestFlyMid => "Fly movements targeting mid chest (horizontal)",
            MovementPattern::ChestFlyLower => "Fly movements targeting lower chest (high-to-low)",
            MovementPattern::BackVerticalPull => "Pulldowns and pull-ups (vertical pulling)",
            MovementPattern::BackHorizontalRowWide => "Wide-grip rows (upper back emphasis)",
            MovementPattern::BackHorizontalRowClose => "Close/neutral grip rows (lat emphasis)",
            MovementPattern::BackShrug => "Shrugging movements (upper traps)",
            MovementPattern::BackPullover => "Pullover and straight-arm pulldown (lat isolation)",
            MovementPattern::BackFacePull => "Face pulls and rear delt rows",
            MovementPattern::BackExtension => "Spinal extension movements",
            MovementPattern::BackHinge => "Hip hinge with back emphasis (deadlift variations)",
            MovementPattern::ShoulderOverheadPress => "Vertical pressing movements",
            MovementPattern::ShoulderLateralRaiseCable => "Cable lateral raises (constant tension)",
            MovementPattern::ShoulderLateralRaiseDumbbell => "Dumbbell lateral raises",
            MovementPattern::ShoulderLateralRaiseMachine => "Machine lateral raises",
            MovementPattern::ShoulderRearFlyCable => "Cable rear delt flys",
            MovementPattern::ShoulderRearFlyDumbbell => "Dumbbell rear delt flys",
            MovementPattern::ShoulderRearFlyMachine => "Machine rear delt flys (reverse pec deck)",
            MovementPattern::ShoulderUprightRow => "Upright rowing movements",
            MovementPattern::BicepsPreacher => "Preacher/spider curls (arm in front, short head)",
            MovementPattern::BicepsStandingCurl => "Standing barbell/EZ bar curls",
            MovementPattern::BicepsInclineCurl => "Incline curls (arm behind, long head stretch)",
            MovementPattern::BicepsCableCurl => "Cable curl variations",
            MovementPattern::BicepsHammer => "Neutral grip curls (brachialis + long head)",
            MovementPattern::BicepsConcentration => "Concentration curls (peak contraction)",
            MovementPattern::BicepsChinup => "Chin-up (compound biceps)",
            MovementPattern::TricepsPushdown => "Pushdown variations (lateral/medial heads)",
            MovementPattern::TricepsOverheadCable => "Overhead cable extensions (long head)",
            MovementPattern::TricepsOverheadDumbbell => "Overhead dumbbell extensions (long head)",
            MovementPattern::TricepsSkullCrusher => "Lying extensions/skull crushers",
            MovementPattern::TricepsCloseGripPress => "Close-grip pressing (compound)",
            MovementPattern::TricepsDip => "Dip variations (compound)",
            MovementPattern::TricepsKickback => "Kickback variations",
            MovementPattern::QuadSquatBilateral => "Bilateral squats (back squat, front squat, hack)",
            MovementPattern::QuadSquatUnilateral => "Unilateral squats (split squat, lunge)",
            MovementPattern::QuadLegPress => "Leg press variations",
            MovementPattern::QuadLegExtension => "Leg extension (quad isolation)",
            MovementPattern::QuadSissySquat => "Sissy squat / reverse nordic (rectus femoris)",
            MovementPattern::HamstringLegCurlSeated => "Seated leg curl (lengthened position)",
            MovementPattern::HamstringLegCurlLying => "Lying/prone leg curl",
            MovementPattern::HamstringHipHinge => "RDL and stiff-leg deadlift",
            MovementPattern::HamstringGluteHam => "Glute-ham raise and nordic curl",
            MovementPattern::GluteHipThrust => "Hip thrust variations",
            MovementPattern::GluteBridge => "Glute bridge (lighter hip thrust)",
            MovementPattern::GluteSquatDeep => "Deep squats for glutes",
            MovementPattern::GluteLunge => "Lunge variations for glutes",
            MovementPattern::GluteAbductionMachine => "Machine hip abduction",
            MovementPattern::GluteAbductionFloor => "Floor/bodyweight abduction",
            MovementPattern::GluteKickback => "Cable/bodyweight kickbacks",
            MovementPattern::GluteStepUp => "Step-up variations",
        }
    }

    #[must_use]
    pub fn muscle_group(self) -> MuscleGroup {
        let name: &str = self.as_ref();
        match name.split_once('_').map(|(prefix, _)| prefix) {
            Some("chest") => MuscleGroup::Chest,
            Some("biceps" | "triceps") => MuscleGroup::Arms,
            Some("shoulder") => MuscleGroup::Shoulders,
            Some("back") => MuscleGroup::Back,
            _ => MuscleGroup::Legs,
        }
    }
}

/// Maps exercises to their movement pattern. Exercises without a mapping are never redundant.
#[derive(Debug, Clone, Default)]
pub struct MovementPatternIndex {
    patterns: BTreeMap<ExerciseID, MovementPattern>,
}

impl MovementPatternIndex {
    pub fn new(
        catalog: &Catalog,
        entries: impl IntoIterator<Item = (ExerciseID, MovementPattern)>,
    ) -> Result<Self, CatalogError> {
        let mut patterns = BTreeMap::new();

        for (id, pattern) in entries {
            if !catalog.contains(&id) {
                return Err(CatalogError::UnknownExercise(id));
            }
            if patterns.insert(id, pattern).is_some() {
                return Err(CatalogError::DuplicatePattern(id));
            }
        }

        Ok(Self { patterns })
    }

    /// The bundled pattern mapping, checked against `catalog`.
    pub fn builtin(catalog: &Catalog) -> Result<Self, CatalogError> {
        Self::new(
            catalog,
            EXERCISE_PATTERNS
                .iter()
                .map(|(id, pattern)| (ExerciseID::new(*id), *pattern)),
        )
    }

    #[must_use]
    pub fn pattern_of(&self, id: &str) -> Option<MovementPattern> {
        self.patterns.get(id).copied()
    }

    #[must_use]
    pub fn are_redundant(&self, a: &str, b: &str) -> bool {
        match (self.pattern_of(a), self.pattern_of(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    #[must_use]
    pub fn exercises_with(&self, pattern: MovementPattern) -> Vec<ExerciseID> {
        self.patterns
            .iter()
            .filter(|(_, p)| **p == pattern)
            .map(|(id, _)| *id)
            .collect()
    }

    #[must_use]
    pub fn patterns_for(muscle_group: MuscleGroup) -> BTreeSet<MovementPattern> {
        MovementPattern::iter()
            .copied()
            .filter(|p| p.muscle_group() == muscle_group)
            .collect()
    }
}

const EXERCISE_PATTERNS: [(&str, MovementPattern); 147] = [
    ("incline-barbell-bench-press", MovementPattern::ChestInclinePress),
    ("incline-dumbbell-press", MovementPattern::ChestInclinePress),
    ("low-to-high-cable-fly", MovementPattern::ChestFlyUpper),
    ("incline-dumbbell-fly", MovementPattern::ChestFlyUpper),
    ("seated-cable-fly-low", MovementPattern::ChestFlyUpper),
    ("incline-smith-machine-press", MovementPattern::ChestInclinePress),
    ("reverse-grip-bench-press", MovementPattern::ChestHorizontalPress),
    ("landmine-press", MovementPattern::ChestInclinePress),
    ("machine-chest-press", MovementPattern::ChestHorizontalPress),
    ("flat-barbell-bench-press", MovementPattern::ChestHorizontalPress),
    ("flat-dumbbell-press", MovementPattern::ChestHorizontalPress),
    ("seated-cable-fly-mid", MovementPattern::ChestFlyMid),
    ("pec-deck-machine", MovementPattern::ChestFlyMid),
    ("cable-crossover-mid", MovementPattern::ChestFlyMid),
    ("flat-dumbbell-fly", MovementPattern::ChestFlyMid),
    ("push-ups-standard", MovementPattern::ChestHorizontalPress),
    ("deficit-push-ups", MovementPattern::ChestHorizontalPress),
    ("chest-dips", MovementPattern::ChestDeclinePress),
    ("weighted-dips", MovementPattern::ChestDeclinePress),
    ("decline-barbell-bench-press", MovementPattern::ChestDeclinePress),
    ("decline-dumbbell-press", MovementPattern::ChestDeclinePress),
    ("high-to-low-cable-fly", MovementPattern::ChestFlyLower),
    ("decline-push-ups", MovementPattern::ChestDeclinePress),
    ("decline-dumbbell-fly", MovementPattern::ChestFlyLower),
    ("dip-machine-assisted", MovementPattern::ChestDeclinePress),
    ("preacher-curl", MovementPattern::BicepsPreacher),
    ("concentration-curl", MovementPattern::BicepsConcentration),
    ("wide-grip-barbell-curl", MovementPattern::BicepsStandingCurl),
    ("wide-grip-cable-curl", MovementPattern::BicepsCableCurl),
    ("spider-curl", MovementPattern::BicepsPreacher),
    ("ez-bar-curl-wide", MovementPattern::BicepsStandingCurl),
    ("machine-preacher-curl", MovementPattern::BicepsPreacher),
    ("no-money-curl", MovementPattern::BicepsStandingCurl),
    ("bayesian-cable-curl", MovementPattern::BicepsCableCurl),
    ("incline-dumbbell-curl", MovementPattern::BicepsInclineCurl),
    ("drag-curl", MovementPattern::BicepsStandingCurl),
    ("hammer-curl", MovementPattern::BicepsHammer),
    ("chin-up", MovementPattern::BicepsChinup),
    ("lying-flat-bench-curl", MovementPattern::BicepsInclineCurl),
    ("narrow-grip-ez-bar-curl", MovementPattern::BicepsStandingCurl),
    ("overhead-cable-curl", MovementPattern::BicepsCableCurl),
    ("cable-pushdown-rope", MovementPattern::TricepsPushdown),
    ("cable-pushdown-straight-bar", MovementPattern::TricepsPushdown),
    ("reverse-grip-pushdown", MovementPattern::TricepsPushdown),
    ("close-grip-bench-press", MovementPattern::TricepsCloseGripPress),
    ("diamond-push-ups", MovementPattern::TricepsCloseGripPress),
    ("bench-dips", MovementPattern::TricepsDip),
    ("tricep-kickback-cable", MovementPattern::TricepsKickback),
    ("jm-press", MovementPattern::TricepsCloseGripPress),
    ("overhead-cable-extension-straight-bar", MovementPattern::TricepsOverheadCable),
    ("skull-crushers", MovementPattern::TricepsSkullCrusher),
    ("dumbbell-overhead-extension", MovementPattern::TricepsOverheadDumbbell),
    ("cable-overhead-extension-rope", MovementPattern::TricepsOverheadCable),
    ("incline-dumbbell-kickback", MovementPattern::TricepsKickback),
    ("weighted-dips-upright", MovementPattern::TricepsDip),
    ("katana-cable-extension", MovementPattern::TricepsOverheadCable),
    ("machine-shoulder-press", MovementPattern::ShoulderOverheadPress),
    ("seated-dumbbell-overhead-press", MovementPattern::ShoulderOverheadPress),
    ("standing-barbell-overhead-press", MovementPattern::ShoulderOverheadPress),
    ("dumbbell-overhead-press-standing", MovementPattern::ShoulderOverheadPress),
    ("arnold-press", MovementPattern::ShoulderOverheadPress),
    ("incline-bench-press-shoulders", MovementPattern::ChestInclinePress),
    ("front-raise", MovementPattern::ShoulderLateralRaiseDumbbell),
    ("push-up-shoulders", MovementPattern::ChestHorizontalPress),
    ("single-arm-cable-lateral-raise", MovementPattern::ShoulderLateralRaiseCable),
    ("cable-y-raise", MovementPattern::ShoulderLateralRaiseCable),
    ("behind-back-cuffed-cable-lateral-raise", MovementPattern::ShoulderLateralRaiseCable),
    ("cross-body-cable-lateral-raise", MovementPattern::ShoulderLateralRaiseCable),
    ("lean-in-dumbbell-lateral-raise", MovementPattern::ShoulderLateralRaiseDumbbell),
    ("standing-dumbbell-lateral-raise", MovementPattern::ShoulderLateralRaiseDumbbell),
    ("arnold-style-side-lying-raise", MovementPattern::ShoulderLateralRaiseDumbbell),
    ("atlantis-machine-lateral-raise", MovementPattern::ShoulderLateralRaiseMachine),
    ("upright-row", MovementPattern::ShoulderUprightRow),
    ("45-degree-incline-row-shoulders", MovementPattern::ShoulderRearFlyDumbbell),
    ("reverse-cable-crossover", MovementPattern::ShoulderRearFlyCable),
    ("reverse-pec-deck", MovementPattern::ShoulderRearFlyMachine),
    ("lying-incline-rear-delt-fly", MovementPattern::ShoulderRearFlyDumbbell),
    ("rope-face-pull", MovementPattern::BackFacePull),
    ("seated-rear-lateral-raise", MovementPattern::ShoulderRearFlyDumbbell),
    ("45-degree-incline-row-rear-delt", MovementPattern::ShoulderRearFlyDumbbell),
    ("bent-over-reverse-dumbbell-fly", MovementPattern::ShoulderRearFlyDumbbell),
    ("chest-supported-row-rear-delt", MovementPattern::BackHorizontalRowClose),
    ("i-y-t-raises", MovementPattern::BackFacePull),
    ("face-pulls-omni", MovementPattern::BackFacePull),
    ("bent-over-row-wide", MovementPattern::BackHorizontalRowWide),
    ("chest-supported-row-wide", MovementPattern::BackHorizontalRowWide),
    ("inverted-row", MovementPattern::BackHorizontalRowWide),
    ("seated-cable-row-wide", MovementPattern::BackHorizontalRowWide),
    ("barbell-shrugs", MovementPattern::BackShrug),
    ("cable-shrugs", MovementPattern::BackShrug),
    ("cable-y-raise-traps", MovementPattern::BackFacePull),
    ("reverse-pec-deck-back", MovementPattern::ShoulderRearFlyMachine),
    ("pull-ups", MovementPattern::BackVerticalPull),
    ("chin-ups-back", MovementPattern::BackVerticalPull),
    ("lat-pulldown", MovementPattern::BackVerticalPull),
    ("single-arm-lat-pulldown", MovementPattern::BackVerticalPull),
    ("chest-supported-row-neutral", MovementPattern::BackHorizontalRowClose),
    ("seated-cable-row-close", MovementPattern::BackHorizontalRowClose),
    ("single-arm-dumbbell-row", MovementPattern::BackHorizontalRowClose),
    ("bent-over-row-underhand", MovementPattern::BackHorizontalRowClose),
    ("straight-arm-pulldown", MovementPattern::BackPullover),
    ("dumbbell-pullover", MovementPattern::BackPullover),
    ("kroc-row", MovementPattern::BackHorizontalRowClose),
    ("conventional-deadlift", MovementPattern::BackHinge),
    ("romanian-deadlift-back", MovementPattern::BackHinge),
    ("45-degree-back-extension", MovementPattern::BackExtension),
    ("prone-lumbar-extension", MovementPattern::BackExtension),
    ("good-mornings-back", MovementPattern::BackHinge),
    ("superman-hold", MovementPattern::BackExtension),
    ("bird-dog", MovementPattern::BackExtension),
    ("glute-bridge-back", MovementPattern::GluteBridge),
    ("jefferson-curl", MovementPattern::BackExtension),
    ("barbell-back-squat", MovementPattern::QuadSquatBilateral),
    ("barbell-front-squat", MovementPattern::QuadSquatBilateral),
    ("hack-squat", MovementPattern::QuadSquatBilateral),
    ("pendulum-squat", MovementPattern::QuadSquatBilateral),
    ("smith-machine-squat", MovementPattern::QuadSquatBilateral),
    ("leg-extension", MovementPattern::QuadLegExtension),
    ("bulgarian-split-squat", MovementPattern::QuadSquatUnilateral),
    ("45-degree-leg-press", MovementPattern::QuadLegPress),
    ("goblet-squat", MovementPattern::QuadSquatBilateral),
    ("reverse-nordic-curl", MovementPattern::QuadSissySquat),
    ("sissy-squat", MovementPattern::QuadSissySquat),
    ("walking-lunges-short", MovementPattern::QuadSquatUnilateral),
    ("seated-leg-curl", MovementPattern::HamstringLegCurlSeated),
    ("romanian-deadlift", MovementPattern::HamstringHipHinge),
    ("nordic-hamstring-curl", MovementPattern::HamstringGluteHam),
    ("glute-ham-raise", MovementPattern::HamstringGluteHam),
    ("lying-leg-curl", MovementPattern::HamstringLegCurlLying),
    ("stiff-leg-deadlift", MovementPattern::HamstringHipHinge),
    ("single-leg-rdl", MovementPattern::HamstringHipHinge),
    ("stability-ball-hamstring-curl", MovementPattern::HamstringLegCurlLying),
    ("good-mornings", MovementPattern::HamstringHipHinge),
    ("barbell-hip-thrust", MovementPattern::GluteHipThrust),
    ("walking-lunges-long", MovementPattern::GluteLunge),
    ("machine-hip-abduction", MovementPattern::GluteAbductionMachine),
    ("step-ups", MovementPattern::GluteStepUp),
    ("deep-back-squat", MovementPattern::GluteSquatDeep),
    ("cable-kickback", MovementPattern::GluteKickback),
    ("bulgarian-split-squat-glutes", MovementPattern::QuadSquatUnilateral),
    ("machine-hip-thrust", MovementPattern::GluteHipThrust),
    ("single-leg-hip-thrust", MovementPattern::GluteHipThrust),
    ("glute-bridge", MovementPattern::GluteBridge),
    ("cable-pull-through", MovementPattern::GluteHipThrust),
    ("side-lying-hip-abduction", MovementPattern::GluteAbductionFloor),
    ("lateral-band-walks", MovementPattern::GluteAbductionFloor),
    ("reverse-lunge", MovementPattern::GluteLunge),
];

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, str::FromStr};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn builtin() -> MovementPatternIndex {
        MovementPatternIndex::builtin(&Catalog::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_builtin() {
        let catalog = Catalog::builtin().unwrap();
        let index = MovementPatternIndex::builtin(&catalog).unwrap();

        for exercise in catalog.exercises() {
            assert!(
                index.pattern_of(&exercise.id).is_some(),
                "no pattern for {}",
                exercise.id
            );
        }
        assert_eq!(
            MovementPatternIndex::builtin(&Catalog::new(vec![]).unwrap()).err(),
            Some(CatalogError::UnknownExercise(ExerciseID::new(
                EXERCISE_PATTERNS[0].0
            )))
        );
    }

    #[test]
    fn test_new_unknown_exercise() {
        assert_eq!(
            MovementPatternIndex::new(
                &Catalog::builtin().unwrap(),
                [(ExerciseID::new("unknown"), MovementPattern::BackShrug)]
            )
            .err(),
            Some(CatalogError::UnknownExercise(ExerciseID::new("unknown")))
        );
    }

    #[test]
    fn test_new_duplicate_pattern() {
        let id = ExerciseID::new("pull-ups");
        assert_eq!(
            MovementPatternIndex::new(
                &Catalog::builtin().unwrap(),
                [
                    (id, MovementPattern::BackVerticalPull),
                    (id, MovementPattern::BicepsChinup)
                ]
            )
            .err(),
            Some(CatalogError::DuplicatePattern(id))
        );
    }

    #[test]
    fn test_pattern_names() {
        let mut descriptions = HashSet::new();

        for pattern in MovementPattern::iter() {
            let description = pattern.description();

            assert!(!description.is_empty());
            assert!(!descriptions.contains(description));
            assert_eq!(MovementPattern::from_str(pattern.as_ref()), Ok(*pattern));

            descriptions.insert(description);
        }
    }

    #[rstest]
    #[case(MovementPattern::ChestFlyMid, "chest_fly_mid", MuscleGroup::Chest)]
    #[case(MovementPattern::BicepsChinup, "biceps_chinup", MuscleGroup::Arms)]
    #[case(MovementPattern::TricepsDip, "triceps_dip", MuscleGroup::Arms)]
    #[case(
        MovementPattern::ShoulderUprightRow,
        "shoulder_upright_row",
        MuscleGroup::Shoulders
    )]
    #[case(MovementPattern::BackHinge, "back_hinge", MuscleGroup::Back)]
    #[case(
        MovementPattern::HamstringHipHinge,
        "hamstring_hip_hinge",
        MuscleGroup::Legs
    )]
    #[case(MovementPattern::GluteStepUp, "glute_step_up", MuscleGroup::Legs)]
    fn test_pattern_muscle_group(
        #[case] pattern: MovementPattern,
        #[case] name: &str,
        #[case] expected: MuscleGroup,
    ) {
        assert_eq!(pattern.as_ref(), name);
        assert_eq!(pattern.muscle_group(), expected);
    }

    #[rstest]
    #[case("pull-ups", "lat-pulldown", true)]
    #[case("incline-bench-press-shoulders", "incline-barbell-bench-press", true)]
    #[case("pull-ups", "incline-barbell-bench-press", false)]
    #[case("pull-ups", "unknown", false)]
    #[case("unknown", "unknown", false)]
    fn test_are_redundant(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(builtin().are_redundant(a, b), expected);
    }

    #[test]
    fn test_exercises_with() {
        assert_eq!(
            builtin().exercises_with(MovementPattern::BackVerticalPull),
            vec![
                ExerciseID::new("chin-ups-back"),
                ExerciseID::new("lat-pulldown"),
                ExerciseID::new("pull-ups"),
                ExerciseID::new("single-arm-lat-pulldown"),
            ]
        );
    }

    #[test]
    fn test_patterns_for() {
        let mut all = BTreeSet::new();
        for muscle_group in [
            MuscleGroup::Chest,
            MuscleGroup::Arms,
            MuscleGroup::Shoulders,
            MuscleGroup::Back,
            MuscleGroup::Legs,
        ] {
            let patterns = MovementPatternIndex::patterns_for(muscle_group);
            assert!(!patterns.is_empty());
            assert!(all.is_disjoint(&patterns));
            all.extend(patterns);
        }
        assert_eq!(all.len(), MovementPattern::iter().len());
        assert!(
            MovementPatternIndex::patterns_for(MuscleGroup::Chest)
                .contains(&MovementPattern::ChestInclinePress)
        );
    }
}
