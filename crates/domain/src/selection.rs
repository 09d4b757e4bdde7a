use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{
    Catalog, Difficulty, Equipment, Exercise, ExerciseID, Experience, MovementPattern,
    MovementPatternIndex, MuscleGroup, SubRegion, Warning,
};

const UNCOVERED_SUB_REGION_BONUS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionConfig {
    pub exercises_per_muscle_group: usize,
    pub max_difficulty: Difficulty,
    pub require_full_coverage: bool,
}

/// Sub-regions kept, in this order, when full coverage is not required.
#[must_use]
pub fn priority_sub_regions(muscle_group: MuscleGroup) -> &'static [SubRegion] {
    match muscle_group {
        MuscleGroup::Chest => &[SubRegion::MidChest, SubRegion::UpperChest],
        MuscleGroup::Arms => &[SubRegion::BicepsLongHead, SubRegion::TricepsLongHead],
        MuscleGroup::Shoulders => &[SubRegion::SideDelt, SubRegion::FrontDelt],
        MuscleGroup::Back => &[SubRegion::Lats, SubRegion::UpperBack],
        MuscleGroup::Legs => &[SubRegion::Quadriceps, SubRegion::Glutes],
    }
}

/// Main lifts that are picked first when a top tier exercise is available for them.
#[must_use]
pub fn essential_patterns(muscle_group: MuscleGroup) -> &'static [MovementPattern] {
    match muscle_group {
        MuscleGroup::Back => &[
            MovementPattern::BackVerticalPull,
            MovementPattern::BackHorizontalRowClose,
        ],
        MuscleGroup::Chest => &[
            MovementPattern::ChestHorizontalPress,
            MovementPattern::ChestInclinePress,
        ],
        MuscleGroup::Legs => &[
            MovementPattern::QuadSquatBilateral,
            MovementPattern::QuadLegExtension,
        ],
        MuscleGroup::Shoulders => &[
            MovementPattern::ShoulderOverheadPress,
            MovementPattern::ShoulderLateralRaiseCable,
        ],
        MuscleGroup::Arms => &[
            MovementPattern::TricepsPushdown,
            MovementPattern::BicepsCableCurl,
        ],
    }
}

/// Result of selecting exercises for one muscle group.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub exercises: Vec<&'a Exercise>,
    pub used_patterns: BTreeSet<MovementPattern>,
    pub warnings: Vec<Warning>,
}

/// Selects exercises from the subset of the catalog that is usable with the given equipment and
/// experience. The subset is computed once and reused for every day of a plan.
#[derive(Debug, Clone)]
pub struct ExerciseSelector<'a> {
    patterns: &'a MovementPatternIndex,
    config: SelectionConfig,
    eligible: Vec<&'a Exercise>,
    by_sub_region: BTreeMap<SubRegion, Vec<&'a Exercise>>,
}

impl<'a> ExerciseSelector<'a> {
    #[must_use]
    pub fn new(
        catalog: &'a Catalog,
        patterns: &'a MovementPatternIndex,
        equipment: &BTreeSet<Equipment>,
        experience: Experience,
    ) -> Self {
        let config = experience.selection_config();
        let eligible = catalog
            .exercises()
            .iter()
            .filter(|e| e.is_available_with(equipment) && e.difficulty <= config.max_difficulty)
            .collect::<Vec<_>>();

        let mut by_sub_region: BTreeMap<SubRegion, Vec<&Exercise>> = BTreeMap::new();
        for exercise in &eligible {
            by_sub_region
                .entry(exercise.sub_region)
                .or_default()
                .push(*exercise);
        }
        for exercises in by_sub_region.values_mut() {
            exercises.sort_by(|a, b| a.cmp_priority(b));
        }

        debug!(
            "{} of {} exercises eligible for {experience}",
            eligible.len(),
            catalog.len()
        );

        Self {
            patterns,
            config,
            eligible,
            by_sub_region,
        }
    }

    #[must_use]
    pub fn config(&self) -> SelectionConfig {
        self.config
    }

    #[must_use]
    pub fn eligible(&self) -> &[&'a Exercise] {
        &self.eligible
    }

    #[must_use]
    pub fn pattern_of(&self, exercise: &Exercise) -> Option<MovementPattern> {
        self.patterns.pattern_of(&exercise.id)
    }

    /// Eligible exercises of a sub-region, best first.
    #[must_use]
    pub fn candidates(&self, sub_region: SubRegion) -> &[&'a Exercise] {
        self.by_sub_region
            .get(&sub_region)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Selects up to `target_count` exercises for a muscle group.
    ///
    /// Top tier exercises are chosen first, preferring the essential patterns of the muscle
    /// group. Afterwards uncovered sub-regions are filled, and remaining slots go to the best
    /// candidates with a bonus for sub-regions that are still uncovered. Exercises whose pattern
    /// is contained in `used_patterns` are never chosen. Exercises in `excluded` are only chosen
    /// as top tier anchors.
    #[must_use]
    pub fn select_for_muscle_group(
        &self,
        muscle_group: MuscleGroup,
        target_count: usize,
        used_patterns: BTreeSet<MovementPattern>,
        sub_regions: Option<&[SubRegion]>,
        excluded: &BTreeSet<ExerciseID>,
    ) -> Selection<'a> {
        let requested = self.requested_sub_regions(muscle_group, sub_regions);
        let mut picks = Picks::new(used_patterns);
        let mut warnings = vec![];

        self.select_anchors(muscle_group, target_count, &requested, &mut picks);

        for sub_region in &requested {
            if picks.len() >= target_count {
                break;
            }
            if picks.covered.contains(sub_region) {
                continue;
            }
            match self
                .candidates(*sub_region)
                .iter()
                .find(|e| picks.is_available(e, self.pattern_of(e), excluded))
                .copied()
            {
                Some(exercise) => picks.take(exercise, self.pattern_of(exercise)),
                None => {
                    if self.config.require_full_coverage {
                        warnings.push(Warning::NoNonRedundantExercise(*sub_region));
                    }
                }
            }
        }

        while picks.len() < target_count {
            let best = requested
                .iter()
                .flat_map(|s| self.candidates(*s))
                .filter(|e| picks.is_available(e, self.pattern_of(e), excluded))
                .max_by(|a, b| {
                    picks
                        .score(a)
                        .cmp(&picks.score(b))
                        .then_with(|| b.name.cmp(a.name))
                        .then_with(|| b.id.cmp(&a.id))
                })
                .copied();
            match best {
                Some(exercise) => picks.take(exercise, self.pattern_of(exercise)),
                None => break,
            }
        }

        let missing = requested
            .iter()
            .filter(|s| !picks.covered.contains(s))
            .copied()
            .collect::<Vec<_>>();
        if !missing.is_empty() && self.config.require_full_coverage {
            warnings.push(Warning::MissingCoverage(missing));
        }

        debug!(
            "selected {} of {target_count} exercises for {muscle_group}",
            picks.exercises.len()
        );

        Selection {
            exercises: picks.exercises,
            used_patterns: picks.used_patterns,
            warnings,
        }
    }

    fn requested_sub_regions(
        &self,
        muscle_group: MuscleGroup,
        sub_regions: Option<&[SubRegion]>,
    ) -> Vec<SubRegion> {
        let requested = match sub_regions {
            Some(sub_regions) if !sub_regions.is_empty() => sub_regions,
            _ => muscle_group.sub_regions(),
        };

        if self.config.require_full_coverage {
            requested.to_vec()
        } else {
            priority_sub_regions(muscle_group)
                .iter()
                .filter(|s| requested.contains(s))
                .copied()
                .collect()
        }
    }

    fn select_anchors(
        &self,
        muscle_group: MuscleGroup,
        target_count: usize,
        requested: &[SubRegion],
        picks: &mut Picks<'a>,
    ) {
        let mut top_tier = requested
            .iter()
            .flat_map(|s| self.candidates(*s))
            .filter(|e| e.is_top_tier())
            .copied()
            .collect::<Vec<_>>();
        top_tier.sort_by(|a, b| a.cmp_priority(b));

        let mut by_pattern: BTreeMap<MovementPattern, Vec<&'a Exercise>> = BTreeMap::new();
        for exercise in &top_tier {
            if let Some(pattern) = self.pattern_of(exercise) {
                by_pattern.entry(pattern).or_default().push(*exercise);
            }
        }

        for pattern in essential_patterns(muscle_group) {
            if picks.len() >= target_count {
                break;
            }
            if picks.used_patterns.contains(pattern) {
                continue;
            }
            if let Some(exercise) = by_pattern
                .get(pattern)
                .and_then(|exercises| exercises.iter().find(|e| !picks.contains(e.id)))
                .copied()
            {
                picks.take(exercise, Some(*pattern));
            }
        }

        let mut patterns = by_pattern.iter().collect::<Vec<_>>();
        patterns.sort_by(|(_, a), (_, b)| a[0].cmp_priority(b[0]));
        for (pattern, exercises) in patterns {
            if picks.len() >= target_count {
                break;
            }
            if picks.used_patterns.contains(pattern) {
                continue;
            }
            if let Some(exercise) = exercises.iter().find(|e| !picks.contains(e.id)).copied() {
                picks.take(exercise, Some(*pattern));
            }
        }

        for exercise in top_tier {
            if picks.len() >= target_count {
                break;
            }
            if !picks.contains(exercise.id) && self.pattern_of(exercise).is_none() {
                picks.take(exercise, None);
            }
        }
    }
}

struct Picks<'a> {
    exercises: Vec<&'a Exercise>,
    ids: BTreeSet<ExerciseID>,
    covered: BTreeSet<SubRegion>,
    used_patterns: BTreeSet<MovementPattern>,
}

impl<'a> Picks<'a> {
    fn new(used_patterns: BTreeSet<MovementPattern>) -> Self {
        Self {
            exercises: vec![],
            ids: BTreeSet::new(),
            covered: BTreeSet::new(),
            used_patterns,
        }
    }

    fn len(&self) -> usize {
        self.exercises.len()
    }

    fn contains(&self, id: ExerciseID) -> bool {
        self.ids.contains(&id)
    }

    fn is_available(
        &self,
        exercise: &Exercise,
        pattern: Option<MovementPattern>,
        excluded: &BTreeSet<ExerciseID>,
    ) -> bool {
        !self.contains(exercise.id)
            && !excluded.contains(&exercise.id)
            && pattern.is_none_or(|p| !self.used_patterns.contains(&p))
    }

    fn score(&self, exercise: &Exercise) -> u32 {
        if self.covered.contains(&exercise.sub_region) {
            exercise.tier.rank()
        } else {
            exercise.tier.rank() + UNCOVERED_SUB_REGION_BONUS
        }
    }

    fn take(&mut self, exercise: &'a Exercise, pattern: Option<MovementPattern>) {
        self.exercises.push(exercise);
        self.ids.insert(exercise.id);
        self.covered.insert(exercise.sub_region);
        if let Some(pattern) = pattern {
            self.used_patterns.insert(pattern);
        }
    }
}
