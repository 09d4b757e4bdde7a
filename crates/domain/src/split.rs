use std::collections::BTreeMap;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

use crate::{Gender, MuscleGroup, SubRegion};

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
pub enum SplitType {
    Push,
    Pull,
    Legs,
    Upper,
    FullBody,
}

impl SplitType {
    /// Sub-regions trained by a muscle group on this kind of day.
    #[must_use]
    pub fn sub_regions(self, muscle_group: MuscleGroup) -> &'static [SubRegion] {
        use MuscleGroup as M;
        use SubRegion as S;

        match (self, muscle_group) {
            (SplitType::Push, M::Chest) => &[S::UpperChest, S::MidChest, S::LowerChest],
            (SplitType::Push, M::Shoulders) => &[S::FrontDelt, S::SideDelt],
            (SplitType::Push, M::Arms) => &[S::TricepsLateralMedial, S::TricepsLongHead],
            (SplitType::Pull, M::Back) | (SplitType::Upper, M::Back) => &[S::UpperBack, S::Lats],
            (SplitType::Pull, M::Shoulders) => &[S::RearDelt],
            (SplitType::Pull, M::Arms) => &[S::BicepsShortHead, S::BicepsLongHead],
            (SplitType::Legs, M::Legs) => &[S::Quadriceps, S::Hamstrings, S::Glutes],
            (SplitType::Legs, M::Back) => &[S::LowerBack],
            (SplitType::Upper, M::Chest) => &[S::UpperChest, S::MidChest],
            (SplitType::Upper, M::Shoulders) => &[S::FrontDelt, S::SideDelt, S::RearDelt],
            (SplitType::Upper | SplitType::FullBody, M::Arms) => {
                &[S::BicepsLongHead, S::TricepsLongHead]
            }
            (SplitType::FullBody, M::Chest) => &[S::MidChest, S::UpperChest],
            (SplitType::FullBody, M::Back) => &[S::Lats, S::UpperBack],
            (SplitType::FullBody, M::Shoulders) => &[S::SideDelt],
            (SplitType::FullBody, M::Legs) => &[S::Quadriceps, S::Glutes],
            _ => &[],
        }
    }

    /// Target sub-regions per muscle group after applying the gender adjustments.
    ///
    /// Muscle groups whose sub-regions are all excluded are left out, so that selection falls
    /// back to the full sub-region set of that group.
    #[must_use]
    pub fn target_sub_regions(
        self,
        gender: Gender,
        muscle_groups: &[MuscleGroup],
    ) -> BTreeMap<MuscleGroup, Vec<SubRegion>> {
        let excluded = gender.excluded_sub_regions();
        let mut targets = BTreeMap::new();

        for muscle_group in muscle_groups {
            let mut sub_regions = self
                .sub_regions(*muscle_group)
                .iter()
                .copied()
                .filter(|s| !excluded.contains(s))
                .collect::<Vec<_>>();

            if *muscle_group == MuscleGroup::Legs && gender.prioritizes_glutes() {
                if let Some(i) = sub_regions.iter().position(|s| *s == SubRegion::Glutes) {
                    let glutes = sub_regions.remove(i);
                    sub_regions.insert(0, glutes);
                }
            }

            if !sub_regions.is_empty() {
                targets.insert(*muscle_group, sub_regions);
            }
        }

        targets
    }
}

#[derive(
    AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case")]
pub enum VariantGroup {
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
}

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
pub enum Variant {
    A,
    B,
    C,
}

/// Marks a day as one of several rotating versions of the same archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayVariant {
    pub group: VariantGroup,
    pub label: Variant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTemplate {
    pub name: &'static str,
    pub split_type: SplitType,
    pub variant: Option<DayVariant>,
    pub muscle_groups: &'static [MuscleGroup],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTemplate {
    pub name: &'static str,
    pub days: &'static [DayTemplate],
}

impl SplitTemplate {
    #[must_use]
    pub fn for_days(days_per_week: u8) -> Option<&'static SplitTemplate> {
        SPLITS.iter().find(|s| s.days.len() == usize::from(days_per_week))
    }
}

const FULL_BODY: &[MuscleGroup] = &[
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Legs,
    MuscleGroup::Shoulders,
    MuscleGroup::Arms,
];
const UPPER: &[MuscleGroup] = &[
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Arms,
];
const PUSH: &[MuscleGroup] = &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Arms];
const PULL: &[MuscleGroup] = &[MuscleGroup::Back, MuscleGroup::Arms];
const LEGS: &[MuscleGroup] = &[MuscleGroup::Legs];

const fn day(
    name: &'static str,
    split_type: SplitType,
    variant: Option<(VariantGroup, Variant)>,
    muscle_groups: &'static [MuscleGroup],
) -> DayTemplate {
    DayTemplate {
        name,
        split_type,
        variant: match variant {
            Some((group, label)) => Some(DayVariant { group, label }),
            None => None,
        },
        muscle_groups,
    }
}

static SPLITS: [SplitTemplate; 4] = [
    SplitTemplate {
        name: "Full Body 3x/week",
        days: &[
            day(
                "Full Body A",
                SplitType::FullBody,
                Some((VariantGroup::FullBody, Variant::A)),
                FULL_BODY,
            ),
            day(
                "Full Body B",
                SplitType::FullBody,
                Some((VariantGroup::FullBody, Variant::B)),
                FULL_BODY,
            ),
            day(
                "Full Body C",
                SplitType::FullBody,
                Some((VariantGroup::FullBody, Variant::C)),
                FULL_BODY,
            ),
        ],
    },
    SplitTemplate {
        name: "Upper/Lower 4x/week",
        days: &[
            day(
                "Upper A",
                SplitType::Upper,
                Some((VariantGroup::Upper, Variant::A)),
                UPPER,
            ),
            day(
                "Lower A",
                SplitType::Legs,
                Some((VariantGroup::Lower, Variant::A)),
                LEGS,
            ),
            day(
                "Upper B",
                SplitType::Upper,
                Some((VariantGroup::Upper, Variant::B)),
                UPPER,
            ),
            day(
                "Lower B",
                SplitType::Legs,
                Some((VariantGroup::Lower, Variant::B)),
                LEGS,
            ),
        ],
    },
    SplitTemplate {
        name: "Push/Pull/Legs 5x/week",
        days: &[
            day("Push", SplitType::Push, None, PUSH),
            day("Pull", SplitType::Pull, None, PULL),
            day("Legs", SplitType::Legs, None, LEGS),
            day("Upper", SplitType::Upper, None, UPPER),
            day("Lower", SplitType::Legs, None, LEGS),
        ],
    },
    SplitTemplate {
        name: "Push/Pull/Legs 6x/week",
        days: &[
            day(
                "Push A",
                SplitType::Push,
                Some((VariantGroup::Push, Variant::A)),
                PUSH,
            ),
            day(
                "Pull A",
                SplitType::Pull,
                Some((VariantGroup::Pull, Variant::A)),
                PULL,
            ),
            day(
                "Legs A",
                SplitType::Legs,
                Some((VariantGroup::Legs, Variant::A)),
                LEGS,
            ),
            day(
                "Push B",
                SplitType::Push,
                Some((VariantGroup::Push, Variant::B)),
                PUSH,
            ),
            day(
                "Pull B",
                SplitType::Pull,
                Some((VariantGroup::Pull, Variant::B)),
                PULL,
            ),
            day(
                "Legs B",
                SplitType::Legs,
                Some((VariantGroup::Legs, Variant::B)),
                LEGS,
            ),
        ],
    },
];
