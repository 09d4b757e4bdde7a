use std::{borrow::Borrow, cmp::Ordering, collections::BTreeSet, slice::Iter};

use derive_more::Deref;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub sub_region: SubRegion,
    pub difficulty: Difficulty,
    pub equipment: &'static [Equipment],
    #[serde(rename = "type")]
    pub mechanic: Mechanic,
    pub tier: Tier,
    pub rest_seconds: u32,
    pub targets: &'static [&'static str],
}

impl Exercise {
    #[must_use]
    pub fn is_top_tier(&self) -> bool {
        self.tier.is_top()
    }

    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.mechanic == Mechanic::Compound
    }

    #[must_use]
    pub fn is_available_with(&self, equipment: &BTreeSet<Equipment>) -> bool {
        self.equipment.iter().all(|e| equipment.contains(e))
    }

    /// Orders by descending tier, then by name and identifier.
    #[must_use]
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        other
            .tier
            .cmp(&self.tier)
            .then_with(|| self.name.cmp(other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}

#[derive(
    Deref, derive_more::Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize,
)]
#[serde(transparent)]
pub struct ExerciseID(&'static str);

impl ExerciseID {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ExerciseID {
    fn borrow(&self) -> &str {
        self.0
    }
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Arms,
    Shoulders,
    Back,
    Legs,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 5] = [
            MuscleGroup::Chest,
            MuscleGroup::Arms,
            MuscleGroup::Shoulders,
            MuscleGroup::Back,
            MuscleGroup::Legs,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
        }
    }
}

impl MuscleGroup {
    #[must_use]
    pub fn sub_regions(self) -> &'static [SubRegion] {
        match self {
            MuscleGroup::Chest => &[
                SubRegion::UpperChest,
                SubRegion::MidChest,
                SubRegion::LowerChest,
            ],
            MuscleGroup::Arms => &[
                SubRegion::BicepsShortHead,
                SubRegion::BicepsLongHead,
                SubRegion::TricepsLateralMedial,
                SubRegion::TricepsLongHead,
            ],
            MuscleGroup::Shoulders => &[
                SubRegion::FrontDelt,
                SubRegion::SideDelt,
                SubRegion::RearDelt,
            ],
            MuscleGroup::Back => &[SubRegion::UpperBack, SubRegion::Lats, SubRegion::LowerBack],
            MuscleGroup::Legs => &[
                SubRegion::Quadriceps,
                SubRegion::Hamstrings,
                SubRegion::Glutes,
            ],
        }
    }
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubRegion {
    UpperChest,
    MidChest,
    LowerChest,
    BicepsShortHead,
    BicepsLongHead,
    TricepsLateralMedial,
    TricepsLongHead,
    FrontDelt,
    SideDelt,
    RearDelt,
    UpperBack,
    Lats,
    LowerBack,
    Quadriceps,
    Hamstrings,
    Glutes,
}

impl Property for SubRegion {
    fn iter() -> Iter<'static, SubRegion> {
        static SUB_REGIONS: [SubRegion; 16] = [
            SubRegion::UpperChest,
            SubRegion::MidChest,
            SubRegion::LowerChest,
            SubRegion::BicepsShortHead,
            SubRegion::BicepsLongHead,
            SubRegion::TricepsLateralMedial,
            SubRegion::TricepsLongHead,
            SubRegion::FrontDelt,
            SubRegion::SideDelt,
            SubRegion::RearDelt,
            SubRegion::UpperBack,
            SubRegion::Lats,
            SubRegion::LowerBack,
            SubRegion::Quadriceps,
            SubRegion::Hamstrings,
            SubRegion::Glutes,
        ];
        SUB_REGIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SubRegion::UpperChest => "Upper Chest",
            SubRegion::MidChest => "Mid Chest",
            SubRegion::LowerChest => "Lower Chest",
            SubRegion::BicepsShortHead => "Biceps Short Head",
            SubRegion::BicepsLongHead => "Biceps Long Head",
            SubRegion::TricepsLateralMedial => "Triceps Lateral/Medial Head",
            SubRegion::TricepsLongHead => "Triceps Long Head",
            SubRegion::FrontDelt => "Front Delts",
            SubRegion::SideDelt => "Side Delts",
            SubRegion::RearDelt => "Rear Delts",
            SubRegion::UpperBack => "Upper Back",
            SubRegion::Lats => "Lats",
            SubRegion::LowerBack => "Lower Back",
            SubRegion::Quadriceps => "Quadriceps",
            SubRegion::Hamstrings => "Hamstrings",
            SubRegion::Glutes => "Glutes",
        }
    }
}

impl SubRegion {
    #[must_use]
    pub fn muscle_group(self) -> MuscleGroup {
        match self {
            SubRegion::UpperChest | SubRegion::MidChest | SubRegion::LowerChest => {
                MuscleGroup::Chest
            }
            SubRegion::BicepsShortHead
            | SubRegion::BicepsLongHead
            | SubRegion::TricepsLateralMedial
            | SubRegion::TricepsLongHead => MuscleGroup::Arms,
            SubRegion::FrontDelt | SubRegion::SideDelt | SubRegion::RearDelt => {
                MuscleGroup::Shoulders
            }
            SubRegion::UpperBack | SubRegion::Lats | SubRegion::LowerBack => MuscleGroup::Back,
            SubRegion::Quadriceps | SubRegion::Hamstrings | SubRegion::Glutes => MuscleGroup::Legs,
        }
    }
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    Bodyweight,
    Dumbbell,
    Barbell,
    #[serde(rename = "barbell_ez")]
    #[strum(serialize = "barbell_ez")]
    EzBar,
    Bench,
    Rack,
    Cable,
    Machine,
    #[serde(rename = "pullup_bar")]
    #[strum(serialize = "pullup_bar")]
    PullUpBar,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 9] = [
            Equipment::Bodyweight,
            Equipment::Dumbbell,
            Equipment::Barbell,
            Equipment::EzBar,
            Equipment::Bench,
            Equipment::Rack,
            Equipment::Cable,
            Equipment::Machine,
            Equipment::PullUpBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Barbell => "Barbell",
            Equipment::EzBar => "EZ Bar",
            Equipment::Bench => "Bench",
            Equipment::Rack => "Rack",
            Equipment::Cable => "Cable",
            Equipment::Machine => "Machine",
            Equipment::PullUpBar => "Pull Up Bar",
        }
    }
}

#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentPreset {
    BodyweightOnly,
    HomeBasic,
    HomeFull,
    CommercialGym,
}

impl Property for EquipmentPreset {
    fn iter() -> Iter<'static, EquipmentPreset> {
        static PRESETS: [EquipmentPreset; 4] = [
            EquipmentPreset::BodyweightOnly,
            EquipmentPreset::HomeBasic,
            EquipmentPreset::HomeFull,
            EquipmentPreset::CommercialGym,
        ];
        PRESETS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            EquipmentPreset::BodyweightOnly => "Bodyweight Only",
            EquipmentPreset::HomeBasic => "Home (Basic)",
            EquipmentPreset::HomeFull => "Home (Full)",
            EquipmentPreset::CommercialGym => "Commercial Gym",
        }
    }
}

impl EquipmentPreset {
    #[must_use]
    pub fn equipment(self) -> BTreeSet<Equipment> {
        match self {
            EquipmentPreset::BodyweightOnly => BTreeSet::from([Equipment::Bodyweight]),
            EquipmentPreset::HomeBasic => {
                BTreeSet::from([Equipment::Bodyweight, Equipment::Dumbbell])
            }
            EquipmentPreset::HomeFull => BTreeSet::from([
                Equipment::Bodyweight,
                Equipment::Dumbbell,
                Equipment::Bench,
                Equipment::PullUpBar,
            ]),
            EquipmentPreset::CommercialGym => Equipment::iter().copied().collect(),
        }
    }
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] =
            [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Mechanic {
    Compound,
    Isolation,
}

impl Property for Mechanic {
    fn iter() -> Iter<'static, Mechanic> {
        static MECHANIC: [Mechanic; 2] = [Mechanic::Compound, Mechanic::Isolation];
        MECHANIC.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Mechanic::Compound => "Compound",
            Mechanic::Isolation => "Isolation",
        }
    }
}

/// Evidence rank of an exercise, ordered from `Untiered` (lowest) to `SPlus` (highest).
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
pub enum Tier {
    #[serde(rename = "-")]
    #[strum(serialize = "-")]
    Untiered,
    D,
    C,
    B,
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPlus,
    A,
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    S,
    #[serde(rename = "S+")]
    #[strum(serialize = "S+")]
    SPlus,
}

impl Property for Tier {
    fn iter() -> Iter<'static, Tier> {
        static TIERS: [Tier; 9] = [
            Tier::SPlus,
            Tier::S,
            Tier::APlus,
            Tier::A,
            Tier::BPlus,
            Tier::B,
            Tier::C,
            Tier::D,
            Tier::Untiered,
        ];
        TIERS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Tier::SPlus => "S+",
            Tier::S => "S",
            Tier::APlus => "A+",
            Tier::A => "A",
            Tier::BPlus => "B+",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
            Tier::Untiered => "Untiered",
        }
    }
}

impl Tier {
    #[must_use]
    pub fn rank(self) -> u32 {
        match self {
            Tier::SPlus => 8,
            Tier::S => 7,
            Tier::APlus => 6,
            Tier::A => 5,
            Tier::BPlus => 4,
            Tier::B => 3,
            Tier::C => 2,
            Tier::D => 1,
            Tier::Untiered => 0,
        }
    }

    /// S+ and S exercises are anchors shared by all variants of a day.
    #[must_use]
    pub fn is_top(self) -> bool {
        self >= Tier::S
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub muscle_group: Option<MuscleGroup>,
    pub sub_region: Option<SubRegion>,
    pub equipment: Option<BTreeSet<Equipment>>,
    pub max_difficulty: Option<Difficulty>,
    pub min_tier: Option<Tier>,
    pub mechanic: Option<Mechanic>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(&self, exercises: impl Iterator<Item = &'a Exercise>) -> Vec<&'a Exercise> {
        let mut result = exercises
            .filter(|e| {
                self.muscle_group.is_none_or(|m| e.muscle_group == m)
                    && self.sub_region.is_none_or(|s| e.sub_region == s)
                    && self
                        .equipment
                        .as_ref()
                        .is_none_or(|equipment| e.is_available_with(equipment))
                    && self.max_difficulty.is_none_or(|d| e.difficulty <= d)
                    && self.min_tier.is_none_or(|t| e.tier >= t)
                    && self.mechanic.is_none_or(|m| e.mechanic == m)
            })
            .collect::<Vec<_>>();
        result.sort_by(|a, b| a.cmp_priority(b));
        result
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.muscle_group.is_none()
            && self.sub_region.is_none()
            && self.equipment.is_none()
            && self.max_difficulty.is_none()
            && self.min_tier.is_none()
            && self.mechanic.is_none()
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
