use std::{
    collections::{BTreeMap, BTreeSet},
    slice::Iter,
};

use derive_more::{AsRef, Deref, Display, Into};
use uuid::Uuid;

use crate::{ExecutionLocation, LifestylePersona, LocalizedName, Property};

/// Catalog entry as delivered by the content-management side. Read-only for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: LocalizedName,
    pub mechanical_type: MechanicalType,
    pub equipment: Vec<Equipment>,
    pub noise_level: Option<Intensity>,
    pub sweat_level: Option<Intensity>,
    /// Locations the exercise may be executed at, empty if unrestricted.
    pub locations: BTreeSet<ExecutionLocation>,
    /// Personas the exercise is restricted to, empty if unrestricted.
    pub personas: BTreeSet<LifestylePersona>,
    pub program_levels: BTreeMap<ProgramID, Level>,
    pub injury_shield: BTreeSet<InjuryArea>,
    pub field_ready: bool,
    pub time_based: bool,
    pub tier: Option<PriorityTier>,
}

impl Exercise {
    /// Noise and sweat levels are required for the location constraint.
    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.noise_level.is_some() && self.sweat_level.is_some()
    }

    #[must_use]
    pub fn requires_equipment(&self) -> bool {
        !self.equipment.is_empty()
    }

    #[must_use]
    pub fn priority_tier(&self) -> PriorityTier {
        self.tier.unwrap_or(match self.mechanical_type {
            MechanicalType::StraightArm => PriorityTier::Skill,
            MechanicalType::BentArm | MechanicalType::Hybrid => PriorityTier::Compound,
            MechanicalType::None => PriorityTier::Accessory,
        })
    }

    #[must_use]
    pub fn level_for(&self, program: &ProgramID) -> Option<Level> {
        self.program_levels.get(program).copied()
    }

    #[must_use]
    pub fn lowest_level(&self) -> Option<Level> {
        self.program_levels.values().min().copied()
    }

    /// Mapped level nearest to `level`, preferring the lower one on a tie.
    #[must_use]
    pub fn closest_level(&self, level: Level) -> Option<Level> {
        self.program_levels
            .values()
            .copied()
            .min_by_key(|l| (l.distance(level), *l))
    }

    #[must_use]
    pub fn stresses_any(&self, areas: &BTreeSet<InjuryArea>) -> bool {
        !self.injury_shield.is_disjoint(areas)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Debug, Display, Clone, Copy, Into, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(99);

    pub fn new(value: u8) -> Result<Self, LevelError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(LevelError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn distance(self, other: Level) -> u8 {
        self.0.abs_diff(other.0)
    }

    #[must_use]
    pub fn saturating_add(self, value: u8) -> Level {
        Level(self.0.saturating_add(value).min(Self::MAX.0))
    }

    #[must_use]
    pub fn saturating_sub(self, value: u8) -> Level {
        Level(self.0.saturating_sub(value).max(Self::MIN.0))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LevelError {
    #[error("Level must be in the range 1 to 99 ({0})")]
    OutOfRange(u8),
}

/// Ordinal noise or sweat rating of an exercise, or a ceiling of a location.
#[derive(Deref, Debug, Display, Clone, Copy, Into, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Intensity(u8);

impl Intensity {
    pub const LOW: Intensity = Intensity(1);
    pub const MEDIUM: Intensity = Intensity(2);
    pub const HIGH: Intensity = Intensity(3);

    pub fn new(value: u8) -> Result<Self, IntensityError> {
        if !(1..=3).contains(&value) {
            return Err(IntensityError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

impl TryFrom<u8> for Intensity {
    type Error = IntensityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Intensity::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IntensityError {
    #[error("Intensity must be in the range 1 to 3 ({0})")]
    OutOfRange(u8),
}

#[derive(AsRef, Deref, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgramID(String);

impl ProgramID {
    pub fn new(id: &str) -> Result<Self, ProgramIDError> {
        let id = id.trim();

        if id.is_empty() {
            return Err(ProgramIDError::Empty);
        }

        if id.chars().any(char::is_whitespace) {
            return Err(ProgramIDError::Whitespace(id.to_string()));
        }

        Ok(Self(id.to_lowercase()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProgramIDError {
    #[error("Program id must not be empty")]
    Empty,
    #[error("Program id must not contain whitespace (\"{0}\")")]
    Whitespace(String),
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum MechanicalType {
    StraightArm,
    BentArm,
    Hybrid,
    None,
}

impl Property for MechanicalType {
    const KIND: &'static str = "mechanical type";

    fn iter() -> Iter<'static, MechanicalType> {
        static MECHANICAL_TYPE: [MechanicalType; 4] = [
            MechanicalType::StraightArm,
            MechanicalType::BentArm,
            MechanicalType::Hybrid,
            MechanicalType::None,
        ];
        MECHANICAL_TYPE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MechanicalType::StraightArm => "Straight Arm",
            MechanicalType::BentArm => "Bent Arm",
            MechanicalType::Hybrid => "Hybrid",
            MechanicalType::None => "None",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    Bench,
    Box,
    Dumbbell,
    GymnasticRings,
    Kettlebell,
    LowBar,
    ParallelBars,
    PullUpBar,
    ResistanceBand,
    SuspensionTrainer,
    WallBars,
}

impl Property for Equipment {
    const KIND: &'static str = "equipment";

    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 11] = [
            Equipment::Bench,
            Equipment::Box,
            Equipment::Dumbbell,
            Equipment::GymnasticRings,
            Equipment::Kettlebell,
            Equipment::LowBar,
            Equipment::ParallelBars,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::SuspensionTrainer,
            Equipment::WallBars,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bench => "Bench",
            Equipment::Box => "Box",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::GymnasticRings => "Gymnastic Rings",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::LowBar => "Low Bar",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::SuspensionTrainer => "Suspension Trainer",
            Equipment::WallBars => "Wall Bars",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum InjuryArea {
    Neck,
    Shoulder,
    Elbow,
    Wrist,
    LowerBack,
    Hip,
    Knee,
    Ankle,
}

impl Property for InjuryArea {
    const KIND: &'static str = "injury area";

    fn iter() -> Iter<'static, InjuryArea> {
        static INJURY_AREA: [InjuryArea; 8] = [
            InjuryArea::Neck,
            InjuryArea::Shoulder,
            InjuryArea::Elbow,
            InjuryArea::Wrist,
            InjuryArea::LowerBack,
            InjuryArea::Hip,
            InjuryArea::Knee,
            InjuryArea::Ankle,
        ];
        INJURY_AREA.iter()
    }

    fn name(self) -> &'static str {
        match self {
            InjuryArea::Neck => "Neck",
            InjuryArea::Shoulder => "Shoulder",
            InjuryArea::Elbow => "Elbow",
            InjuryArea::Wrist => "Wrist",
            InjuryArea::LowerBack => "Lower Back",
            InjuryArea::Hip => "Hip",
            InjuryArea::Knee => "Knee",
            InjuryArea::Ankle => "Ankle",
        }
    }
}

/// Sequencing priority inside a generated workout. Declaration order is sequencing order.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum PriorityTier {
    Skill,
    Compound,
    Accessory,
    Isolation,
}

impl Property for PriorityTier {
    const KIND: &'static str = "priority tier";

    fn iter() -> Iter<'static, PriorityTier> {
        static PRIORITY_TIER: [PriorityTier; 4] = [
            PriorityTier::Skill,
            PriorityTier::Compound,
            PriorityTier::Accessory,
            PriorityTier::Isolation,
        ];
        PRIORITY_TIER.iter()
    }

    fn name(self) -> &'static str {
        match self {
            PriorityTier::Skill => "Skill",
            PriorityTier::Compound => "Compound",
            PriorityTier::Accessory => "Accessory",
            PriorityTier::Isolation => "Isolation",
        }
    }
}
