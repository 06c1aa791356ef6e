use std::{collections::BTreeSet, ops::RangeInclusive, slice::Iter};

use crate::{Equipment, InjuryArea, Intensity, Level, ProgramID, Property};

/// Situational parameters of a single workout request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContextualFilterContext {
    pub location: ExecutionLocation,
    pub lifestyles: BTreeSet<LifestylePersona>,
    pub injury_shield: BTreeSet<InjuryArea>,
    pub intent: IntentMode,
    pub equipment: BTreeSet<Equipment>,
    pub user_level: Level,
    pub program: Option<ProgramFilter>,
}

impl ContextualFilterContext {
    #[must_use]
    pub fn ceiling(&self) -> Ceiling {
        self.intent.effective_ceiling(self.location)
    }

    #[must_use]
    pub fn has_all_equipment(&self, required: &[Equipment]) -> bool {
        required.iter().all(|e| self.equipment.contains(e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramFilter {
    pub program: ProgramID,
    pub tolerance: u8,
}

impl ProgramFilter {
    #[must_use]
    pub fn window(&self, user_level: Level) -> RangeInclusive<Level> {
        user_level.saturating_sub(self.tolerance)..=user_level.saturating_add(self.tolerance)
    }
}

/// Noise and sweat limits. A missing sweat limit means sweat is not constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ceiling {
    pub noise: Intensity,
    pub sweat: Option<Intensity>,
}

impl Ceiling {
    #[must_use]
    pub fn admits(&self, noise: Intensity, sweat: Intensity) -> bool {
        noise <= self.noise && self.sweat.is_none_or(|ceiling| sweat <= ceiling)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ExecutionLocation {
    Home,
    #[default]
    Park,
    Street,
    Office,
    Gym,
    Library,
    Airport,
    School,
}

impl ExecutionLocation {
    #[must_use]
    pub fn ceiling(self) -> Ceiling {
        let (noise, sweat) = match self {
            ExecutionLocation::Home => (Intensity::MEDIUM, Intensity::HIGH),
            ExecutionLocation::Park | ExecutionLocation::Gym => (Intensity::HIGH, Intensity::HIGH),
            ExecutionLocation::Street => (Intensity::HIGH, Intensity::MEDIUM),
            ExecutionLocation::Office | ExecutionLocation::Library => {
                (Intensity::LOW, Intensity::LOW)
            }
            ExecutionLocation::Airport => (Intensity::MEDIUM, Intensity::LOW),
            ExecutionLocation::School => (Intensity::MEDIUM, Intensity::MEDIUM),
        };
        Ceiling {
            noise,
            sweat: Some(sweat),
        }
    }
}

impl Property for ExecutionLocation {
    const KIND: &'static str = "location";

    fn iter() -> Iter<'static, ExecutionLocation> {
        static LOCATION: [ExecutionLocation; 8] = [
            ExecutionLocation::Home,
            ExecutionLocation::Park,
            ExecutionLocation::Street,
            ExecutionLocation::Office,
            ExecutionLocation::Gym,
            ExecutionLocation::Library,
            ExecutionLocation::Airport,
            ExecutionLocation::School,
        ];
        LOCATION.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExecutionLocation::Home => "Home",
            ExecutionLocation::Park => "Park",
            ExecutionLocation::Street => "Street",
            ExecutionLocation::Office => "Office",
            ExecutionLocation::Gym => "Gym",
            ExecutionLocation::Library => "Library",
            ExecutionLocation::Airport => "Airport",
            ExecutionLocation::School => "School",
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
pub enum LifestylePersona {
    Parent,
    Student,
    OfficeWorker,
    Athlete,
    Senior,
    Traveler,
    Soldier,
}

impl Property for LifestylePersona {
    const KIND: &'static str = "persona";

    fn iter() -> Iter<'static, LifestylePersona> {
        static PERSONA: [LifestylePersona; 7] = [
            LifestylePersona::Parent,
            LifestylePersona::Student,
            LifestylePersona::OfficeWorker,
            LifestylePersona::Athlete,
            LifestylePersona::Senior,
            LifestylePersona::Traveler,
            LifestylePersona::Soldier,
        ];
        PERSONA.iter()
    }

    fn name(self) -> &'static str {
        match self {
            LifestylePersona::Parent => "Parent",
            LifestylePersona::Student => "Student",
            LifestylePersona::OfficeWorker => "Office Worker",
            LifestylePersona::Athlete => "Athlete",
            LifestylePersona::Senior => "Senior",
            LifestylePersona::Traveler => "Traveler",
            LifestylePersona::Soldier => "Soldier",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum IntentMode {
    #[default]
    Normal,
    Blast,
    OnTheWay,
    Field,
}

impl IntentMode {
    /// Location ceiling after intent overrides.
    #[must_use]
    pub fn effective_ceiling(self, location: ExecutionLocation) -> Ceiling {
        let ceiling = location.ceiling();
        match self {
            IntentMode::Normal | IntentMode::Field => ceiling,
            IntentMode::OnTheWay => Ceiling {
                sweat: Some(Intensity::LOW),
                ..ceiling
            },
            IntentMode::Blast => Ceiling {
                sweat: None,
                ..ceiling
            },
        }
    }
}

impl Property for IntentMode {
    const KIND: &'static str = "intent";

    fn iter() -> Iter<'static, IntentMode> {
        static INTENT: [IntentMode; 4] = [
            IntentMode::Normal,
            IntentMode::Blast,
            IntentMode::OnTheWay,
            IntentMode::Field,
        ];
        INTENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            IntentMode::Normal => "Normal",
            IntentMode::Blast => "Blast",
            IntentMode::OnTheWay => "On the Way",
            IntentMode::Field => "Field",
        }
    }
}
