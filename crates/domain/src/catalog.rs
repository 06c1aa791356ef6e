//! Built-in sample catalog of a typical outdoor fitness park.

use std::sync::LazyLock;

use log::error;

use crate::{
    Equipment, ExecutionLocation, Exercise, ExerciseError, ExerciseID, InjuryArea, Intensity,
    Level, LifestylePersona, LocalizedName, MechanicalType, Name, PriorityTier, ProgramID,
};

pub const CALISTHENICS: &str = "calisthenics";
pub const MOBILITY: &str = "mobility";

/// All sample exercises in declaration order, variants following their base exercise.
#[must_use]
pub fn exercises() -> Vec<Exercise> {
    EXERCISES.clone()
}

static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    EXERCISE_VARIANTS
        .iter()
        .flat_map(|e| std::iter::once(e.clone()).chain(e.variants.iter().map(|v| v.apply(e))))
        .enumerate()
        .filter_map(|(i, e)| match e.build(i as u128 + 1) {
            Ok(exercise) => Some(exercise),
            Err(err) => {
                error!("invalid catalog exercise \"{}\": {err}", e.name);
                None
            }
        })
        .collect()
});

#[derive(Clone)]
struct BaseExercise {
    name: &'static str,
    translations: &'static [(&'static str, &'static str)],
    mechanical_type: MechanicalType,
    equipment: &'static [Equipment],
    noise: u8,
    sweat: u8,
    locations: &'static [ExecutionLocation],
    personas: &'static [LifestylePersona],
    levels: &'static [(&'static str, u8)],
    injury_shield: &'static [InjuryArea],
    field_ready: bool,
    time_based: bool,
    tier: Option<PriorityTier>,
    variants: &'static [ExerciseVariant],
}

impl BaseExercise {
    const fn default() -> Self {
        Self {
            name: "",
            translations: &[],
            mechanical_type: MechanicalType::None,
            equipment: &[],
            noise: 1,
            sweat: 1,
            locations: &[],
            personas: &[],
            levels: &[],
            injury_shield: &[],
            field_ready: false,
            time_based: false,
            tier: None,
            variants: &[],
        }
    }

    fn build(&self, id: u128) -> Result<Exercise, ExerciseError> {
        let mut name = LocalizedName::new(Name::new(self.name)?);
        for (locale, translation) in self.translations {
            name = name.with_translation(locale, Name::new(translation)?);
        }

        Ok(Exercise {
            id: ExerciseID::from(id),
            name,
            mechanical_type: self.mechanical_type,
            equipment: self.equipment.to_vec(),
            noise_level: Some(Intensity::new(self.noise)?),
            sweat_level: Some(Intensity::new(self.sweat)?),
            locations: self.locations.iter().copied().collect(),
            personas: self.personas.iter().copied().collect(),
            program_levels: self
                .levels
                .iter()
                .map(|(program, level)| Ok((ProgramID::new(program)?, Level::new(*level)?)))
                .collect::<Result<_, ExerciseError>>()?,
            injury_shield: self.injury_shield.iter().copied().collect(),
            field_ready: self.field_ready,
            time_based: self.time_based,
            tier: self.tier,
        })
    }
}

struct ExerciseVariant {
    name: &'static str,
    mechanical_type: Option<MechanicalType>,
    equipment: Option<&'static [Equipment]>,
    noise: Option<u8>,
    sweat: Option<u8>,
    levels: Option<&'static [(&'static str, u8)]>,
    injury_shield: Option<&'static [InjuryArea]>,
    field_ready: Option<bool>,
    time_based: Option<bool>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            name: "",
            mechanical_type: None,
            equipment: None,
            noise: None,
            sweat: None,
            levels: None,
            injury_shield: None,
            field_ready: None,
            time_based: None,
        }
    }

    fn apply(&self, base: &BaseExercise) -> BaseExercise {
        BaseExercise {
            name: self.name,
            translations: &[],
            mechanical_type: self.mechanical_type.unwrap_or(base.mechanical_type),
            equipment: self.equipment.unwrap_or(base.equipment),
            noise: self.noise.unwrap_or(base.noise),
            sweat: self.sweat.unwrap_or(base.sweat),
            levels: self.levels.unwrap_or(base.levels),
            injury_shield: self.injury_shield.unwrap_or(base.injury_shield),
            field_ready: self.field_ready.unwrap_or(base.field_ready),
            time_based: self.time_based.unwrap_or(base.time_based),
            variants: &[],
            ..base.clone()
        }
    }
}

const EXERCISE_VARIANTS: [BaseExercise; 24] = [
    BaseExercise {
        name: "Pull-Up",
        translations: &[("he", "מתח")],
        mechanical_type: MechanicalType::BentArm,
        equipment: &[Equipment::PullUpBar],
        noise: 1,
        sweat: 2,
        levels: &[(CALISTHENICS, 6)],
        injury_shield: &[InjuryArea::Shoulder, InjuryArea::Elbow],
        tier: Some(PriorityTier::Compound),
        variants: &[
            ExerciseVariant {
                name: "Band Assisted Pull-Up",
                equipment: Some(&[Equipment::PullUpBar, Equipment::ResistanceBand]),
                levels: Some(&[(CALISTHENICS, 4)]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Chin-Up",
                levels: Some(&[(CALISTHENICS, 5)]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Archer Pull-Up",
                sweat: Some(3),
                levels: Some(&[(CALISTHENICS, 12)]),
                ..ExerciseVariant::default()
            },
        ],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Australian Row",
        translations: &[("he", "חתירה אוסטרלית")],
        mechanical_type: MechanicalType::BentArm,
        equipment: &[Equipment::LowBar],
        noise: 1,
        sweat: 1,
        levels: &[(CALISTHENICS, 2)],
        injury_shield: &[InjuryArea::Elbow],
        variants: &[ExerciseVariant {
            name: "Ring Row",
            equipment: Some(&[Equipment::GymnasticRings]),
            levels: Some(&[(CALISTHENICS, 3)]),
            ..ExerciseVariant::default()
        }],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Dip",
        translations: &[("he", "מקבילים")],
        mechanical_type: MechanicalType::BentArm,
        equipment: &[Equipment::ParallelBars],
        noise: 1,
        sweat: 2,
        levels: &[(CALISTHENICS, 5)],
        injury_shield: &[InjuryArea::Shoulder, InjuryArea::Wrist],
        variants: &[
            ExerciseVariant {
                name: "Bench Dip",
                equipment: Some(&[Equipment::Bench]),
                levels: Some(&[(CALISTHENICS, 2)]),
                sweat: Some(1),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Ring Dip",
                equipment: Some(&[Equipment::GymnasticRings]),
                levels: Some(&[(CALISTHENICS, 10)]),
                ..ExerciseVariant::default()
            },
        ],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Push-Up",
        translations: &[("he", "שכיבות סמיכה")],
        mechanical_type: MechanicalType::BentArm,
        noise: 1,
        sweat: 2,
        levels: &[(CALISTHENICS, 3)],
        injury_shield: &[InjuryArea::Wrist],
        field_ready: true,
        variants: &[
            ExerciseVariant {
                name: "Incline Push-Up",
                equipment: Some(&[Equipment::Bench]),
                levels: Some(&[(CALISTHENICS, 1)]),
                sweat: Some(1),
                field_ready: Some(false),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Diamond Push-Up",
                levels: Some(&[(CALISTHENICS, 5)]),
                injury_shield: Some(&[InjuryArea::Wrist, InjuryArea::Elbow]),
                ..ExerciseVariant::default()
            },
        ],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Pike Push-Up",
        mechanical_type: MechanicalType::BentArm,
        noise: 1,
        sweat: 2,
        levels: &[(CALISTHENICS, 6)],
        injury_shield: &[InjuryArea::Shoulder, InjuryArea::Wrist],
        field_ready: true,
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Dead Hang",
        translations: &[("he", "תלייה")],
        mechanical_type: MechanicalType::StraightArm,
        equipment: &[Equipment::PullUpBar],
        noise: 1,
        sweat: 1,
        levels: &[(CALISTHENICS, 1), (MOBILITY, 1)],
        injury_shield: &[InjuryArea::Shoulder],
        time_based: true,
        variants: &[ExerciseVariant {
            name: "Active Hang",
            levels: Some(&[(CALISTHENICS, 2)]),
            ..ExerciseVariant::default()
        }],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Tuck Front Lever",
        mechanical_type: MechanicalType::StraightArm,
        equipment: &[Equipment::PullUpBar],
        noise: 1,
        sweat: 2,
        levels: &[(CALISTHENICS, 9)],
        injury_shield: &[InjuryArea::Shoulder, InjuryArea::LowerBack],
        time_based: true,
        tier: Some(PriorityTier::Skill),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Support Hold",
        mechanical_type: MechanicalType::StraightArm,
        equipment: &[Equipment::ParallelBars],
        noise: 1,
        sweat: 1,
        levels: &[(CALISTHENICS, 3)],
        injury_shield: &[InjuryArea::Shoulder, InjuryArea::Wrist],
        time_based: true,
        variants: &[ExerciseVariant {
            name: "L-Sit",
            levels: Some(&[(CALISTHENICS, 7)]),
            sweat: Some(2),
            ..ExerciseVariant::default()
        }],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Plank",
        translations: &[("he", "פלאנק")],
        mechanical_type: MechanicalType::StraightArm,
        noise: 1,
        sweat: 1,
        levels: &[(CALISTHENICS, 1)],
        injury_shield: &[InjuryArea::LowerBack],
        field_ready: true,
        time_based: true,
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Bodyweight Squat",
        translations: &[("he", "סקוואט")],
        noise: 1,
        sweat: 2,
        levels: &[(CALISTHENICS, 1)],
        injury_shield: &[InjuryArea::Knee],
        field_ready: true,
        variants: &[
            ExerciseVariant {
                name: "Jump Squat",
                noise: Some(3),
                sweat: Some(3),
                levels: Some(&[(CALISTHENICS, 4)]),
                injury_shield: Some(&[InjuryArea::Knee, InjuryArea::Ankle]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Pistol Squat",
                levels: Some(&[(CALISTHENICS, 11)]),
                ..ExerciseVariant::default()
            },
        ],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Wall Sit",
        noise: 1,
        sweat: 1,
        personas: &[LifestylePersona::OfficeWorker, LifestylePersona::Senior],
        injury_shield: &[InjuryArea::Knee],
        field_ready: true,
        time_based: true,
        tier: Some(PriorityTier::Isolation),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Step-Up",
        equipment: &[Equipment::Bench],
        noise: 2,
        sweat: 2,
        levels: &[(CALISTHENICS, 2)],
        injury_shield: &[InjuryArea::Knee],
        variants: &[ExerciseVariant {
            name: "Box Jump",
            equipment: Some(&[Equipment::Box]),
            noise: Some(3),
            sweat: Some(3),
            levels: Some(&[(CALISTHENICS, 5)]),
            injury_shield: Some(&[InjuryArea::Knee, InjuryArea::Ankle]),
            ..ExerciseVariant::default()
        }],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Walking Lunge",
        noise: 1,
        sweat: 2,
        locations: &[
            ExecutionLocation::Park,
            ExecutionLocation::Street,
            ExecutionLocation::Gym,
            ExecutionLocation::School,
        ],
        levels: &[(CALISTHENICS, 2)],
        injury_shield: &[InjuryArea::Knee],
        field_ready: true,
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Calf Raise",
        noise: 1,
        sweat: 1,
        levels: &[(CALISTHENICS, 1)],
        injury_shield: &[InjuryArea::Ankle],
        field_ready: true,
        tier: Some(PriorityTier::Isolation),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Glute Bridge",
        noise: 1,
        sweat: 1,
        levels: &[(CALISTHENICS, 1), (MOBILITY, 2)],
        injury_shield: &[InjuryArea::LowerBack],
        field_ready: true,
        personas: &[
            LifestylePersona::Parent,
            LifestylePersona::OfficeWorker,
            LifestylePersona::Senior,
        ],
        tier: Some(PriorityTier::Accessory),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Burpee",
        translations: &[("he", "ברפי")],
        mechanical_type: MechanicalType::Hybrid,
        noise: 3,
        sweat: 3,
        levels: &[(CALISTHENICS, 4)],
        injury_shield: &[InjuryArea::Wrist, InjuryArea::Knee],
        field_ready: true,
        personas: &[LifestylePersona::Athlete, LifestylePersona::Soldier],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Mountain Climber",
        mechanical_type: MechanicalType::Hybrid,
        noise: 2,
        sweat: 3,
        levels: &[(CALISTHENICS, 2)],
        injury_shield: &[InjuryArea::Wrist],
        field_ready: true,
        time_based: true,
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Bear Crawl",
        mechanical_type: MechanicalType::Hybrid,
        noise: 1,
        sweat: 2,
        locations: &[ExecutionLocation::Park, ExecutionLocation::Home],
        levels: &[(CALISTHENICS, 3)],
        injury_shield: &[InjuryArea::Wrist, InjuryArea::Shoulder],
        field_ready: true,
        time_based: true,
        personas: &[
            LifestylePersona::Parent,
            LifestylePersona::Soldier,
            LifestylePersona::Athlete,
        ],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Hanging Knee Raise",
        mechanical_type: MechanicalType::StraightArm,
        equipment: &[Equipment::PullUpBar],
        noise: 1,
        sweat: 2,
        levels: &[(CALISTHENICS, 4)],
        injury_shield: &[InjuryArea::Shoulder, InjuryArea::Hip],
        tier: Some(PriorityTier::Accessory),
        variants: &[ExerciseVariant {
            name: "Wall Bar Leg Raise",
            equipment: Some(&[Equipment::WallBars]),
            levels: Some(&[(CALISTHENICS, 3)]),
            ..ExerciseVariant::default()
        }],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Suspension Row",
        mechanical_type: MechanicalType::BentArm,
        equipment: &[Equipment::SuspensionTrainer],
        noise: 1,
        sweat: 1,
        levels: &[(CALISTHENICS, 2)],
        injury_shield: &[InjuryArea::Elbow],
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Band Pull Apart",
        equipment: &[Equipment::ResistanceBand],
        noise: 1,
        sweat: 1,
        personas: &[LifestylePersona::OfficeWorker, LifestylePersona::Traveler],
        injury_shield: &[InjuryArea::Shoulder],
        tier: Some(PriorityTier::Isolation),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Seated Neck Stretch",
        noise: 1,
        sweat: 1,
        levels: &[(MOBILITY, 1)],
        injury_shield: &[InjuryArea::Neck],
        time_based: true,
        personas: &[
            LifestylePersona::OfficeWorker,
            LifestylePersona::Student,
            LifestylePersona::Traveler,
        ],
        tier: Some(PriorityTier::Isolation),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Hip Flexor Stretch",
        noise: 1,
        sweat: 1,
        levels: &[(MOBILITY, 2)],
        injury_shield: &[InjuryArea::Hip],
        field_ready: true,
        time_based: true,
        tier: Some(PriorityTier::Isolation),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "High Knees",
        mechanical_type: MechanicalType::None,
        noise: 3,
        sweat: 3,
        locations: &[ExecutionLocation::Park, ExecutionLocation::Street],
        levels: &[(CALISTHENICS, 1)],
        injury_shield: &[InjuryArea::Knee, InjuryArea::Ankle],
        field_ready: true,
        time_based: true,
        ..BaseExercise::default()
    },
];
