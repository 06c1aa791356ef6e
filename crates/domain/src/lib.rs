#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod context;
mod engine;
mod error;
mod exercise;
mod generator;
mod label;
mod name;
mod volume;

use std::{slice::Iter, str::FromStr};

pub use context::{
    Ceiling, ContextualFilterContext, ExecutionLocation, IntentMode, LifestylePersona,
    ProgramFilter,
};
pub use engine::{
    ActiveFilter, ContextualEngine, ContextualFilterResult, EngineConfig, ExclusionReason,
    MechanicalBalance, ScoreContribution, ScoreFactor, ScoredExercise, filter_and_score,
};
pub use error::ExerciseError;
pub use exercise::{
    Equipment, Exercise, ExerciseID, InjuryArea, Intensity, IntensityError, Level, LevelError,
    MechanicalType, PriorityTier, ProgramID, ProgramIDError,
};
pub use generator::{
    BlastInterval, BlastMode, BlastStructure, EnergyLevel, GeneratedWorkout, GenerationParams,
    GeneratorConfig, VolumeAdjustment, WorkoutExercise, WorkoutGenerator, generate_workout,
};
pub use label::{CueTrigger, Label, LabelKey, LabelResolver, LabelTags};
pub use name::{LocalizedName, Name, NameError};
pub use volume::{
    Prescription, ReductionBand, Reps, RepsError, TierVolume, Time, TimeError, reduce_sets,
    reduction_percent,
};

/// Closed set of tags with a snake_case key and a display name.
pub trait Property: Clone + Copy + Sized + AsRef<str> + FromStr + 'static {
    const KIND: &'static str;

    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

/// Parses the snake_case key of a property.
pub fn parse_property<T: Property>(value: &str) -> Result<T, ExerciseError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ExerciseError::UnknownProperty {
            kind: T::KIND,
            value: value.to_string(),
        })
}
