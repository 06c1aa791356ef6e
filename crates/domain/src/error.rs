use crate::{IntensityError, LevelError, NameError, ProgramIDError};

/// Reasons an exercise record cannot be turned into a catalog entry.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error("invalid id \"{0}\"")]
    ID(String),
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Intensity(#[from] IntensityError),
    #[error(transparent)]
    Program(#[from] ProgramIDError),
    #[error("unknown {kind} \"{value}\"")]
    UnknownProperty { kind: &'static str, value: String },
}
