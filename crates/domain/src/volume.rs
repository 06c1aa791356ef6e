use std::ops::Mul;

use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl Mul<Time> for Reps {
    type Output = Time;

    fn mul(self, rhs: Time) -> Self::Output {
        Time(self.0 * rhs.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
}

/// Duration in seconds.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(u32);

impl Time {
    pub(crate) const fn from_secs(value: u32) -> Self {
        Self(value)
    }

    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..3600).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn seconds(self) -> u32 {
        self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 3599 s")]
    OutOfRange,
}

/// Work prescribed for one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prescription {
    Reps(Reps),
    Hold(Time),
}

impl Prescription {
    #[must_use]
    pub fn duration(self, time_per_rep: Time) -> Time {
        match self {
            Prescription::Reps(reps) => reps * time_per_rep,
            Prescription::Hold(time) => time,
        }
    }
}

/// Base prescription for a priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierVolume {
    pub sets: u32,
    pub reps: Reps,
    pub hold: Time,
    pub rest: Time,
}

impl TierVolume {
    #[must_use]
    pub const fn new(sets: u32, reps: u32, hold: u32, rest: u32) -> Self {
        Self {
            sets,
            reps: Reps(reps),
            hold: Time(hold),
            rest: Time(rest),
        }
    }

    #[must_use]
    pub fn prescription(&self, time_based: bool) -> Prescription {
        if time_based {
            Prescription::Hold(self.hold)
        } else {
            Prescription::Reps(self.reps)
        }
    }
}

/// Set reduction applied once a user has been inactive for at least `min_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionBand {
    pub min_days: u32,
    pub percent: u8,
}

/// Largest reduction of all bands reached by `days_inactive`.
#[must_use]
pub fn reduction_percent(bands: &[ReductionBand], days_inactive: u32) -> u8 {
    bands
        .iter()
        .filter(|b| days_inactive >= b.min_days)
        .map(|b| b.percent.min(100))
        .max()
        .unwrap_or(0)
}

/// Never drops below one set.
#[must_use]
pub fn reduce_sets(sets: u32, percent: u8) -> u32 {
    (sets * u32::from(100 - percent.min(100)) / 100).max(1)
}
