use std::{fs, path::Path};

use log::LevelFilter;
use parkfit_domain::{self as domain, EngineConfig, GeneratorConfig, ReductionBand};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub locale: String,
    pub log_level: String,
    pub log_history: usize,
    pub max_exercises: usize,
    pub blast_rest_seconds: u32,
    pub balance_skew_threshold: f32,
    pub global_level_headroom: u8,
    pub inactivity_bands: Vec<InactivityBand>,
}

impl Default for Settings {
    fn default() -> Self {
        let engine = EngineConfig::default();
        let generator = GeneratorConfig::default();
        Self {
            locale: "en".to_string(),
            log_level: "warn".to_string(),
            log_history: 200,
            max_exercises: generator.max_exercises,
            blast_rest_seconds: generator.blast_rest.seconds(),
            balance_skew_threshold: engine.balance_skew_threshold,
            global_level_headroom: engine.global_level_headroom,
            inactivity_bands: generator
                .reduction_bands
                .iter()
                .map(|b| InactivityBand {
                    min_days: b.min_days,
                    percent: b.percent,
                })
                .collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityBand {
    pub min_days: u32,
    pub percent: u8,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let settings = serde_json::from_str::<Settings>(&fs::read_to_string(path)?)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.level_filter()?;
        domain::Time::new(self.blast_rest_seconds)?;

        if self.max_exercises == 0 {
            return Err(SettingsError::Invalid("max_exercises must be positive".to_string()));
        }

        if !self.balance_skew_threshold.is_finite() || self.balance_skew_threshold < 1.0 {
            return Err(SettingsError::Invalid(
                "balance_skew_threshold must be at least 1".to_string(),
            ));
        }

        if let Some(band) = self.inactivity_bands.iter().find(|b| b.percent > 100) {
            return Err(SettingsError::Invalid(format!(
                "reduction of {} % after {} days exceeds 100 %",
                band.percent, band.min_days
            )));
        }

        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        self.log_level
            .parse()
            .map_err(|_| SettingsError::Invalid(format!("unknown log level \"{}\"", self.log_level)))
    }

    pub fn engine_config(&self) -> Result<EngineConfig, SettingsError> {
        Ok(EngineConfig {
            balance_skew_threshold: self.balance_skew_threshold,
            global_level_headroom: self.global_level_headroom,
            blast_rest: domain::Time::new(self.blast_rest_seconds)?,
            ..EngineConfig::default()
        })
    }

    pub fn generator_config(&self) -> Result<GeneratorConfig, SettingsError> {
        Ok(GeneratorConfig {
            max_exercises: self.max_exercises,
            blast_rest: domain::Time::new(self.blast_rest_seconds)?,
            reduction_bands: self
                .inactivity_bands
                .iter()
                .map(|b| ReductionBand {
                    min_days: b.min_days,
                    percent: b.percent,
                })
                .collect(),
            ..GeneratorConfig::default()
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Time(#[from] domain::TimeError),
    #[error("{0}")]
    Invalid(String),
}
