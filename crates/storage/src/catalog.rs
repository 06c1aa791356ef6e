use std::{fs, path::Path};

use log::{debug, warn};
use parkfit_domain as domain;

use crate::records::{ExerciseRecord, Request, RequestDocument};

/// Exercises read from a catalog document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub exercises: Vec<domain::Exercise>,
    /// Number of records that could not be converted.
    pub skipped: usize,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        debug!("reading catalog from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Parses a catalog document. Malformed records are skipped.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        let document = serde_json::from_str::<CatalogDocument>(json)?;
        let mut catalog = Catalog::default();

        for (index, value) in document.exercises.into_iter().enumerate() {
            match read_record(value) {
                Ok(exercise) => catalog.exercises.push(exercise),
                Err(err) => {
                    warn!("skipping catalog record {index}: {err}");
                    catalog.skipped += 1;
                }
            }
        }

        debug!(
            "read {} exercises, skipped {}",
            catalog.exercises.len(),
            catalog.skipped
        );

        Ok(catalog)
    }

    pub fn to_json(exercises: &[domain::Exercise]) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(&CatalogDocument {
            exercises: exercises
                .iter()
                .map(|e| serde_json::to_value(ExerciseRecord::from(e)))
                .collect::<Result<_, _>>()?,
        })?)
    }
}

impl From<Vec<domain::Exercise>> for Catalog {
    fn from(exercises: Vec<domain::Exercise>) -> Self {
        Self {
            exercises,
            skipped: 0,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
struct CatalogDocument {
    exercises: Vec<serde_json::Value>,
}

fn read_record(value: serde_json::Value) -> Result<domain::Exercise, RecordError> {
    let record = serde_json::from_value::<ExerciseRecord>(value)?;
    Ok(domain::Exercise::try_from(record)?)
}

pub fn load_request(path: impl AsRef<Path>) -> Result<Request, StorageError> {
    let path = path.as_ref();
    debug!("reading request from {}", path.display());
    parse_request(&fs::read_to_string(path)?)
}

pub fn parse_request(json: &str) -> Result<Request, StorageError> {
    let document = serde_json::from_str::<RequestDocument>(json)?;
    Ok(Request::try_from(document).map_err(RecordError::from)?)
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
}

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid record: {0}")]
    Value(#[from] domain::ExerciseError),
}
