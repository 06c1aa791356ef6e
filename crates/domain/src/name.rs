use std::collections::BTreeMap;

use derive_more::{AsRef, Display};

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// Exercise name with optional translations keyed by locale (e.g. `he`, `en`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedName {
    default: Name,
    translations: BTreeMap<String, Name>,
}

impl LocalizedName {
    #[must_use]
    pub fn new(default: Name) -> Self {
        Self {
            default,
            translations: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_translation(mut self, locale: &str, name: Name) -> Self {
        self.translations.insert(locale.to_lowercase(), name);
        self
    }

    #[must_use]
    pub fn default_name(&self) -> &Name {
        &self.default
    }

    #[must_use]
    pub fn get(&self, locale: &str) -> &Name {
        self.translations
            .get(&locale.to_lowercase())
            .unwrap_or(&self.default)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }
}

impl From<Name> for LocalizedName {
    fn from(value: Name) -> Self {
        Self::new(value)
    }
}
