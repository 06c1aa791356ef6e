use std::{
    collections::VecDeque,
    io::Write,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&mut self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Keeps the most recent log entries in memory.
pub struct History {
    entries: VecDeque<Entry>,
    capacity: usize,
}

impl History {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
}

impl Repository for History {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        Ok(self.entries.clone())
    }

    fn write_entry(&mut self, entry: Entry) -> Result<(), Error> {
        if self.capacity == 0 {
            return Err(Error::Unknown("log history is disabled".to_string()));
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        Ok(())
    }
}

static LOGGER: Logger = Logger;
static ECHO: AtomicBool = AtomicBool::new(true);

/// Installs the logger. Without `echo`, entries only go to stderr when the repository rejects them.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(
    repository: Arc<Mutex<dyn Repository>>,
    level: LevelFilter,
    echo: bool,
) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    ECHO.store(echo, Ordering::Relaxed);
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    Ok(())
}

/// Entries recorded since the logger was initialized.
#[must_use]
pub fn entries() -> VecDeque<Entry> {
    LOG.lock()
        .ok()
        .and_then(|log| log.clone())
        .and_then(|repository| repository.lock().ok()?.read_entries().ok())
        .unwrap_or_default()
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        };

        let line = format!("{} {:<5} {}", entry.time, entry.level, entry.message);
        let recorded = LOG
            .lock()
            .ok()
            .and_then(|log| log.clone())
            .and_then(|repository| repository.lock().ok()?.write_entry(entry).ok())
            .is_some();

        if ECHO.load(Ordering::Relaxed) || !recorded {
            let _ = writeln!(std::io::stderr(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: "Jan 01 00:00:00".to_string(),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new(2);

        for message in ["a", "b", "c"] {
            history.write_entry(entry(message)).unwrap();
        }

        assert_eq!(
            history.read_entries().unwrap(),
            VecDeque::from([entry("b"), entry("c")])
        );
    }

    #[test]
    fn test_history_disabled() {
        let mut history = History::new(0);
        assert!(history.write_entry(entry("a")).is_err());
        assert!(history.read_entries().unwrap().is_empty());
    }

    #[test]
    fn test_init_records_entries() {
        let history = || Arc::new(Mutex::new(History::new(4)));

        assert!(init(history(), LevelFilter::Info, false).is_ok());
        let error = anyhow::Error::from(init(history(), LevelFilter::Trace, true).unwrap_err());
        assert!(!error.to_string().is_empty());

        ::log::info!("ready");
        ::log::debug!("hidden");

        let messages = entries()
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>();
        assert_eq!(messages, vec!["ready".to_string()]);
    }

    #[test]
    fn test_entry_serialization() {
        assert_eq!(
            serde_json::to_value(entry("ready")).unwrap(),
            serde_json::json!({
                "time": "Jan 01 00:00:00",
                "level": "Info",
                "message": "ready",
            })
        );
    }
}
