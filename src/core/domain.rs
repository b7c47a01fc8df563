use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

// Identifiable defines the identity key shared by catalog records, equality and hashing
// of books and members are based on it.
pub trait Identifiable: Sync + Send {
    fn id(&self) -> &str;
}

// RawValue carries user supplied input that still has to be parsed into a typed field.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(i64),
    Text(String),
}

impl Display for RawValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
        }
    }
}

pub const DEFAULT_LOAN_DAYS: i64 = 14;
pub const DEFAULT_SNAPSHOT_PATH: &str = "library.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub book_loan_days: i64,
    pub snapshot_path: String,
    pub store: RepositoryStore,
    pub bind_addr: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            book_loan_days: DEFAULT_LOAN_DAYS,
            snapshot_path: DEFAULT_SNAPSHOT_PATH.to_string(),
            store: RepositoryStore::JsonFile,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    // overrides defaults with LMS_LOAN_DAYS, LMS_SNAPSHOT_PATH, LMS_STORE and LMS_BIND_ADDR
    pub fn from_env(branch_id: &str) -> LibraryResult<Self> {
        Self::from_vars(branch_id, |name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars<F>(branch_id: &str, lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(branch_id);
        if let Some(days) = lookup("LMS_LOAN_DAYS") {
            config.book_loan_days = days.trim().parse::<i64>().map_err(|_| {
                LibraryError::invalid_field("LMS_LOAN_DAYS", format!("{} is not a number", days).as_str())
            })?;
            if config.book_loan_days <= 0 {
                return Err(LibraryError::invalid_field("LMS_LOAN_DAYS", "loan days must be positive"));
            }
        }
        if let Some(path) = lookup("LMS_SNAPSHOT_PATH") {
            if path.trim().is_empty() {
                return Err(LibraryError::invalid_field("LMS_SNAPSHOT_PATH", "snapshot path is empty"));
            }
            config.snapshot_path = path;
        }
        if let Some(store) = lookup("LMS_STORE") {
            config.store = store.parse::<RepositoryStore>()?;
        }
        if let Some(addr) = lookup("LMS_BIND_ADDR") {
            config.bind_addr = addr;
        }
        Ok(config)
    }
}
