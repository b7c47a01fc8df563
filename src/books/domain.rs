use serde::{Deserialize, Serialize};
use crate::core::domain::RawValue;
use crate::core::library::{LibraryError, LibraryResult};

pub mod model;

// BookPatch carries edits for every book field except the isbn, which is changed through
// a catalog rename. Unknown fields, the isbn included, are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub publication_year: Option<RawValue>,
}

impl BookPatch {
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn genre(mut self, genre: &str) -> Self {
        self.genre = Some(genre.to_string());
        self
    }

    pub fn publication_year(mut self, year: RawValue) -> Self {
        self.publication_year = Some(year);
        self
    }
}

pub fn parse_publication_year(value: &RawValue) -> LibraryResult<i32> {
    match value {
        RawValue::Number(n) => i32::try_from(*n).map_err(|_| {
            LibraryError::invalid_field("publication_year", format!("{} is out of range", n).as_str())
        }),
        RawValue::Text(s) => s.trim().parse::<i32>().map_err(|_| {
            LibraryError::invalid_field("publication_year", format!("invalid year format {:?}", s).as_str())
        }),
    }
}
