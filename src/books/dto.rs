use std::convert::TryFrom;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::core::library::{LibraryError, LibraryResult};

// BookDto is the transfer form of a book used by the snapshot store and the http adapter,
// it carries exactly the catalog fields and nothing derived from loans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub publication_year: i32,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str, genre: &str, publication_year: i32) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            genre: genre.to_string(),
            publication_year,
        }
    }
}

impl From<&Book> for BookDto {
    fn from(other: &Book) -> Self {
        Self {
            title: other.title().to_string(),
            author: other.author().to_string(),
            isbn: other.isbn().to_string(),
            genre: other.genre().to_string(),
            publication_year: other.publication_year(),
        }
    }
}

impl TryFrom<&BookDto> for Book {
    type Error = LibraryError;

    fn try_from(other: &BookDto) -> LibraryResult<Self> {
        Book::new(other.title.as_str(), other.author.as_str(), other.isbn.as_str(),
                  other.genre.as_str(), other.publication_year)
    }
}
