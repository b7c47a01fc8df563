use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use crate::books::domain::{BookPatch, parse_publication_year};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// Book is a catalog title identified by its isbn. Whether it is on loan is
// answered by the loan ledger, not by the book.
#[derive(Debug, Clone)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    genre: String,
    publication_year: i32,
}

impl Book {
    pub fn new(title: &str, author: &str, isbn: &str, genre: &str, publication_year: i32) -> LibraryResult<Self> {
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: validate_isbn(isbn)?,
            genre: genre.to_string(),
            publication_year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }

    pub fn set_genre(&mut self, genre: &str) {
        self.genre = genre.to_string();
    }

    pub fn set_publication_year(&mut self, publication_year: i32) {
        self.publication_year = publication_year;
    }

    // all fields are parsed before the first assignment so a bad patch leaves the book untouched
    pub(crate) fn apply(&mut self, patch: &BookPatch) -> LibraryResult<()> {
        let year = match &patch.publication_year {
            Some(raw) => Some(parse_publication_year(raw)?),
            None => None,
        };
        if let Some(title) = &patch.title {
            self.set_title(title);
        }
        if let Some(author) = &patch.author {
            self.set_author(author);
        }
        if let Some(genre) = &patch.genre {
            self.set_genre(genre);
        }
        if let Some(year) = year {
            self.set_publication_year(year);
        }
        Ok(())
    }

    pub(crate) fn with_isbn(&self, isbn: &str) -> LibraryResult<Self> {
        let mut renamed = self.clone();
        renamed.isbn = validate_isbn(isbn)?;
        Ok(renamed)
    }

    pub(crate) fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.title, &self.author, &self.isbn, &self.genre].iter()
            .any(|field| field.to_lowercase().contains(query.as_str()))
    }
}

fn validate_isbn(isbn: &str) -> LibraryResult<String> {
    if isbn.trim().is_empty() {
        return Err(LibraryError::invalid_field("isbn", "isbn is required"));
    }
    Ok(isbn.to_string())
}

impl Identifiable for Book {
    fn id(&self) -> &str {
        &self.isbn
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
