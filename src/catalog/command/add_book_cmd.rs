use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::books::domain::parse_publication_year;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::domain::RawValue;
use crate::core::library::LibraryResult;
use crate::lending::domain::SharedLibrary;

pub(crate) struct AddBookCommand {
    library: SharedLibrary,
}

impl AddBookCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    #[serde(default)]
    pub(crate) genre: String,
    pub(crate) publication_year: RawValue,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, genre: &str, publication_year: RawValue) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            genre: genre.to_string(),
            publication_year,
        }
    }

    pub fn build_book(&self) -> LibraryResult<Book> {
        let year = parse_publication_year(&self.publication_year)?;
        Book::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str(), self.genre.as_str(), year)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        let mut library = self.library.lock().await;
        library.catalog_mut().add_book(book).map_err(CommandError::from)
            .map(|book| AddBookCommandResponse::new(BookDto::from(&book)))
    }
}
