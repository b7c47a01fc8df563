use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;

pub(crate) struct SearchBooksCommand {
    library: SharedLibrary,
}

impl SearchBooksCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    #[serde(default)]
    pub(crate) q: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn new(q: Option<String>) -> Self {
        Self {
            q,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let library = self.library.lock().await;
        let books = match req.q.as_deref() {
            Some(query) => library.catalog().search_books(query),
            None => library.catalog().list_books(),
        };
        Ok(SearchBooksCommandResponse::new(books.iter().map(BookDto::from).collect()))
    }
}
