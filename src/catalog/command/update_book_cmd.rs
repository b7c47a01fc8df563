use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::BookPatch;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;

pub(crate) struct UpdateBookCommand {
    library: SharedLibrary,
}

impl UpdateBookCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    pub isbn: String,
    pub patch: BookPatch,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, patch: BookPatch) -> Self {
        Self {
            isbn: isbn.to_string(),
            patch,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let mut library = self.library.lock().await;
        library.catalog_mut().update_book(req.isbn.as_str(), &req.patch).map_err(CommandError::from)
            .map(|book| UpdateBookCommandResponse::new(BookDto::from(&book)))
    }
}
