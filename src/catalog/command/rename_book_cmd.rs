use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;

// RenameBookCommand changes the isbn of a book, an active loan follows the book.
pub(crate) struct RenameBookCommand {
    library: SharedLibrary,
}

impl RenameBookCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RenameBookCommandRequest {
    pub(crate) isbn: String,
    pub(crate) new_isbn: String,
}

impl RenameBookCommandRequest {
    pub fn new(isbn: &str, new_isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            new_isbn: new_isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RenameBookCommandResponse {
    pub book: BookDto,
}

impl RenameBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<RenameBookCommandRequest, RenameBookCommandResponse> for RenameBookCommand {
    async fn execute(&self, req: RenameBookCommandRequest) -> Result<RenameBookCommandResponse, CommandError> {
        let mut library = self.library.lock().await;
        library.catalog_mut().rename_book(req.isbn.as_str(), req.new_isbn.as_str()).map_err(CommandError::from)
            .map(|book| RenameBookCommandResponse::new(BookDto::from(&book)))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::rename_book_cmd::{RenameBookCommand, RenameBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::lending::factory::create_shared_library;
    use crate::snapshot::domain::Snapshot;

    #[tokio::test]
    async fn test_should_run_rename_book() {
        let snapshot = Snapshot::new(vec![BookDto::new("A", "X", "111", "G", 2000),
                                          BookDto::new("B", "X", "222", "G", 2000)], vec![]);
        let library = create_shared_library(&Configuration::new("test"), &snapshot).expect("should create library");
        let cmd = RenameBookCommand::new(library.clone());

        let res = cmd.execute(RenameBookCommandRequest::new("111", "333")).await.expect("should rename book");
        assert_eq!("333", res.book.isbn.as_str());
        assert_eq!("A", res.book.title.as_str());

        let res = cmd.execute(RenameBookCommandRequest::new("333", "222")).await;
        assert!(matches!(res, Err(CommandError::DuplicateIsbn{ .. })));
        let res = cmd.execute(RenameBookCommandRequest::new("111", "444")).await;
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
