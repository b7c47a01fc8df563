use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;

pub(crate) struct RemoveBookCommand {
    library: SharedLibrary,
}

impl RemoveBookCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub book: BookDto,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let mut library = self.library.lock().await;
        library.catalog_mut().remove_book(req.isbn.as_str()).map_err(CommandError::from)
            .map(|book| RemoveBookCommandResponse::new(BookDto::from(&book)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, RawValue};
    use crate::core::library::LibraryError;
    use crate::lending::factory::create_shared_library;
    use crate::members::domain::model::Member;
    use crate::snapshot::domain::Snapshot;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let library = create_shared_library(&Configuration::new("test"), &Snapshot::default()).expect("should create library");
        let add_cmd = AddBookCommand::new(library.clone());
        let remove_cmd = RemoveBookCommand::new(library.clone());
        let _ = add_cmd.execute(AddBookCommandRequest::new("Emma", "Jane Austen", "111", "Novel", RawValue::Number(1815)))
            .await.expect("should add book");
        {
            let mut svc = library.lock().await;
            svc.catalog_mut().add_member(Member::new("Ada", "M1", "").expect("member")).expect("should add member");
            svc.checkout("111", "M1", None, NaiveDate::from_ymd_opt(2024, 1, 1).expect("date")).expect("should checkout");
        }

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("111")).await.expect("should remove book");
        assert_eq!("111", res.book.isbn.as_str());
        let returned = library.lock().await.return_book("111", "M1");
        assert!(matches!(returned, Err(LibraryError::NotOnLoan{ .. })));

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("111")).await;
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
