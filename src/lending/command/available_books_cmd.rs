use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;

pub(crate) struct AvailableBooksCommand {
    library: SharedLibrary,
}

impl AvailableBooksCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AvailableBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct AvailableBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl AvailableBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<AvailableBooksCommandRequest, AvailableBooksCommandResponse> for AvailableBooksCommand {
    async fn execute(&self, _req: AvailableBooksCommandRequest) -> Result<AvailableBooksCommandResponse, CommandError> {
        let library = self.library.lock().await;
        let books = library.available_books().iter().map(BookDto::from).collect();
        Ok(AvailableBooksCommandResponse::new(books))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::dto::BookDto;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::lending::command::available_books_cmd::{AvailableBooksCommand, AvailableBooksCommandRequest};
    use crate::lending::factory::create_shared_library;
    use crate::members::dto::MemberDto;
    use crate::snapshot::domain::Snapshot;

    #[tokio::test]
    async fn test_should_run_available_books() {
        let snapshot = Snapshot::new(vec![BookDto::new("A", "X", "111", "G", 2000),
                                          BookDto::new("B", "X", "222", "G", 2000)],
                                     vec![MemberDto::new("Ada", "M1", "")]);
        let library = create_shared_library(&Configuration::new("test"), &snapshot).expect("should create library");
        library.lock().await.checkout("111", "M1", None, NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"))
            .expect("should checkout");
        let cmd = AvailableBooksCommand::new(library);

        let res = cmd.execute(AvailableBooksCommandRequest::default()).await.expect("should list available");
        assert_eq!(vec!["222"], res.books.iter().map(|b| b.isbn.as_str()).collect::<Vec<&str>>());
    }
}
