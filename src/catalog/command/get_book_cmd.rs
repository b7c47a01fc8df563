use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookStatus;
use crate::lending::domain::SharedLibrary;
use crate::utils::date::parse_date_or_today;

pub(crate) struct GetBookCommand {
    library: SharedLibrary,
}

impl GetBookCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) isbn: String,
    pub(crate) today: Option<String>,
}

impl GetBookCommandRequest {
    pub fn new(isbn: &str, today: Option<String>) -> Self {
        Self {
            isbn: isbn.to_string(),
            today,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
    pub status: BookStatus,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto, status: BookStatus) -> Self {
        Self {
            book,
            status,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let today = parse_date_or_today("today", req.today.as_deref())?;
        let library = self.library.lock().await;
        let book = library.catalog().find_book(req.isbn.as_str())?;
        let status = library.status_of(req.isbn.as_str(), today)?;
        Ok(GetBookCommandResponse::new(BookDto::from(&book), status))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, RawValue};
    use crate::core::library::BookStatus;
    use crate::lending::factory::create_shared_library;
    use crate::snapshot::domain::Snapshot;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let library = create_shared_library(&Configuration::new("test"), &Snapshot::default()).expect("should create library");
        let add_cmd = AddBookCommand::new(library.clone());
        let get_cmd = GetBookCommand::new(library.clone());

        let _ = add_cmd.execute(AddBookCommandRequest::new("Emma", "Jane Austen", "111", "Novel", RawValue::Number(1815)))
            .await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new("111", Some("2024-01-01".to_string())))
            .await.expect("should get book");
        assert_eq!("Emma", loaded.book.title.as_str());
        assert_eq!(BookStatus::Available, loaded.status);

        let res = get_cmd.execute(GetBookCommandRequest::new("999", None)).await;
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
        let res = get_cmd.execute(GetBookCommandRequest::new("111", Some("yesterday".to_string()))).await;
        assert!(matches!(res, Err(CommandError::InvalidField{ .. })));
    }
}
