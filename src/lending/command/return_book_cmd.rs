use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;
use crate::loans::domain::model::Loan;

pub(crate) struct ReturnBookCommand {
    library: SharedLibrary,
}

impl ReturnBookCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    isbn: String,
    member_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: &str, member_id: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            member_id: member_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    loan: Loan,
}

impl ReturnBookCommandResponse {
    pub fn new(loan: Loan) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let mut library = self.library.lock().await;
        library.return_book(req.isbn.as_str(), req.member_id.as_str())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
