use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    DuplicateIsbn {
        message: String,
    },
    DuplicateMemberId {
        message: String,
    },
    NotFound {
        message: String,
    },
    AlreadyOnLoan {
        message: String,
    },
    NotOnLoan {
        message: String,
    },
    WrongBorrower {
        message: String,
        borrower_id: String,
    },
    InvalidField {
        field: String,
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateIsbn { message } => {
                CommandError::DuplicateIsbn { message }
            }
            LibraryError::DuplicateMemberId { message } => {
                CommandError::DuplicateMemberId { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::AlreadyOnLoan { message } => {
                CommandError::AlreadyOnLoan { message }
            }
            LibraryError::NotOnLoan { message } => {
                CommandError::NotOnLoan { message }
            }
            LibraryError::WrongBorrower { message, borrower_id } => {
                CommandError::WrongBorrower { message, borrower_id }
            }
            LibraryError::InvalidField { field, message } => {
                CommandError::InvalidField { field, message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
