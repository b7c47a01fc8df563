use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
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
    // The loan exists but belongs to another member, the loan is left untouched.
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

impl LibraryError {
    pub fn duplicate_isbn(message: &str) -> LibraryError {
        LibraryError::DuplicateIsbn { message: message.to_string() }
    }

    pub fn duplicate_member_id(message: &str) -> LibraryError {
        LibraryError::DuplicateMemberId { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_on_loan(message: &str) -> LibraryError {
        LibraryError::AlreadyOnLoan { message: message.to_string() }
    }

    pub fn not_on_loan(message: &str) -> LibraryError {
        LibraryError::NotOnLoan { message: message.to_string() }
    }

    pub fn wrong_borrower(message: &str, borrower_id: &str) -> LibraryError {
        LibraryError::WrongBorrower { message: message.to_string(), borrower_id: borrower_id.to_string() }
    }

    pub fn invalid_field(field: &str, message: &str) -> LibraryError {
        LibraryError::InvalidField { field: field.to_string(), message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("snapshot io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateIsbn { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateMemberId { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyOnLoan { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotOnLoan { message } => {
                write!(f, "{}", message)
            }
            LibraryError::WrongBorrower { message, borrower_id } => {
                write!(f, "{} (borrowed by {})", message, borrower_id)
            }
            LibraryError::InvalidField { field, message } => {
                write!(f, "invalid {}: {}", field, message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the lending domain.
pub type LibraryResult<T> = Result<T, LibraryError>;

// BookStatus is always derived from the loan ledger and never stored on the book.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    OnLoan,
    Overdue,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::OnLoan => write!(f, "OnLoan"),
            BookStatus::Overdue => write!(f, "Overdue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookStatus, LibraryError};

    #[tokio::test]
    async fn test_should_create_duplicate_errors() {
        assert!(matches!(LibraryError::duplicate_isbn("test"), LibraryError::DuplicateIsbn{ message: _ }));
        assert!(matches!(LibraryError::duplicate_member_id("test"), LibraryError::DuplicateMemberId{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_lending_errors() {
        assert!(matches!(LibraryError::already_on_loan("test"), LibraryError::AlreadyOnLoan{ message: _ }));
        assert!(matches!(LibraryError::not_on_loan("test"), LibraryError::NotOnLoan{ message: _ }));
        assert!(matches!(LibraryError::wrong_borrower("test", "M1"), LibraryError::WrongBorrower{ message: _, borrower_id: _ }));
    }

    #[tokio::test]
    async fn test_should_create_invalid_field_error() {
        let err = LibraryError::invalid_field("publication_year", "not a number");
        assert!(matches!(err, LibraryError::InvalidField{ ref field, message: _ } if field == "publication_year"));
        assert_eq!("invalid publication_year: not a number", err.to_string());
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<Vec<String>>("{").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_format_book_status() {
        let statuses = vec![
            BookStatus::Available,
            BookStatus::OnLoan,
            BookStatus::Overdue,
        ];
        for status in statuses {
            let json = serde_json::to_string(&status).expect("should serialize");
            assert_eq!(format!("\"{}\"", status), json);
            let parsed: BookStatus = serde_json::from_str(json.as_str()).expect("should deserialize");
            assert_eq!(status, parsed);
        }
    }
}
