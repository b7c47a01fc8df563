use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use crate::catalog::controller::{add_book, find_book, remove_book, rename_book, search_books, update_book};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::lending::controller::{available_books, checkout_book, member_loans, overdue_books, return_book};
use crate::lending::domain::SharedLibrary;
use crate::members::controller::{add_member, find_member, remove_member, rename_member, search_members, update_member};

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) library: SharedLibrary,
}

impl AppState {
    pub fn new(config: &Configuration, library: SharedLibrary) -> AppState {
        AppState {
            config: config.clone(),
            library,
        }
    }
}

// optional evaluation date for read endpoints, defaults to the local calendar date
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DateQuery {
    pub(crate) today: Option<String>,
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateIsbn { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::DuplicateMemberId { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::AlreadyOnLoan { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::NotOnLoan { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::WrongBorrower { .. } => {
                (StatusCode::FORBIDDEN, format!("{:?}", err))
            }
            CommandError::InvalidField { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", post(add_book).get(search_books))
        .route("/books/available", get(available_books))
        .route("/books/overdue", get(overdue_books))
        .route("/books/:isbn",
               get(find_book).put(update_book).delete(remove_book))
        .route("/books/:isbn/rename", post(rename_book))
        .route("/members", post(add_member).get(search_members))
        .route("/members/:member_id",
               get(find_member).put(update_member).delete(remove_member))
        .route("/members/:member_id/rename", post(rename_member))
        .route("/members/:member_id/loans", get(member_loans))
        .route("/checkout", post(checkout_book))
        .route("/checkout/return", post(return_book))
        .with_state(state)
}
