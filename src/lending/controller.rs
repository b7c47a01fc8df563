use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::{Value};
use tracing::debug;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::lending::command::available_books_cmd::{AvailableBooksCommand, AvailableBooksCommandRequest, AvailableBooksCommandResponse};
use crate::lending::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest, CheckoutBookCommandResponse};
use crate::lending::command::member_loans_cmd::{MemberLoansCommand, MemberLoansCommandRequest, MemberLoansCommandResponse};
use crate::lending::command::overdue_books_cmd::{OverdueBooksCommand, OverdueBooksCommandRequest, OverdueBooksCommandResponse};
use crate::lending::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};

pub(crate) async fn checkout_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CheckoutBookCommandResponse>, ServerError> {
    let req: CheckoutBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    debug!(branch_id = state.config.branch_id.as_str(), "checkout requested");
    let res = CheckoutBookCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    debug!(branch_id = state.config.branch_id.as_str(), "return requested");
    let res = ReturnBookCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn available_books(
    State(state): State<AppState>) -> Result<Json<AvailableBooksCommandResponse>, ServerError> {
    let res = AvailableBooksCommand::new(state.library).execute(AvailableBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn overdue_books(
    State(state): State<AppState>,
    Query(req): Query<OverdueBooksCommandRequest>) -> Result<Json<OverdueBooksCommandResponse>, ServerError> {
    let res = OverdueBooksCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn member_loans(
    State(state): State<AppState>,
    Path(member_id): Path<String>) -> Result<Json<MemberLoansCommandResponse>, ServerError> {
    let req = MemberLoansCommandRequest::new(member_id.as_str());
    let res = MemberLoansCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}
