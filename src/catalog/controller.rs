use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value};
use crate::books::domain::BookPatch;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::rename_book_cmd::{RenameBookCommand, RenameBookCommandRequest, RenameBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, DateQuery, json_to_server_error, ServerError};

#[derive(Debug, Deserialize)]
pub(crate) struct RenameBookBody {
    new_isbn: String,
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let res = SearchBooksCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Query(query): Query<DateQuery>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(isbn.as_str(), query.today);
    let res = GetBookCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let patch: BookPatch = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::new(isbn.as_str(), patch);
    let res = UpdateBookCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(isbn.as_str());
    let res = RemoveBookCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn rename_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Json<Value>) -> Result<Json<RenameBookCommandResponse>, ServerError> {
    let body: RenameBookBody = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = RenameBookCommandRequest::new(isbn.as_str(), body.new_isbn.as_str());
    let res = RenameBookCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}
