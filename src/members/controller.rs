use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::members::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest, AddMemberCommandResponse};
use crate::members::command::get_member_cmd::{GetMemberCommand, GetMemberCommandRequest, GetMemberCommandResponse};
use crate::members::command::remove_member_cmd::{RemoveMemberCommand, RemoveMemberCommandRequest, RemoveMemberCommandResponse};
use crate::members::command::rename_member_cmd::{RenameMemberCommand, RenameMemberCommandRequest, RenameMemberCommandResponse};
use crate::members::command::search_members_cmd::{SearchMembersCommand, SearchMembersCommandRequest, SearchMembersCommandResponse};
use crate::members::command::update_member_cmd::{UpdateMemberCommand, UpdateMemberCommandRequest, UpdateMemberCommandResponse};
use crate::members::domain::MemberPatch;

#[derive(Debug, Deserialize)]
pub(crate) struct RenameMemberBody {
    new_member_id: String,
}

pub(crate) async fn add_member(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddMemberCommandResponse>, ServerError> {
    let req: AddMemberCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddMemberCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_members(
    State(state): State<AppState>,
    Query(req): Query<SearchMembersCommandRequest>) -> Result<Json<SearchMembersCommandResponse>, ServerError> {
    let res = SearchMembersCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>) -> Result<Json<GetMemberCommandResponse>, ServerError> {
    let req = GetMemberCommandRequest::new(member_id.as_str());
    let res = GetMemberCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateMemberCommandResponse>, ServerError> {
    let patch: MemberPatch = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateMemberCommandRequest::new(member_id.as_str(), patch);
    let res = UpdateMemberCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>) -> Result<Json<RemoveMemberCommandResponse>, ServerError> {
    let req = RemoveMemberCommandRequest::new(member_id.as_str());
    let res = RemoveMemberCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn rename_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    json: Json<Value>) -> Result<Json<RenameMemberCommandResponse>, ServerError> {
    let body: RenameMemberBody = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = RenameMemberCommandRequest::new(member_id.as_str(), body.new_member_id.as_str());
    let res = RenameMemberCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}
