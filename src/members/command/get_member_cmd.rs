use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;
use crate::members::dto::MemberDto;

pub(crate) struct GetMemberCommand {
    library: SharedLibrary,
}

impl GetMemberCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetMemberCommandRequest {
    pub(crate) member_id: String,
}

impl GetMemberCommandRequest {
    pub fn new(member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetMemberCommandResponse {
    pub member: MemberDto,
    pub active_loans: usize,
}

impl GetMemberCommandResponse {
    pub fn new(member: MemberDto, active_loans: usize) -> Self {
        Self {
            member,
            active_loans,
        }
    }
}

#[async_trait]
impl Command<GetMemberCommandRequest, GetMemberCommandResponse> for GetMemberCommand {
    async fn execute(&self, req: GetMemberCommandRequest) -> Result<GetMemberCommandResponse, CommandError> {
        let library = self.library.lock().await;
        let member = library.catalog().find_member(req.member_id.as_str())?;
        let loans = library.loans_of(req.member_id.as_str())?;
        Ok(GetMemberCommandResponse::new(MemberDto::from(&member), loans.len()))
    }
}
