use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;
use crate::members::dto::MemberDto;

pub(crate) struct RenameMemberCommand {
    library: SharedLibrary,
}

impl RenameMemberCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RenameMemberCommandRequest {
    pub(crate) member_id: String,
    pub(crate) new_member_id: String,
}

impl RenameMemberCommandRequest {
    pub fn new(member_id: &str, new_member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            new_member_id: new_member_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RenameMemberCommandResponse {
    pub member: MemberDto,
}

impl RenameMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<RenameMemberCommandRequest, RenameMemberCommandResponse> for RenameMemberCommand {
    async fn execute(&self, req: RenameMemberCommandRequest) -> Result<RenameMemberCommandResponse, CommandError> {
        let mut library = self.library.lock().await;
        library.catalog_mut().rename_member(req.member_id.as_str(), req.new_member_id.as_str())
            .map_err(CommandError::from)
            .map(|member| RenameMemberCommandResponse::new(MemberDto::from(&member)))
    }
}
