use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;
use crate::members::domain::MemberPatch;
use crate::members::dto::MemberDto;

pub(crate) struct UpdateMemberCommand {
    library: SharedLibrary,
}

impl UpdateMemberCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateMemberCommandRequest {
    pub member_id: String,
    pub patch: MemberPatch,
}

impl UpdateMemberCommandRequest {
    pub fn new(member_id: &str, patch: MemberPatch) -> Self {
        Self {
            member_id: member_id.to_string(),
            patch,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateMemberCommandResponse {
    pub member: MemberDto,
}

impl UpdateMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<UpdateMemberCommandRequest, UpdateMemberCommandResponse> for UpdateMemberCommand {
    async fn execute(&self, req: UpdateMemberCommandRequest) -> Result<UpdateMemberCommandResponse, CommandError> {
        let mut library = self.library.lock().await;
        library.catalog_mut().update_member(req.member_id.as_str(), &req.patch).map_err(CommandError::from)
            .map(|member| UpdateMemberCommandResponse::new(MemberDto::from(&member)))
    }
}
