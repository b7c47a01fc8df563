use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;
use crate::members::dto::MemberDto;

pub(crate) struct RemoveMemberCommand {
    library: SharedLibrary,
}

impl RemoveMemberCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveMemberCommandRequest {
    pub(crate) member_id: String,
}

impl RemoveMemberCommandRequest {
    pub fn new(member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveMemberCommandResponse {
    pub member: MemberDto,
}

impl RemoveMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<RemoveMemberCommandRequest, RemoveMemberCommandResponse> for RemoveMemberCommand {
    async fn execute(&self, req: RemoveMemberCommandRequest) -> Result<RemoveMemberCommandResponse, CommandError> {
        let mut library = self.library.lock().await;
        library.catalog_mut().remove_member(req.member_id.as_str()).map_err(CommandError::from)
            .map(|member| RemoveMemberCommandResponse::new(MemberDto::from(&member)))
    }
}
