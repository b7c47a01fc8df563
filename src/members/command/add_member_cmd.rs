use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::lending::domain::SharedLibrary;
use crate::members::domain::model::Member;
use crate::members::dto::MemberDto;

pub(crate) struct AddMemberCommand {
    library: SharedLibrary,
}

impl AddMemberCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddMemberCommandRequest {
    pub(crate) name: String,
    pub(crate) member_id: String,
    #[serde(default)]
    pub(crate) contact: String,
}

impl AddMemberCommandRequest {
    pub fn new(name: &str, member_id: &str, contact: &str) -> Self {
        Self {
            name: name.to_string(),
            member_id: member_id.to_string(),
            contact: contact.to_string(),
        }
    }

    pub fn build_member(&self) -> LibraryResult<Member> {
        Member::new(self.name.as_str(), self.member_id.as_str(), self.contact.as_str())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddMemberCommandResponse {
    pub member: MemberDto,
}

impl AddMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<AddMemberCommandRequest, AddMemberCommandResponse> for AddMemberCommand {
    async fn execute(&self, req: AddMemberCommandRequest) -> Result<AddMemberCommandResponse, CommandError> {
        let member = req.build_member()?;
        let mut library = self.library.lock().await;
        library.catalog_mut().add_member(member).map_err(CommandError::from)
            .map(|member| AddMemberCommandResponse::new(MemberDto::from(&member)))
    }
}
