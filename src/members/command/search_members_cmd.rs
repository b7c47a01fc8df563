use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;
use crate::members::dto::MemberDto;

pub(crate) struct SearchMembersCommand {
    library: SharedLibrary,
}

impl SearchMembersCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchMembersCommandRequest {
    #[serde(default)]
    pub(crate) q: Option<String>,
}

impl SearchMembersCommandRequest {
    pub fn new(q: Option<String>) -> Self {
        Self {
            q,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchMembersCommandResponse {
    pub members: Vec<MemberDto>,
}

impl SearchMembersCommandResponse {
    pub fn new(members: Vec<MemberDto>) -> Self {
        Self {
            members,
        }
    }
}

#[async_trait]
impl Command<SearchMembersCommandRequest, SearchMembersCommandResponse> for SearchMembersCommand {
    async fn execute(&self, req: SearchMembersCommandRequest) -> Result<SearchMembersCommandResponse, CommandError> {
        let library = self.library.lock().await;
        let members = match req.q.as_deref() {
            Some(query) => library.catalog().search_members(query),
            None => library.catalog().list_members(),
        };
        Ok(SearchMembersCommandResponse::new(members.iter().map(MemberDto::from).collect()))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::lending::factory::create_shared_library;
    use crate::members::command::search_members_cmd::{SearchMembersCommand, SearchMembersCommandRequest};
    use crate::members::dto::MemberDto;
    use crate::snapshot::domain::Snapshot;

    #[tokio::test]
    async fn test_should_run_search_members() {
        let snapshot = Snapshot::new(vec![], vec![MemberDto::new("Ada Lovelace", "M1", ""),
                                                  MemberDto::new("Grace Hopper", "M2", "")]);
        let library = create_shared_library(&Configuration::new("test"), &snapshot).expect("should create library");
        let cmd = SearchMembersCommand::new(library);

        let res = cmd.execute(SearchMembersCommandRequest::new(Some("HOPPER".to_string()))).await.expect("should search");
        assert_eq!(vec!["M2"], res.members.iter().map(|m| m.member_id.as_str()).collect::<Vec<&str>>());
        let res = cmd.execute(SearchMembersCommandRequest::default()).await.expect("should list");
        assert_eq!(2, res.members.len());
    }
}
