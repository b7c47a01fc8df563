use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;
use crate::lending::dto::BorrowingDto;

pub(crate) struct MemberLoansCommand {
    library: SharedLibrary,
}

impl MemberLoansCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MemberLoansCommandRequest {
    member_id: String,
}

impl MemberLoansCommandRequest {
    pub fn new(member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MemberLoansCommandResponse {
    pub loans: Vec<BorrowingDto>,
}

impl MemberLoansCommandResponse {
    pub fn new(loans: Vec<BorrowingDto>) -> Self {
        Self {
            loans,
        }
    }
}

#[async_trait]
impl Command<MemberLoansCommandRequest, MemberLoansCommandResponse> for MemberLoansCommand {
    async fn execute(&self, req: MemberLoansCommandRequest) -> Result<MemberLoansCommandResponse, CommandError> {
        let library = self.library.lock().await;
        let loans = library.loans_of(req.member_id.as_str())?;
        Ok(MemberLoansCommandResponse::new(
            loans.iter().map(|(book, loan)| BorrowingDto::new(book, loan)).collect()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::dto::BookDto;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::lending::command::member_loans_cmd::{MemberLoansCommand, MemberLoansCommandRequest};
    use crate::lending::factory::create_shared_library;
    use crate::members::dto::MemberDto;
    use crate::snapshot::domain::Snapshot;

    #[tokio::test]
    async fn test_should_run_member_loans() {
        let snapshot = Snapshot::new(vec![BookDto::new("A", "X", "111", "G", 2000),
                                          BookDto::new("B", "X", "222", "G", 2000)],
                                     vec![MemberDto::new("Ada", "M1", "")]);
        let library = create_shared_library(&Configuration::new("test"), &snapshot).expect("should create library");
        library.lock().await.checkout("222", "M1", None, NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"))
            .expect("should checkout");
        let cmd = MemberLoansCommand::new(library);

        let res = cmd.execute(MemberLoansCommandRequest::new("M1")).await.expect("should list loans");
        assert_eq!(1, res.loans.len());
        assert_eq!("B", res.loans[0].book.title.as_str());
        let res = cmd.execute(MemberLoansCommandRequest::new("M5")).await;
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
