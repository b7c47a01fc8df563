use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;
use crate::loans::domain::model::Loan;
use crate::utils::date::parse_date_or_today;

pub(crate) struct CheckoutBookCommand {
    library: SharedLibrary,
}

impl CheckoutBookCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutBookCommandRequest {
    isbn: String,
    member_id: String,
    #[serde(default)]
    loan_days: Option<i64>,
    #[serde(default)]
    today: Option<String>,
}

impl CheckoutBookCommandRequest {
    pub fn new(isbn: &str, member_id: &str, loan_days: Option<i64>, today: Option<String>) -> Self {
        Self {
            isbn: isbn.to_string(),
            member_id: member_id.to_string(),
            loan_days,
            today,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckoutBookCommandResponse {
    loan: Loan,
}

impl CheckoutBookCommandResponse {
    pub fn new(loan: Loan) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        let today = parse_date_or_today("today", req.today.as_deref())?;
        let mut library = self.library.lock().await;
        library.checkout(req.isbn.as_str(), req.member_id.as_str(), req.loan_days, today)
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::dto::BookDto;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::lending::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::lending::factory::create_shared_library;
    use crate::members::dto::MemberDto;
    use crate::snapshot::domain::Snapshot;

    #[tokio::test]
    async fn test_should_run_checkout_book() {
        let snapshot = Snapshot::new(vec![BookDto::new("A", "X", "111", "G", 2000)],
                                     vec![MemberDto::new("Ada", "M1", ""), MemberDto::new("Bob", "M2", "")]);
        let library = create_shared_library(&Configuration::new("test"), &snapshot).expect("should create library");
        let cmd = CheckoutBookCommand::new(library);

        let res = cmd.execute(CheckoutBookCommandRequest::new("111", "M1", None, Some("2024-01-01".to_string())))
            .await.expect("should checkout book");
        assert_eq!("M1", res.loan.member_id.as_str());
        assert_eq!(NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"), res.loan.due_date);

        let res = cmd.execute(CheckoutBookCommandRequest::new("111", "M2", None, None)).await;
        assert!(matches!(res, Err(CommandError::AlreadyOnLoan{ .. })));
    }

    #[tokio::test]
    async fn test_should_reject_invalid_checkout_input() {
        let snapshot = Snapshot::new(vec![BookDto::new("A", "X", "111", "G", 2000)],
                                     vec![MemberDto::new("Ada", "M1", "")]);
        let library = create_shared_library(&Configuration::new("test"), &snapshot).expect("should create library");
        let cmd = CheckoutBookCommand::new(library);

        let res = cmd.execute(CheckoutBookCommandRequest::new("111", "M1", Some(0), None)).await;
        assert!(matches!(res, Err(CommandError::InvalidField{ ref field, .. }) if field == "loan_days"));
        let res = cmd.execute(CheckoutBookCommandRequest::new("111", "M1", None, Some("01/02/2024".to_string()))).await;
        assert!(matches!(res, Err(CommandError::InvalidField{ .. })));
        let res = cmd.execute(CheckoutBookCommandRequest::new("111", "M9", None, None)).await;
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
