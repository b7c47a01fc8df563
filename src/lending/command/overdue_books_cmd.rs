use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::SharedLibrary;
use crate::lending::dto::OverdueDto;
use crate::utils::date::parse_date_or_today;

pub(crate) struct OverdueBooksCommand {
    library: SharedLibrary,
}

impl OverdueBooksCommand {
    pub(crate) fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OverdueBooksCommandRequest {
    #[serde(default)]
    today: Option<String>,
}

impl OverdueBooksCommandRequest {
    pub fn new(today: Option<String>) -> Self {
        Self {
            today,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OverdueBooksCommandResponse {
    pub overdue: Vec<OverdueDto>,
}

impl OverdueBooksCommandResponse {
    pub fn new(overdue: Vec<OverdueDto>) -> Self {
        Self {
            overdue,
        }
    }
}

#[async_trait]
impl Command<OverdueBooksCommandRequest, OverdueBooksCommandResponse> for OverdueBooksCommand {
    async fn execute(&self, req: OverdueBooksCommandRequest) -> Result<OverdueBooksCommandResponse, CommandError> {
        let today = parse_date_or_today("today", req.today.as_deref())?;
        let library = self.library.lock().await;
        let overdue = library.overdue_report(today).iter()
            .map(|(book, loan)| OverdueDto::new(book, loan, today))
            .collect();
        Ok(OverdueBooksCommandResponse::new(overdue))
    }
}
