use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::serializer;

// Loan binds one book to one member from checkout until return. It refers to both by
// identity key and owns neither.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub isbn: String,
    pub member_id: String,
    #[serde(with = "serializer")]
    pub checkout_date: NaiveDate,
    #[serde(with = "serializer")]
    pub due_date: NaiveDate,
}

impl Loan {
    // due date is checkout date plus whole calendar days
    pub fn new(isbn: &str, member_id: &str, checkout_date: NaiveDate, loan_days: i64) -> LibraryResult<Self> {
        if loan_days <= 0 {
            return Err(LibraryError::invalid_field("loan_days",
                                                   format!("loan days must be positive, got {}", loan_days).as_str()));
        }
        let due_date = checkout_date.checked_add_days(Days::new(loan_days as u64)).ok_or_else(|| {
            LibraryError::invalid_field("loan_days", format!("{} days past {} is out of range",
                                                             loan_days, checkout_date).as_str())
        })?;
        Ok(Self {
            isbn: isbn.to_string(),
            member_id: member_id.to_string(),
            checkout_date,
            due_date,
        })
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        today > self.due_date
    }

    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        if self.is_overdue(today) {
            (today - self.due_date).num_days()
        } else {
            0
        }
    }
}

impl Identifiable for Loan {
    fn id(&self) -> &str {
        &self.isbn
    }
}
