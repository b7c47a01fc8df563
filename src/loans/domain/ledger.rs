use chrono::NaiveDate;
use tracing::debug;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{MemoryRepository, Repository};
use crate::loans::domain::model::Loan;

// LoanLedger holds the active loans keyed by isbn, at most one per book.
#[derive(Debug)]
pub struct LoanLedger {
    loans: MemoryRepository<Loan>,
}

impl Default for LoanLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanLedger {
    pub fn new() -> Self {
        Self {
            loans: MemoryRepository::new("loan for book", LibraryError::already_on_loan, LibraryError::not_on_loan),
        }
    }

    pub fn checkout(&mut self, isbn: &str, member_id: &str, loan_days: i64, today: NaiveDate) -> LibraryResult<Loan> {
        if let Ok(existing) = self.loans.get(isbn) {
            return Err(LibraryError::already_on_loan(
                format!("book {} is already on loan until {}", isbn, existing.due_date).as_str()));
        }
        let loan = Loan::new(isbn, member_id, today, loan_days)?;
        self.loans.create(loan.clone())?;
        debug!(isbn, member_id, due_date = %loan.due_date, "loan recorded");
        Ok(loan)
    }

    // the loan stays in place when the member is not the borrower
    pub fn return_loan(&mut self, isbn: &str, member_id: &str) -> LibraryResult<Loan> {
        let loan = self.loans.get(isbn).map_err(|_| {
            LibraryError::not_on_loan(format!("book {} is not on loan", isbn).as_str())
        })?;
        if loan.member_id != member_id {
            return Err(LibraryError::wrong_borrower(
                format!("book {} is not on loan to {}", isbn, member_id).as_str(), loan.member_id.as_str()));
        }
        self.loans.delete(isbn)
    }

    pub fn find(&self, isbn: &str) -> Option<&Loan> {
        self.loans.get(isbn).ok()
    }

    pub fn is_on_loan(&self, isbn: &str) -> bool {
        self.loans.contains(isbn)
    }

    pub fn is_overdue(&self, isbn: &str, today: NaiveDate) -> bool {
        self.find(isbn).map(|loan| loan.is_overdue(today)).unwrap_or(false)
    }

    pub fn active_loans_for(&self, member_id: &str) -> Vec<Loan> {
        self.loans.query(&|loan: &Loan| loan.member_id == member_id)
    }

    pub fn purge_book(&mut self, isbn: &str) -> Option<Loan> {
        self.loans.delete(isbn).ok()
    }

    pub fn purge_member(&mut self, member_id: &str) -> Vec<Loan> {
        self.active_loans_for(member_id).iter()
            .filter_map(|loan| self.loans.delete(loan.isbn.as_str()).ok())
            .collect()
    }

    pub(crate) fn rekey_book(&mut self, old_isbn: &str, new_isbn: &str) -> LibraryResult<()> {
        if let Ok(loan) = self.loans.get(old_isbn) {
            let mut moved = loan.clone();
            moved.isbn = new_isbn.to_string();
            self.loans.replace(old_isbn, moved)?;
        }
        Ok(())
    }

    pub(crate) fn rekey_member(&mut self, old_member_id: &str, new_member_id: &str) -> LibraryResult<()> {
        for loan in self.active_loans_for(old_member_id) {
            self.loans.get_mut(loan.isbn.as_str())?.member_id = new_member_id.to_string();
        }
        Ok(())
    }
}
