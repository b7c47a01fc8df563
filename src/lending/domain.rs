use std::sync::Arc;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::library::{BookStatus, LibraryResult};
use crate::loans::domain::model::Loan;

pub mod service;

// LendingService runs the checkout and return workflow on top of the catalog. Every date
// is supplied by the caller, the service never reads the clock.
pub trait LendingService: Sync + Send {
    // checkout a book, `loan_days` falls back to the configured loan period
    fn checkout(&mut self, isbn: &str, member_id: &str, loan_days: Option<i64>, today: NaiveDate) -> LibraryResult<Loan>;

    fn return_book(&mut self, isbn: &str, member_id: &str) -> LibraryResult<Loan>;

    fn overdue_books(&self, today: NaiveDate) -> Vec<Book>;

    fn overdue_report(&self, today: NaiveDate) -> Vec<(Book, Loan)>;

    fn available_books(&self) -> Vec<Book>;

    fn loans_of(&self, member_id: &str) -> LibraryResult<Vec<(Book, Loan)>>;

    fn status_of(&self, isbn: &str, today: NaiveDate) -> LibraryResult<BookStatus>;

    fn default_loan_days(&self) -> i64;

    fn catalog(&self) -> &dyn CatalogService;

    fn catalog_mut(&mut self) -> &mut dyn CatalogService;
}

// one lock guards the catalog and its loan ledger together
pub type SharedLibrary = Arc<Mutex<Box<dyn LendingService>>>;
