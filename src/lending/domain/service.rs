use chrono::NaiveDate;
use tracing::info;
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::Catalog;
use crate::core::domain::Configuration;
use crate::core::library::{BookStatus, LibraryResult};
use crate::lending::domain::LendingService;
use crate::loans::domain::model::Loan;

pub(crate) struct LendingServiceImpl {
    book_loan_days: i64,
    catalog: Catalog,
}

impl LendingServiceImpl {
    pub(crate) fn new(config: &Configuration, catalog: Catalog) -> Self {
        Self {
            book_loan_days: config.book_loan_days,
            catalog,
        }
    }
}

impl LendingService for LendingServiceImpl {
    fn checkout(&mut self, isbn: &str, member_id: &str, loan_days: Option<i64>, today: NaiveDate) -> LibraryResult<Loan> {
        let book = self.catalog.find_book(isbn)?;
        let member = self.catalog.find_member(member_id)?;
        let loan_days = loan_days.unwrap_or(self.default_loan_days());
        let loan = self.catalog.loans_mut().checkout(
            isbn, member_id, loan_days, today)?;
        info!(isbn, member_id, checkout_date = %loan.checkout_date, due_date = %loan.due_date,
            "{} checked out by {}", book, member);
        Ok(loan)
    }

    fn return_book(&mut self, isbn: &str, member_id: &str) -> LibraryResult<Loan> {
        let loan = self.catalog.loans_mut().return_loan(isbn, member_id)?;
        info!(isbn, member_id, due_date = %loan.due_date, "book returned");
        Ok(loan)
    }

    fn overdue_books(&self, today: NaiveDate) -> Vec<Book> {
        self.overdue_report(today).into_iter().map(|(book, _)| book).collect()
    }

    fn overdue_report(&self, today: NaiveDate) -> Vec<(Book, Loan)> {
        let loans = self.catalog.loans();
        self.catalog.list_books().into_iter()
            .filter(|book| loans.is_overdue(book.isbn(), today))
            .filter_map(|book| {
                let loan = loans.find(book.isbn())?.clone();
                Some((book, loan))
            })
            .collect()
    }

    fn available_books(&self) -> Vec<Book> {
        let loans = self.catalog.loans();
        self.catalog.list_books().into_iter()
            .filter(|book| !loans.is_on_loan(book.isbn()))
            .collect()
    }

    fn loans_of(&self, member_id: &str) -> LibraryResult<Vec<(Book, Loan)>> {
        let _ = self.catalog.find_member(member_id)?;
        let mut borrowings = vec![];
        for loan in self.catalog.loans().active_loans_for(member_id) {
            let book = self.catalog.find_book(loan.isbn.as_str())?;
            borrowings.push((book, loan));
        }
        Ok(borrowings)
    }

    fn status_of(&self, isbn: &str, today: NaiveDate) -> LibraryResult<BookStatus> {
        let _ = self.catalog.find_book(isbn)?;
        let status = match self.catalog.loans().find(isbn) {
            None => BookStatus::Available,
            Some(loan) if loan.is_overdue(today) => BookStatus::Overdue,
            Some(_) => BookStatus::OnLoan,
        };
        Ok(status)
    }

    fn default_loan_days(&self) -> i64 {
        self.book_loan_days
    }

    fn catalog(&self) -> &dyn CatalogService {
        &self.catalog
    }

    fn catalog_mut(&mut self) -> &mut dyn CatalogService {
        &mut self.catalog
    }
}
