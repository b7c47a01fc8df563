use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::books::dto::BookDto;
use crate::loans::domain::model::Loan;
use crate::utils::date::format_date;

// BorrowingDto pairs a loan with the book it refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowingDto {
    pub book: BookDto,
    pub loan: Loan,
}

impl BorrowingDto {
    pub fn new(book: &Book, loan: &Loan) -> Self {
        Self {
            book: BookDto::from(book),
            loan: loan.clone(),
        }
    }
}

// OverdueDto is one line of the overdue report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueDto {
    pub book: BookDto,
    pub loan: Loan,
    pub days_overdue: i64,
    pub summary: String,
}

impl OverdueDto {
    pub fn new(book: &Book, loan: &Loan, today: NaiveDate) -> Self {
        Self {
            book: BookDto::from(book),
            loan: loan.clone(),
            days_overdue: loan.days_overdue(today),
            summary: format!("{} - Due date: {}", book, format_date(loan.due_date)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::domain::model::Book;
    use crate::lending::dto::OverdueDto;
    use crate::loans::domain::model::Loan;

    #[tokio::test]
    async fn test_should_build_overdue_summary() {
        let checkout = NaiveDate::from_ymd_opt(2024, 3, 1).expect("date");
        let today = NaiveDate::from_ymd_opt(2024, 3, 18).expect("date");
        let book = Book::new("Dune", "Frank Herbert", "111", "SciFi", 1965).expect("book");
        let loan = Loan::new("111", "M1", checkout, 14).expect("loan");
        let overdue = OverdueDto::new(&book, &loan, today);
        assert_eq!("Dune by Frank Herbert - Due date: 2024-03-15", overdue.summary.as_str());
        assert_eq!(3, overdue.days_overdue);
    }
}
