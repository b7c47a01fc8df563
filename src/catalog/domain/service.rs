use tracing::info;
use crate::books::domain::BookPatch;
use crate::books::domain::model::Book;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::loans::domain::ledger::LoanLedger;
use crate::members::domain::MemberPatch;
use crate::members::domain::model::Member;
use crate::members::factory::create_member_repository;

// Catalog keeps both collections and the loan ledger together so one value, and one lock
// around it, covers every removal together with its loan purge.
pub struct Catalog {
    books: Box<dyn Repository<Book>>,
    members: Box<dyn Repository<Member>>,
    loans: LoanLedger,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            books: create_book_repository(),
            members: create_member_repository(),
            loans: LoanLedger::new(),
        }
    }

    // bulk load used at startup; the first bad record aborts and nothing is kept
    pub fn load(books: Vec<Book>, members: Vec<Member>) -> LibraryResult<Self> {
        let mut catalog = Catalog::new();
        for book in books {
            catalog.add_book(book)?;
        }
        for member in members {
            catalog.add_member(member)?;
        }
        Ok(catalog)
    }

    pub fn loans(&self) -> &LoanLedger {
        &self.loans
    }

    pub(crate) fn loans_mut(&mut self) -> &mut LoanLedger {
        &mut self.loans
    }
}

impl CatalogService for Catalog {
    fn add_book(&mut self, book: Book) -> LibraryResult<Book> {
        self.books.create(book.clone())?;
        info!(isbn = book.isbn(), title = book.title(), "book added");
        Ok(book)
    }

    fn update_book(&mut self, isbn: &str, patch: &BookPatch) -> LibraryResult<Book> {
        let book = self.books.get_mut(isbn)?;
        book.apply(patch)?;
        Ok(book.clone())
    }

    fn rename_book(&mut self, isbn: &str, new_isbn: &str) -> LibraryResult<Book> {
        let renamed = self.books.get(isbn)?.with_isbn(new_isbn)?;
        if isbn == new_isbn {
            return Ok(renamed);
        }
        if self.books.contains(new_isbn) {
            return Err(LibraryError::duplicate_isbn(format!("book {} already exists", new_isbn).as_str()));
        }
        self.books.replace(isbn, renamed.clone())?;
        self.loans.rekey_book(isbn, new_isbn)?;
        info!(isbn, new_isbn, "book renamed");
        Ok(renamed)
    }

    fn remove_book(&mut self, isbn: &str) -> LibraryResult<Book> {
        let book = self.books.delete(isbn)?;
        if let Some(loan) = self.loans.purge_book(isbn) {
            info!(isbn, member_id = loan.member_id.as_str(), "loan purged with removed book");
        }
        info!(isbn, "book removed");
        Ok(book)
    }

    fn find_book(&self, isbn: &str) -> LibraryResult<Book> {
        self.books.get(isbn).map(Book::clone)
    }

    fn search_books(&self, query: &str) -> Vec<Book> {
        self.books.query(&|book: &Book| book.matches(query))
    }

    fn list_books(&self) -> Vec<Book> {
        self.books.query(&|_: &Book| true)
    }

    fn add_member(&mut self, member: Member) -> LibraryResult<Member> {
        self.members.create(member.clone())?;
        info!(member_id = member.member_id(), "member added");
        Ok(member)
    }

    fn update_member(&mut self, member_id: &str, patch: &MemberPatch) -> LibraryResult<Member> {
        let member = self.members.get_mut(member_id)?;
        member.apply(patch)?;
        Ok(member.clone())
    }

    fn rename_member(&mut self, member_id: &str, new_member_id: &str) -> LibraryResult<Member> {
        let renamed = self.members.get(member_id)?.with_member_id(new_member_id)?;
        if member_id == new_member_id {
            return Ok(renamed);
        }
        if self.members.contains(new_member_id) {
            return Err(LibraryError::duplicate_member_id(
                format!("member {} already exists", new_member_id).as_str()));
        }
        self.members.replace(member_id, renamed.clone())?;
        self.loans.rekey_member(member_id, new_member_id)?;
        info!(member_id, new_member_id, "member renamed");
        Ok(renamed)
    }

    fn remove_member(&mut self, member_id: &str) -> LibraryResult<Member> {
        let member = self.members.delete(member_id)?;
        let purged = self.loans.purge_member(member_id);
        info!(member_id, purged_loans = purged.len(), "member removed");
        Ok(member)
    }

    fn find_member(&self, member_id: &str) -> LibraryResult<Member> {
        self.members.get(member_id).map(Member::clone)
    }

    fn search_members(&self, query: &str) -> Vec<Member> {
        self.members.query(&|member: &Member| member.matches(query))
    }

    fn list_members(&self) -> Vec<Member> {
        self.members.query(&|_: &Member| true)
    }
}
