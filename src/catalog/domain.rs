pub mod service;

use crate::books::domain::BookPatch;
use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;
use crate::members::domain::MemberPatch;
use crate::members::domain::model::Member;

// CatalogService owns the books and members of the library. Lookups return copies so callers
// cannot reach into the collections, and removals purge dependent loans in the same call.
pub trait CatalogService: Sync + Send {
    fn add_book(&mut self, book: Book) -> LibraryResult<Book>;
    fn update_book(&mut self, isbn: &str, patch: &BookPatch) -> LibraryResult<Book>;
    fn rename_book(&mut self, isbn: &str, new_isbn: &str) -> LibraryResult<Book>;
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<Book>;
    fn find_book(&self, isbn: &str) -> LibraryResult<Book>;
    fn search_books(&self, query: &str) -> Vec<Book>;
    fn list_books(&self) -> Vec<Book>;

    fn add_member(&mut self, member: Member) -> LibraryResult<Member>;
    fn update_member(&mut self, member_id: &str, patch: &MemberPatch) -> LibraryResult<Member>;
    fn rename_member(&mut self, member_id: &str, new_member_id: &str) -> LibraryResult<Member>;
    fn remove_member(&mut self, member_id: &str) -> LibraryResult<Member>;
    fn find_member(&self, member_id: &str) -> LibraryResult<Member>;
    fn search_members(&self, query: &str) -> Vec<Member>;
    fn list_members(&self) -> Vec<Member>;
}
