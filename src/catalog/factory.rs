use std::convert::TryFrom;
use crate::books::domain::model::Book;
use crate::catalog::domain::service::Catalog;
use crate::core::library::LibraryResult;
use crate::members::domain::model::Member;
use crate::snapshot::domain::Snapshot;

// rebuilds the catalog from a snapshot, loans always start empty
pub fn create_catalog_from(snapshot: &Snapshot) -> LibraryResult<Catalog> {
    let books = snapshot.books.iter().map(Book::try_from).collect::<LibraryResult<Vec<Book>>>()?;
    let members = snapshot.members.iter().map(Member::try_from).collect::<LibraryResult<Vec<Member>>>()?;
    Catalog::load(books, members)
}
