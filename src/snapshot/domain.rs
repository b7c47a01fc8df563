use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;
use crate::members::dto::MemberDto;

// Snapshot is the persisted form of the catalog. Loans are never part of it, a reload
// always starts with an empty ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub books: Vec<BookDto>,
    pub members: Vec<MemberDto>,
}

impl Snapshot {
    pub fn new(books: Vec<BookDto>, members: Vec<MemberDto>) -> Self {
        Self {
            books,
            members,
        }
    }

    pub fn capture(catalog: &dyn CatalogService) -> Self {
        Self {
            books: catalog.list_books().iter().map(BookDto::from).collect(),
            members: catalog.list_members().iter().map(MemberDto::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.members.is_empty()
    }
}

#[async_trait]
pub trait SnapshotStore: Sync + Send {
    // load the last saved snapshot, an empty one if nothing was saved yet
    async fn load(&self) -> LibraryResult<Snapshot>;

    // replace the saved snapshot
    async fn save(&self, snapshot: &Snapshot) -> LibraryResult<()>;
}
