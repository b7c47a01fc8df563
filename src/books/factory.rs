use crate::books::domain::model::Book;
use crate::core::library::LibraryError;
use crate::core::repository::{MemoryRepository, Repository};

pub(crate) fn create_book_repository() -> Box<dyn Repository<Book>> {
    Box::new(MemoryRepository::new("book", LibraryError::duplicate_isbn, LibraryError::not_found))
}
