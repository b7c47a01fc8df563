use crate::core::library::LibraryError;
use crate::core::repository::{MemoryRepository, Repository};
use crate::members::domain::model::Member;

pub(crate) fn create_member_repository() -> Box<dyn Repository<Member>> {
    Box::new(MemoryRepository::new("member", LibraryError::duplicate_member_id, LibraryError::not_found))
}
