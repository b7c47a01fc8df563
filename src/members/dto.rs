use std::convert::TryFrom;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::members::domain::model::Member;

// MemberDto is the transfer form of a member for snapshots and the http adapter.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub name: String,
    pub member_id: String,
    pub contact: String,
}

impl MemberDto {
    pub fn new(name: &str, member_id: &str, contact: &str) -> Self {
        Self {
            name: name.to_string(),
            member_id: member_id.to_string(),
            contact: contact.to_string(),
        }
    }
}

impl From<&Member> for MemberDto {
    fn from(other: &Member) -> Self {
        Self {
            name: other.name().to_string(),
            member_id: other.member_id().to_string(),
            contact: other.contact().to_string(),
        }
    }
}

impl TryFrom<&MemberDto> for Member {
    type Error = LibraryError;

    fn try_from(other: &MemberDto) -> LibraryResult<Self> {
        Member::new(other.name.as_str(), other.member_id.as_str(), other.contact.as_str())
    }
}
