use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::members::domain::MemberPatch;

// Member abstracts a registered borrower identified by member id.
#[derive(Debug, Clone)]
pub struct Member {
    name: String,
    member_id: String,
    contact: String,
}

impl Member {
    pub fn new(name: &str, member_id: &str, contact: &str) -> LibraryResult<Self> {
        Ok(Self {
            name: validate_name(name)?,
            member_id: validate_member_id(member_id)?,
            contact: contact.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn set_name(&mut self, name: &str) -> LibraryResult<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_contact(&mut self, contact: &str) {
        self.contact = contact.to_string();
    }

    // the name is the only checked field and is applied first, a bad patch changes nothing
    pub(crate) fn apply(&mut self, patch: &MemberPatch) -> LibraryResult<()> {
        if let Some(name) = &patch.name {
            self.set_name(name)?;
        }
        if let Some(contact) = &patch.contact {
            self.set_contact(contact);
        }
        Ok(())
    }

    pub(crate) fn with_member_id(&self, member_id: &str) -> LibraryResult<Self> {
        let mut renamed = self.clone();
        renamed.member_id = validate_member_id(member_id)?;
        Ok(renamed)
    }

    pub(crate) fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(query.as_str())
            || self.member_id.to_lowercase().contains(query.as_str())
    }
}

fn validate_name(name: &str) -> LibraryResult<String> {
    if name.trim().is_empty() {
        return Err(LibraryError::invalid_field("name", "name is required"));
    }
    Ok(name.to_string())
}

fn validate_member_id(member_id: &str) -> LibraryResult<String> {
    if member_id.trim().is_empty() {
        return Err(LibraryError::invalid_field("member_id", "member id is required"));
    }
    Ok(member_id.to_string())
}

impl Identifiable for Member {
    fn id(&self) -> &str {
        &self.member_id
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.member_id == other.member_id
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.member_id.hash(state);
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.member_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::members::domain::MemberPatch;
    use crate::members::domain::model::Member;

    #[tokio::test]
    async fn test_should_build_member() {
        let member = Member::new("Ada Lovelace", "M1", "ada@example.org").expect("should build member");
        assert_eq!("Ada Lovelace", member.name());
        assert_eq!("M1", member.member_id());
        assert_eq!("Ada Lovelace (ID: M1)", member.to_string());
    }

    #[tokio::test]
    async fn test_should_require_name_and_id() {
        assert!(matches!(Member::new("", "M1", ""), Err(LibraryError::InvalidField{ ref field, .. }) if field == "name"));
        assert!(matches!(Member::new("Ada", " ", ""), Err(LibraryError::InvalidField{ ref field, .. }) if field == "member_id"));
    }

    #[tokio::test]
    async fn test_should_compare_by_member_id() {
        let a = Member::new("Ada", "M1", "a").expect("member");
        let b = Member::new("Ada L.", "M1", "b").expect("member");
        let c = Member::new("Ada", "M2", "a").expect("member");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[tokio::test]
    async fn test_should_apply_patch() {
        let mut member = Member::new("Ada", "M1", "a").expect("member");
        member.apply(&MemberPatch::default().contact("555-0100")).expect("should patch");
        assert_eq!("555-0100", member.contact());
        assert_eq!("Ada", member.name());
        let res = member.apply(&MemberPatch::default().name("").contact("lost"));
        assert!(matches!(res, Err(LibraryError::InvalidField{ .. })));
        assert_eq!("555-0100", member.contact());
    }

    #[tokio::test]
    async fn test_should_match_name_or_id() {
        let member = Member::new("Ada Lovelace", "M-42", "ada@example.org").expect("member");
        assert!(member.matches("love"));
        assert!(member.matches("m-4"));
        assert!(member.matches(""));
        assert!(!member.matches("example.org"));
    }
}
