use serde::{Deserialize, Serialize};

pub mod model;

// MemberPatch carries edits for every member field except the member id, which is
// changed through a catalog rename.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub contact: Option<String>,
}

impl MemberPatch {
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn contact(mut self, contact: &str) -> Self {
        self.contact = Some(contact.to_string());
        self
    }
}
