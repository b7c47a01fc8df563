use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// Repository keeps identity-keyed records in insertion order.
pub trait Repository<Entity>: Sync + Send {
    // create an entity, the identity key must not exist yet
    fn create(&mut self, entity: Entity) -> LibraryResult<()>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<&Entity>;

    // get an entity for in-place edits
    fn get_mut(&mut self, id: &str) -> LibraryResult<&mut Entity>;

    // replace the entity stored under `id` keeping its listing position, the
    // replacement may carry a different identity key
    fn replace(&mut self, id: &str, entity: Entity) -> LibraryResult<()>;

    // delete an entity
    fn delete(&mut self, id: &str) -> LibraryResult<Entity>;

    fn contains(&self, id: &str) -> bool;

    // copies of matching entities in insertion order
    fn query(&self, predicate: &dyn Fn(&Entity) -> bool) -> Vec<Entity>;
}

pub type ErrorBuilder = fn(&str) -> LibraryError;

// MemoryRepository stores records in a vector with a key index so listings keep insertion order.
#[derive(Debug)]
pub struct MemoryRepository<Entity> {
    name: String,
    records: Vec<Entity>,
    index: HashMap<String, usize>,
    on_duplicate: ErrorBuilder,
    on_missing: ErrorBuilder,
}

impl<Entity: Identifiable + Clone> MemoryRepository<Entity> {
    pub fn new(name: &str, on_duplicate: ErrorBuilder, on_missing: ErrorBuilder) -> Self {
        Self {
            name: name.to_string(),
            records: vec![],
            index: HashMap::new(),
            on_duplicate,
            on_missing,
        }
    }

    fn position(&self, id: &str) -> LibraryResult<usize> {
        self.index.get(id).copied().ok_or_else(|| {
            (self.on_missing)(format!("{} {} not found", self.name, id).as_str())
        })
    }

    fn reindex(&mut self) {
        self.index = self.records.iter().enumerate()
            .map(|(pos, record)| (record.id().to_string(), pos))
            .collect();
    }
}

impl<Entity: Identifiable + Clone> Repository<Entity> for MemoryRepository<Entity> {
    fn create(&mut self, entity: Entity) -> LibraryResult<()> {
        if self.index.contains_key(entity.id()) {
            return Err((self.on_duplicate)(
                format!("{} {} already exists", self.name, entity.id()).as_str()));
        }
        self.index.insert(entity.id().to_string(), self.records.len());
        self.records.push(entity);
        Ok(())
    }

    fn get(&self, id: &str) -> LibraryResult<&Entity> {
        let pos = self.position(id)?;
        self.records.get(pos).ok_or_else(|| LibraryError::runtime(
            format!("{} index out of sync for {}", self.name, id).as_str(), None))
    }

    fn get_mut(&mut self, id: &str) -> LibraryResult<&mut Entity> {
        let pos = self.position(id)?;
        let name = self.name.clone();
        self.records.get_mut(pos).ok_or_else(|| LibraryError::runtime(
            format!("{} index out of sync for {}", name, id).as_str(), None))
    }

    fn replace(&mut self, id: &str, entity: Entity) -> LibraryResult<()> {
        let pos = self.position(id)?;
        if entity.id() != id && self.index.contains_key(entity.id()) {
            return Err((self.on_duplicate)(
                format!("{} {} already exists", self.name, entity.id()).as_str()));
        }
        self.index.remove(id);
        self.index.insert(entity.id().to_string(), pos);
        self.records[pos] = entity;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> LibraryResult<Entity> {
        let pos = self.position(id)?;
        let removed = self.records.remove(pos);
        self.reindex();
        Ok(removed)
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn query(&self, predicate: &dyn Fn(&Entity) -> bool) -> Vec<Entity> {
        self.records.iter().filter(|e| predicate(e)).cloned().collect()
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    Memory,
}

impl FromStr for RepositoryStore {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" | "jsonfile" | "file" => Ok(RepositoryStore::JsonFile),
            "memory" | "mem" => Ok(RepositoryStore::Memory),
            other => Err(LibraryError::invalid_field("LMS_STORE", format!("unknown store {}", other).as_str())),
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::JsonFile => write!(f, "json"),
            RepositoryStore::Memory => write!(f, "memory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::LibraryError;
    use crate::core::repository::{MemoryRepository, Repository, RepositoryStore};

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        key: String,
        value: i32,
    }

    impl Identifiable for Record {
        fn id(&self) -> &str {
            self.key.as_str()
        }
    }

    fn record(key: &str, value: i32) -> Record {
        Record { key: key.to_string(), value }
    }

    fn build_repo() -> MemoryRepository<Record> {
        MemoryRepository::new("record", LibraryError::duplicate_isbn, LibraryError::not_found)
    }

    #[tokio::test]
    async fn test_should_create_and_reject_duplicates() {
        let mut repo = build_repo();
        repo.create(record("a", 1)).expect("should create");
        let res = repo.create(record("a", 2));
        assert!(matches!(res, Err(LibraryError::DuplicateIsbn{ .. })));
        assert_eq!(1, repo.query(&|_: &Record| true).len());
        assert_eq!(1, repo.get("a").expect("should get").value);
    }

    #[tokio::test]
    async fn test_should_keep_insertion_order_after_delete() {
        let mut repo = build_repo();
        for (i, key) in ["c", "a", "b", "d"].iter().enumerate() {
            repo.create(record(key, i as i32)).expect("should create");
        }
        let removed = repo.delete("a").expect("should delete");
        assert_eq!("a", removed.key.as_str());
        let keys: Vec<String> = repo.query(&|_: &Record| true).into_iter().map(|r| r.key).collect();
        assert_eq!(vec!["c", "b", "d"], keys);
        assert_eq!(3, repo.get("d").expect("should get after reindex").value);
        assert!(matches!(repo.delete("a"), Err(LibraryError::NotFound{ .. })));
    }

    #[tokio::test]
    async fn test_should_replace_in_place() {
        let mut repo = build_repo();
        repo.create(record("a", 1)).expect("should create");
        repo.create(record("b", 2)).expect("should create");
        repo.replace("a", record("z", 9)).expect("should replace");
        assert!(!repo.contains("a"));
        let keys: Vec<String> = repo.query(&|_: &Record| true).into_iter().map(|r| r.key).collect();
        assert_eq!(vec!["z", "b"], keys);
        let res = repo.replace("z", record("b", 0));
        assert!(matches!(res, Err(LibraryError::DuplicateIsbn{ .. })));
        assert_eq!(9, repo.get("z").expect("should keep record").value);
    }

    #[tokio::test]
    async fn test_should_edit_in_place() {
        let mut repo = build_repo();
        repo.create(record("a", 1)).expect("should create");
        repo.get_mut("a").expect("should get").value = 5;
        assert_eq!(5, repo.get("a").expect("should get").value);
        assert!(matches!(repo.get_mut("x"), Err(LibraryError::NotFound{ .. })));
    }

    #[tokio::test]
    async fn test_should_parse_store() {
        assert_eq!(RepositoryStore::JsonFile, "json".parse::<RepositoryStore>().expect("json"));
        assert_eq!(RepositoryStore::Memory, " Memory ".parse::<RepositoryStore>().expect("memory"));
        assert!("ddb".parse::<RepositoryStore>().is_err());
        assert_eq!("memory", RepositoryStore::Memory.to_string());
    }
}
