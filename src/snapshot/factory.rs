use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::snapshot::domain::{Snapshot, SnapshotStore};
use crate::snapshot::json_file_store::JsonFileSnapshotStore;
use crate::snapshot::memory_store::MemorySnapshotStore;

pub fn create_snapshot_store(config: &Configuration) -> Box<dyn SnapshotStore> {
    match config.store {
        RepositoryStore::JsonFile => {
            Box::new(JsonFileSnapshotStore::new(config.snapshot_path.as_str()))
        }
        RepositoryStore::Memory => {
            Box::new(MemorySnapshotStore::new(Snapshot::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::snapshot::factory::create_snapshot_store;

    #[tokio::test]
    async fn test_should_create_file_store() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let mut config = Configuration::new("test");
        config.snapshot_path = dir.path().join("lib.json").to_string_lossy().to_string();
        let store = create_snapshot_store(&config);
        assert!(store.load().await.expect("should load").is_empty());
    }

    #[tokio::test]
    async fn test_should_create_memory_store() {
        let mut config = Configuration::new("test");
        config.store = RepositoryStore::Memory;
        let store = create_snapshot_store(&config);
        assert!(store.load().await.expect("should load").is_empty());
    }
}
