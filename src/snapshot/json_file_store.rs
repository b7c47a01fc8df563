use std::io::ErrorKind;
use std::path::PathBuf;
use async_trait::async_trait;
use tracing::info;
use crate::core::library::LibraryResult;
use crate::snapshot::domain::{Snapshot, SnapshotStore};

// JsonFileSnapshotStore keeps the snapshot as pretty printed json in a single file.
#[derive(Debug)]
pub(crate) struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub(crate) fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> LibraryResult<Snapshot> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
                info!(path = %self.path.display(), books = snapshot.books.len(),
                    members = snapshot.members.len(), "snapshot loaded");
                Ok(snapshot)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no snapshot found, starting empty");
                Ok(Snapshot::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, snapshot: &Snapshot) -> LibraryResult<()> {
        let json = serde_json::to_vec_pretty(snapshot)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        info!(path = %self.path.display(), books = snapshot.books.len(),
            members = snapshot.members.len(), "snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::library::LibraryError;
    use crate::members::dto::MemberDto;
    use crate::snapshot::domain::{Snapshot, SnapshotStore};
    use crate::snapshot::json_file_store::JsonFileSnapshotStore;

    fn build_snapshot() -> Snapshot {
        Snapshot::new(
            vec![BookDto::new("Emma", "Jane Austen", "111", "Novel", 1815),
                 BookDto::new("Dune", "Frank Herbert", "222", "SciFi", 1965)],
            vec![MemberDto::new("Ada", "M1", "ada@example.com")])
    }

    #[tokio::test]
    async fn test_should_load_empty_when_missing() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("library.json");
        let store = JsonFileSnapshotStore::new(path.to_str().expect("utf8 path"));
        let snapshot = store.load().await.expect("should load");
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn test_should_save_and_load_snapshot() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("library.json");
        let store = JsonFileSnapshotStore::new(path.to_str().expect("utf8 path"));
        let snapshot = build_snapshot();
        store.save(&snapshot).await.expect("should save");
        assert!(path.exists());
        assert!(!dir.path().join("library.json.tmp").exists());

        let loaded = store.load().await.expect("should load");
        assert_eq!(snapshot, loaded);
    }

    #[tokio::test]
    async fn test_should_overwrite_previous_snapshot() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("library.json");
        let store = JsonFileSnapshotStore::new(path.to_str().expect("utf8 path"));
        store.save(&build_snapshot()).await.expect("should save");
        store.save(&Snapshot::default()).await.expect("should save again");
        assert!(store.load().await.expect("should load").is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_corrupt_snapshot() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("library.json");
        std::fs::write(&path, "{ not json").expect("should write");
        let store = JsonFileSnapshotStore::new(path.to_str().expect("utf8 path"));
        let res = store.load().await;
        assert!(matches!(res, Err(LibraryError::Serialization{ .. })));
    }
}
