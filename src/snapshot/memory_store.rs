use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::library::LibraryResult;
use crate::snapshot::domain::{Snapshot, SnapshotStore};

#[derive(Debug, Default)]
pub(crate) struct MemorySnapshotStore {
    snapshot: RwLock<Snapshot>,
}

impl MemorySnapshotStore {
    pub(crate) fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self) -> LibraryResult<Snapshot> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &Snapshot) -> LibraryResult<()> {
        *self.snapshot.write().await = snapshot.clone();
        Ok(())
    }
}
