use crate::store::atomic_writer::AtomicWriter;
use crate::traits::SnapshotStore;
use corkboard_core::{CorkboardError, CorkboardResult};
use corkboard_domain::Snapshot;
use std::path::{Path, PathBuf};

/// JSON file-backed snapshot store.
///
/// The whole snapshot is one pretty-printed JSON blob, replaced on every
/// save. The blob carries no version envelope or metadata: serializing the
/// same board twice yields byte-identical output.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl SnapshotStore for JsonFileStore {
    async fn save(&self, snapshot: &Snapshot) -> CorkboardResult<()> {
        let json_bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| CorkboardError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );

        Ok(())
    }

    async fn load(&self) -> CorkboardResult<Snapshot> {
        let file_bytes = AtomicWriter::read_all(&self.path).await?;

        let snapshot: Snapshot = serde_json::from_slice(&file_bytes)
            .map_err(|e| CorkboardError::CorruptSnapshot(e.to_string()))?;

        tracing::info!(
            "Loaded {} bytes from {}",
            file_bytes.len(),
            self.path.display()
        );

        Ok(snapshot)
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
