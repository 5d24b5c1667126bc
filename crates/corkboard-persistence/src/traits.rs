use async_trait::async_trait;
use corkboard_core::CorkboardResult;
use corkboard_domain::Snapshot;
use std::path::Path;

/// Abstract storage for the board snapshot: one named durable slot, read
/// once at startup and overwritten wholesale after every mutation.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Overwrite the stored snapshot.
    async fn save(&self, snapshot: &Snapshot) -> CorkboardResult<()>;

    /// Load the stored snapshot. Fails with `CorruptSnapshot` when the
    /// slot holds unparsable data; callers wanting fail-open behavior use
    /// `load_or_empty`.
    async fn load(&self) -> CorkboardResult<Snapshot>;

    /// Check if the slot holds anything.
    async fn exists(&self) -> bool;

    /// Location of the slot, for diagnostics.
    fn path(&self) -> &Path;

    /// Fail-open load used at board initialization: an absent slot is a
    /// first run and an unreadable one is discarded with a warning. Either
    /// way the board starts empty rather than failing to start.
    async fn load_or_empty(&self) -> Snapshot {
        if !self.exists().await {
            return Snapshot::new();
        }
        match self.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(
                    "Discarding unreadable snapshot at {}: {}",
                    self.path().display(),
                    e
                );
                Snapshot::new()
            }
        }
    }
}
