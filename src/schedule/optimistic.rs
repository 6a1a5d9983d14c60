/// Snapshot held while an optimistic write is in flight.
///
/// Move semantics enforce the lifecycle: a write begins by taking a
/// snapshot, and must end in exactly one of `commit` (server confirmed,
/// snapshot dropped) or `rollback` (server rejected, snapshot returned so
/// the caller can restore it).
#[derive(Debug)]
#[must_use = "a pending write must be committed or rolled back"]
pub struct PendingWrite<T> {
    snapshot: T,
}

impl<T> PendingWrite<T> {
    pub fn begin(snapshot: T) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &T {
        &self.snapshot
    }

    /// The write landed; the snapshot is no longer needed.
    pub fn commit(self) {}

    /// The write failed; hand the snapshot back for restoration.
    pub fn rollback(self) -> T {
        self.snapshot
    }
}
