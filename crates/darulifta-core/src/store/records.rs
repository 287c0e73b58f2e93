use crate::models::Fatwa;

/// Ordered in-memory collection of published rulings, most recent first.
/// Append-only: there is no update or delete path, and lookup is a
/// linear scan. Contents live exactly as long as the process.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Fatwa>,
}

impl RecordStore {
    #[must_use]
    pub fn new(seed: Vec<Fatwa>) -> Self {
        Self { records: seed }
    }

    /// Prepends, so the newest publication is always first in `all()`.
    pub fn append(&mut self, record: Fatwa) {
        self.records.insert(0, record);
    }

    #[must_use]
    pub fn all(&self) -> &[Fatwa] {
        &self.records
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Fatwa> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces the collection with a fresh seed set; the test-lifecycle
    /// equivalent of a full reload.
    pub fn reset(&mut self, seed: Vec<Fatwa>) {
        self.records = seed;
    }
}
