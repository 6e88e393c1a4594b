use crate::models::KdeRecord;

/// Append-only, session-scoped sequence of KDE snapshots.
///
/// Records are never replaced, merged, or deleted — repeated identical
/// requests produce repeated records. That is deliberate: it lets the user
/// line up several time-windows' distributions for one column on a single
/// chart, in the order they were computed.
#[derive(Debug, Clone, Default)]
pub struct KdeHistory {
    records: Vec<KdeRecord>,
}

impl KdeHistory {
    pub fn push(&mut self, record: KdeRecord) {
        self.records.push(record);
    }

    /// All snapshots whose source column matches, in insertion order.
    pub fn records_for<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a KdeRecord> {
        self.records.iter().filter(move |r| r.column == column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
