// Series record store - ordered rows with copy-on-write snapshots
use super::series::{ColumnKey, SeriesError, SeriesRow};
use serde::{Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

/// Immutable point-in-time view of the store's rows.
///
/// Snapshots share storage with the store until the next mutation, which
/// copies the rows before writing. A snapshot never observes later edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<Vec<SeriesRow>>);

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_slice().serialize(serializer)
    }
}

impl Deref for Snapshot {
    type Target = [SeriesRow];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    rows: Arc<Vec<SeriesRow>>,
}

impl SeriesStore {
    pub fn new(seed: Vec<SeriesRow>) -> Self {
        Self {
            rows: Arc::new(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(Arc::clone(&self.rows))
    }

    pub fn append(&mut self) {
        Arc::make_mut(&mut self.rows).push(SeriesRow::blank());
    }

    /// Drop the last row. Empty stores are left alone.
    pub fn truncate_last(&mut self) {
        if !self.is_empty() {
            Arc::make_mut(&mut self.rows).pop();
        }
    }

    pub fn update_field(
        &mut self,
        row_index: usize,
        column: ColumnKey,
        raw: &str,
    ) -> Result<(), SeriesError> {
        let len = self.len();
        if row_index >= len {
            return Err(SeriesError::OutOfRange {
                index: row_index,
                len,
            });
        }

        // Edit a copy of the row; the shared rows are only cloned once it parses.
        let mut row = self.rows[row_index].clone();
        row.apply(column, raw)?;
        Arc::make_mut(&mut self.rows)[row_index] = row;
        Ok(())
    }
}
