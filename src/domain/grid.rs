// Grid projection - editable table view over a store snapshot
use super::series::{ColumnKey, SeriesError, SeriesRow};
use super::store::SeriesStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub accessor_key: ColumnKey,
    pub header: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub index: usize,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<GridRow>,
}

impl GridView {
    /// Every row, every column, in store order.
    pub fn project(rows: &[SeriesRow]) -> Self {
        let columns = ColumnKey::ALL
            .iter()
            .map(|&key| GridColumn {
                accessor_key: key,
                header: key.header(),
            })
            .collect();

        let rows = rows
            .iter()
            .enumerate()
            .map(|(index, row)| GridRow {
                index,
                cells: ColumnKey::ALL.iter().map(|&key| row.text(key)).collect(),
            })
            .collect();

        Self { columns, rows }
    }
}

/// A single cell edit as it arrives from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub row: usize,
    pub column: ColumnKey,
    pub raw: String,
}

impl CellEdit {
    pub fn new(row: usize, column_id: &str, raw: impl Into<String>) -> Result<Self, SeriesError> {
        Ok(Self {
            row,
            column: column_id.parse()?,
            raw: raw.into(),
        })
    }

    pub fn apply(&self, store: &mut SeriesStore) -> Result<(), SeriesError> {
        store.update_field(self.row, self.column, &self.raw)
    }
}
