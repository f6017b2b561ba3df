// Series row domain model
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("row {index} is out of range (store has {len} rows)")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid value {raw:?} for column {column}: expected a non-negative integer")]
    InvalidFormat { column: ColumnKey, raw: String },

    #[error("unknown column {0:?}")]
    UnknownColumn(String),

    #[error("unknown chart mode {0:?}")]
    UnknownMode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRow {
    pub label: String,
    pub created: u64,
    pub completed: Option<u64>,
    pub active_users: Option<u64>,
}

impl SeriesRow {
    pub fn new(
        label: impl Into<String>,
        created: u64,
        completed: Option<u64>,
        active_users: Option<u64>,
    ) -> Self {
        Self {
            label: label.into(),
            created,
            completed,
            active_users,
        }
    }

    /// Row added by `append`: empty label, zero created, nothing tracked.
    pub fn blank() -> Self {
        Self::new("", 0, None, None)
    }

    /// Value of a numeric column, `None` for `Label` or an untracked field.
    pub fn count(&self, column: ColumnKey) -> Option<u64> {
        match column {
            ColumnKey::Label => None,
            ColumnKey::Created => Some(self.created),
            ColumnKey::Completed => self.completed,
            ColumnKey::ActiveUsers => self.active_users,
        }
    }

    /// Cell text for the grid; untracked counts render empty.
    pub fn text(&self, column: ColumnKey) -> String {
        match column {
            ColumnKey::Label => self.label.clone(),
            _ => self.count(column).map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    /// Apply a raw edit to one field. The row is untouched on error.
    pub fn apply(&mut self, column: ColumnKey, raw: &str) -> Result<(), SeriesError> {
        match column {
            ColumnKey::Label => self.label = raw.to_string(),
            ColumnKey::Created => {
                self.created = parse_count(column, raw)?.ok_or_else(|| {
                    SeriesError::InvalidFormat {
                        column,
                        raw: raw.to_string(),
                    }
                })?
            }
            ColumnKey::Completed => self.completed = parse_count(column, raw)?,
            ColumnKey::ActiveUsers => self.active_users = parse_count(column, raw)?,
        }
        Ok(())
    }
}

/// Parse a count cell. Blank input means "not tracked".
fn parse_count(column: ColumnKey, raw: &str) -> Result<Option<u64>, SeriesError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| SeriesError::InvalidFormat {
            column,
            raw: raw.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    Label,
    Created,
    Completed,
    ActiveUsers,
}

impl ColumnKey {
    pub const ALL: [ColumnKey; 4] = [
        ColumnKey::Label,
        ColumnKey::Created,
        ColumnKey::Completed,
        ColumnKey::ActiveUsers,
    ];

    /// The plotted fields, in palette order.
    pub const NUMERIC: [ColumnKey; 3] = [
        ColumnKey::Created,
        ColumnKey::Completed,
        ColumnKey::ActiveUsers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::Label => "label",
            ColumnKey::Created => "created",
            ColumnKey::Completed => "completed",
            ColumnKey::ActiveUsers => "activeUsers",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            ColumnKey::Label => "Name",
            ColumnKey::Created => "tasksCreated",
            ColumnKey::Completed => "tasksCompleted",
            ColumnKey::ActiveUsers => "activeUsers",
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "label" | "name" => Ok(ColumnKey::Label),
            "created" | "tasksCreated" => Ok(ColumnKey::Created),
            "completed" | "tasksCompleted" => Ok(ColumnKey::Completed),
            "activeUsers" | "active_users" => Ok(ColumnKey::ActiveUsers),
            other => Err(SeriesError::UnknownColumn(other.to_string())),
        }
    }
}

/// Six months of demo data the store starts from when no seed is configured.
pub fn demo_rows() -> Vec<SeriesRow> {
    vec![
        SeriesRow::new("Jan", 32, Some(18), Some(10)),
        SeriesRow::new("Feb", 45, Some(30), Some(12)),
        SeriesRow::new("Mar", 60, Some(50), Some(15)),
        SeriesRow::new("Apr", 48, Some(42), Some(14)),
        SeriesRow::new("May", 52, Some(47), Some(17)),
        SeriesRow::new("Jun", 40, Some(35), Some(13)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_label_is_verbatim() {
        let mut row = SeriesRow::new("Jan", 32, None, None);
        row.apply(ColumnKey::Label, "  Q1 ").unwrap();
        assert_eq!(row.label, "  Q1 ");
    }

    #[test]
    fn test_apply_numeric() {
        let mut row = SeriesRow::blank();
        row.apply(ColumnKey::Created, " 42 ").unwrap();
        row.apply(ColumnKey::ActiveUsers, "7").unwrap();
        assert_eq!(row.created, 42);
        assert_eq!(row.active_users, Some(7));
        assert_eq!(row.completed, None);
    }

    #[test]
    fn test_apply_rejects_bad_numbers() {
        let mut row = SeriesRow::new("Jan", 32, Some(18), None);
        for raw in ["abc", "-1", "4.5", "1e3"] {
            let err = row.apply(ColumnKey::Created, raw).unwrap_err();
            assert!(matches!(err, SeriesError::InvalidFormat { .. }));
        }
        assert_eq!(row, SeriesRow::new("Jan", 32, Some(18), None));
    }

    #[test]
    fn test_blank_clears_optional_but_not_created() {
        let mut row = SeriesRow::new("Jan", 32, Some(18), Some(10));
        row.apply(ColumnKey::Completed, "").unwrap();
        assert_eq!(row.completed, None);

        let err = row.apply(ColumnKey::Created, "   ").unwrap_err();
        assert_eq!(
            err,
            SeriesError::InvalidFormat {
                column: ColumnKey::Created,
                raw: "   ".to_string()
            }
        );
        assert_eq!(row.created, 32);
    }

    #[test]
    fn test_text_renders_untracked_as_empty() {
        let row = SeriesRow::new("Feb", 45, None, Some(12));
        assert_eq!(row.text(ColumnKey::Label), "Feb");
        assert_eq!(row.text(ColumnKey::Created), "45");
        assert_eq!(row.text(ColumnKey::Completed), "");
        assert_eq!(row.text(ColumnKey::ActiveUsers), "12");
    }

    #[test]
    fn test_column_key_parsing() {
        assert_eq!("activeUsers".parse::<ColumnKey>().unwrap(), ColumnKey::ActiveUsers);
        assert_eq!("tasksCreated".parse::<ColumnKey>().unwrap(), ColumnKey::Created);
        assert_eq!(
            "owner".parse::<ColumnKey>().unwrap_err(),
            SeriesError::UnknownColumn("owner".to_string())
        );
        for key in ColumnKey::ALL {
            assert_eq!(key.as_str().parse::<ColumnKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_headers_match_table_titles() {
        let headers: Vec<_> = ColumnKey::ALL.iter().map(|key| key.header()).collect();
        assert_eq!(headers, ["Name", "tasksCreated", "tasksCompleted", "activeUsers"]);
    }

    #[test]
    fn test_row_serializes_camel_case() {
        let json = serde_json::to_value(SeriesRow::new("Jan", 32, None, Some(10))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"label": "Jan", "created": 32, "completed": null, "activeUsers": 10})
        );
    }
}
