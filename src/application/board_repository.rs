// Repository traits for session state
use crate::domain::idea_board::{ActivityEntry, IdeaError};
use crate::domain::grid::CellEdit;
use crate::domain::series::SeriesError;
use crate::domain::store::Snapshot;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait SeriesRepository: Send + Sync {
    /// Current rows, in insertion order
    async fn snapshot(&self) -> Snapshot;

    /// Append a blank row and return the resulting rows
    async fn append(&self) -> Snapshot;

    /// Drop the last row (no-op when empty) and return the resulting rows
    async fn truncate_last(&self) -> Snapshot;

    /// Apply a grid edit to one field and return the resulting rows
    async fn apply_edit(&self, edit: &CellEdit) -> Result<Snapshot, SeriesError>;
}

#[async_trait]
pub trait IdeaRepository: Send + Sync {
    async fn ideas(&self) -> Vec<String>;

    async fn activity(&self) -> Vec<ActivityEntry>;

    async fn add_idea(&self, text: &str, at: DateTime<Utc>) -> Result<Vec<String>, IdeaError>;

    async fn delete_idea(&self, index: usize) -> Result<Vec<String>, IdeaError>;
}
