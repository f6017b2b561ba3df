// In-memory repository holding the single session's store and board
use crate::application::board_repository::{IdeaRepository, SeriesRepository};
use crate::domain::grid::CellEdit;
use crate::domain::idea_board::{ActivityEntry, IdeaBoard, IdeaError};
use crate::domain::series::{SeriesError, SeriesRow};
use crate::domain::store::{SeriesStore, Snapshot};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

/// Every request goes through one of these locks, so edits apply in arrival order.
#[derive(Debug)]
pub struct InMemoryRepository {
    store: Mutex<SeriesStore>,
    board: Mutex<IdeaBoard>,
}

impl InMemoryRepository {
    pub fn new(seed: Vec<SeriesRow>, activity_limit: usize) -> Self {
        Self {
            store: Mutex::new(SeriesStore::new(seed)),
            board: Mutex::new(IdeaBoard::new(activity_limit)),
        }
    }

    pub fn with_activity(mut self, entries: Vec<ActivityEntry>) -> Self {
        self.board.get_mut().seed_activity(entries);
        self
    }
}

#[async_trait]
impl SeriesRepository for InMemoryRepository {
    async fn snapshot(&self) -> Snapshot {
        self.store.lock().await.snapshot()
    }

    async fn append(&self) -> Snapshot {
        let mut store = self.store.lock().await;
        store.append();
        store.snapshot()
    }

    async fn truncate_last(&self) -> Snapshot {
        let mut store = self.store.lock().await;
        store.truncate_last();
        store.snapshot()
    }

    async fn apply_edit(&self, edit: &CellEdit) -> Result<Snapshot, SeriesError> {
        let mut store = self.store.lock().await;
        edit.apply(&mut store)?;
        Ok(store.snapshot())
    }
}

#[async_trait]
impl IdeaRepository for InMemoryRepository {
    async fn ideas(&self) -> Vec<String> {
        self.board.lock().await.ideas().to_vec()
    }

    async fn activity(&self) -> Vec<ActivityEntry> {
        self.board.lock().await.activity()
    }

    async fn add_idea(&self, text: &str, at: DateTime<Utc>) -> Result<Vec<String>, IdeaError> {
        let mut board = self.board.lock().await;
        board.add_idea(text, at)?;
        Ok(board.ideas().to_vec())
    }

    async fn delete_idea(&self, index: usize) -> Result<Vec<String>, IdeaError> {
        let mut board = self.board.lock().await;
        board.delete_idea(index)?;
        Ok(board.ideas().to_vec())
    }
}
