// Chart service - Use cases for editing series data and deriving views
use crate::application::board_repository::SeriesRepository;
use crate::domain::chart::{ChartMode, ChartView};
use crate::domain::grid::{CellEdit, GridView};
use crate::domain::series::SeriesError;
use crate::domain::store::Snapshot;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn SeriesRepository>,
    mode: Arc<RwLock<ChartMode>>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn SeriesRepository>) -> Self {
        Self {
            repository,
            mode: Arc::new(RwLock::new(ChartMode::default())),
        }
    }

    pub async fn rows(&self) -> Snapshot {
        self.repository.snapshot().await
    }

    pub async fn grid(&self) -> GridView {
        GridView::project(&self.repository.snapshot().await)
    }

    /// Project the chart in `mode`, or in the session's selected mode.
    pub async fn chart(&self, mode: Option<ChartMode>) -> ChartView {
        let mode = match mode {
            Some(mode) => mode,
            None => *self.mode.read().await,
        };
        let rows = self.repository.snapshot().await;
        let view = ChartView::project(&rows, mode);
        tracing::debug!("Projected {:?} chart over {} rows", view.mode(), rows.len());
        view
    }

    pub async fn selected_mode(&self) -> ChartMode {
        *self.mode.read().await
    }

    pub async fn select_mode(&self, mode: ChartMode) {
        *self.mode.write().await = mode;
        tracing::info!("Chart mode set to {:?}", mode);
    }

    pub async fn append_row(&self) -> Snapshot {
        let rows = self.repository.append().await;
        tracing::info!("Appended row, store now has {} rows", rows.len());
        rows
    }

    pub async fn remove_last_row(&self) -> Snapshot {
        let rows = self.repository.truncate_last().await;
        tracing::info!("Removed last row, store now has {} rows", rows.len());
        rows
    }

    pub async fn edit_cell(
        &self,
        row: usize,
        column_id: &str,
        raw: &str,
    ) -> Result<GridView, SeriesError> {
        let edit = CellEdit::new(row, column_id, raw).inspect_err(|e| {
            tracing::warn!("Rejected edit of row {}: {}", row, e);
        })?;

        match self.repository.apply_edit(&edit).await {
            Ok(rows) => {
                tracing::info!("Updated {} of row {}", edit.column, edit.row);
                Ok(GridView::project(&rows))
            }
            Err(e) => {
                tracing::warn!("Rejected edit of row {}: {}", row, e);
                Err(e)
            }
        }
    }
}
