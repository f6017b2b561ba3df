// Idea service - Use cases for the idea board and its activity log
use crate::application::board_repository::IdeaRepository;
use crate::domain::idea_board::{ActivityEntry, IdeaError};
use chrono::Utc;
use std::sync::Arc;

#[derive(Clone)]
pub struct IdeaService {
    repository: Arc<dyn IdeaRepository>,
}

impl IdeaService {
    pub fn new(repository: Arc<dyn IdeaRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_ideas(&self) -> Vec<String> {
        self.repository.ideas().await
    }

    pub async fn activity(&self) -> Vec<ActivityEntry> {
        self.repository.activity().await
    }

    pub async fn add_idea(&self, text: &str) -> Result<Vec<String>, IdeaError> {
        let ideas = self.repository.add_idea(text, Utc::now()).await?;
        tracing::info!("Added idea, board now has {} ideas", ideas.len());
        Ok(ideas)
    }

    pub async fn delete_idea(&self, index: usize) -> Result<Vec<String>, IdeaError> {
        let ideas = self.repository.delete_idea(index).await?;
        tracing::info!("Deleted idea {}, board now has {} ideas", index, ideas.len());
        Ok(ideas)
    }
}
