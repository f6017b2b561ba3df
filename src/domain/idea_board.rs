// Idea board domain model
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdeaError {
    #[error("idea text is empty")]
    Empty,

    #[error("idea {index} is out of range (board has {len} ideas)")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub label: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IdeaBoard {
    ideas: Vec<String>,
    activity: VecDeque<ActivityEntry>,
    activity_limit: usize,
}

impl IdeaBoard {
    pub fn new(activity_limit: usize) -> Self {
        Self {
            ideas: Vec::new(),
            activity: VecDeque::new(),
            activity_limit,
        }
    }

    pub fn ideas(&self) -> &[String] {
        &self.ideas
    }

    /// Newest first.
    pub fn activity(&self) -> Vec<ActivityEntry> {
        self.activity.iter().cloned().collect()
    }

    pub fn add_idea(&mut self, text: &str, at: DateTime<Utc>) -> Result<(), IdeaError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(IdeaError::Empty);
        }
        self.ideas.push(text.to_string());
        self.record(format!("Added idea: \"{}\"", text), at);
        Ok(())
    }

    pub fn delete_idea(&mut self, index: usize) -> Result<String, IdeaError> {
        if index >= self.ideas.len() {
            return Err(IdeaError::OutOfRange {
                index,
                len: self.ideas.len(),
            });
        }
        Ok(self.ideas.remove(index))
    }

    /// Load earlier activity, newest first, behind anything already recorded.
    pub fn seed_activity(&mut self, entries: Vec<ActivityEntry>) {
        self.activity.extend(entries);
        self.activity.truncate(self.activity_limit);
    }

    fn record(&mut self, label: String, at: DateTime<Utc>) {
        self.activity.push_front(ActivityEntry { label, at });
        self.activity.truncate(self.activity_limit);
    }
}

/// Recent activity the demo board opens with.
pub fn demo_activity(now: DateTime<Utc>) -> Vec<ActivityEntry> {
    [
        ("Edited \"Project Proposal\"", 2),
        ("Commented on \"Dashboard UI\"", 4),
        ("Uploaded \"Meeting Notes.pdf\"", 24),
        ("Joined \"Design Sprint\"", 72),
    ]
    .into_iter()
    .map(|(label, hours)| ActivityEntry {
        label: label.to_string(),
        at: now - TimeDelta::hours(hours),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_add_trims_and_logs() {
        let mut board = IdeaBoard::new(10);
        board.add_idea("  dark mode  ", at(1)).unwrap();
        board.add_idea("keyboard shortcuts", at(2)).unwrap();

        assert_eq!(board.ideas(), ["dark mode", "keyboard shortcuts"]);
        let activity = board.activity();
        assert_eq!(activity[0].label, "Added idea: \"keyboard shortcuts\"");
        assert_eq!(activity[0].at, at(2));
        assert_eq!(activity[1].label, "Added idea: \"dark mode\"");
    }

    #[test]
    fn test_blank_idea_is_rejected() {
        let mut board = IdeaBoard::new(10);
        assert_eq!(board.add_idea("   ", at(1)), Err(IdeaError::Empty));
        assert!(board.ideas().is_empty());
        assert!(board.activity().is_empty());
    }

    #[test]
    fn test_delete_by_index() {
        let mut board = IdeaBoard::new(10);
        for text in ["a", "b", "c"] {
            board.add_idea(text, at(1)).unwrap();
        }
        assert_eq!(board.delete_idea(1).unwrap(), "b");
        assert_eq!(board.ideas(), ["a", "c"]);
        assert_eq!(
            board.delete_idea(2),
            Err(IdeaError::OutOfRange { index: 2, len: 2 })
        );
        // deletes are not logged
        assert_eq!(board.activity().len(), 3);
    }

    #[test]
    fn test_seeded_activity_sits_behind_new_entries() {
        let mut board = IdeaBoard::new(3);
        board.seed_activity(demo_activity(at(1_000_000)));
        assert_eq!(board.activity().len(), 3);
        assert_eq!(board.activity()[0].label, "Edited \"Project Proposal\"");

        board.add_idea("calendar sync", at(1_000_001)).unwrap();
        let labels: Vec<_> = board.activity().into_iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "Added idea: \"calendar sync\"",
                "Edited \"Project Proposal\"",
                "Commented on \"Dashboard UI\"",
            ]
        );
    }

    #[test]
    fn test_activity_is_capped() {
        let mut board = IdeaBoard::new(2);
        for (i, text) in ["a", "b", "c"].iter().enumerate() {
            board.add_idea(text, at(i as i64)).unwrap();
        }
        let labels: Vec<_> = board.activity().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Added idea: \"c\"", "Added idea: \"b\""]);
    }
}
