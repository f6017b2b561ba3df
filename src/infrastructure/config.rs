use crate::domain::idea_board::{demo_activity, ActivityEntry};
use crate::domain::series::{demo_rows, SeriesRow};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

const ENV_PREFIX: &str = "TASKBOARD";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub board: BoardSettings,
    #[serde(default)]
    pub activity: Vec<ActivitySeedConfig>,
}

/// Activity shown before anything happens in the session, newest first.
#[derive(Debug, Deserialize, Clone)]
pub struct ActivitySeedConfig {
    pub label: String,
    #[serde(default)]
    pub hours_ago: u32,
}

impl ServerConfig {
    /// Configured starting activity, or the demo entries when none are configured.
    pub fn activity_entries(&self, now: DateTime<Utc>) -> Vec<ActivityEntry> {
        if self.activity.is_empty() {
            return demo_activity(now);
        }
        self.activity
            .iter()
            .map(|a| ActivityEntry {
                label: a.label.clone(),
                at: now - TimeDelta::hours(i64::from(a.hours_ago)),
            })
            .collect()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BoardSettings {
    #[serde(default = "default_activity_limit")]
    pub activity_limit: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            activity_limit: default_activity_limit(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_activity_limit() -> usize {
    50
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub rows: Vec<SeedRowConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedRowConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub created: u64,
    pub completed: Option<u64>,
    pub active_users: Option<u64>,
}

impl SeedConfig {
    /// Configured rows, or the demo months when none are configured.
    pub fn into_rows(self) -> Vec<SeriesRow> {
        if self.rows.is_empty() {
            return demo_rows();
        }
        self.rows
            .into_iter()
            .map(|r| SeriesRow::new(r.label, r.created, r.completed, r.active_users))
            .collect()
    }
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_seed_config() -> anyhow::Result<SeedConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/series").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
