//! Blog article as seen by the sitemap

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of an article in the publication sync pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    #[default]
    Pending,
    Syncing,
    Synced,
    Failed,
}

/// A publishable article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub published: bool,

    #[serde(default)]
    pub sync_status: SyncStatus,

    pub modified_time: DateTime<Utc>,
}

impl Article {
    /// Visible, published and synced
    pub fn is_publishable(&self) -> bool {
        !self.hidden && self.published && self.sync_status == SyncStatus::Synced
    }
}
