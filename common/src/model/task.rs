use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// Tasks are created from a plain form submission, edited in place (content
/// only) and deleted by id. The id and creation timestamp are assigned by the
/// database on insert and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
