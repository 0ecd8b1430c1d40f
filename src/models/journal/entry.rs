//! A journal entry, one shape for both the row and the wire.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub scheduled_for: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
