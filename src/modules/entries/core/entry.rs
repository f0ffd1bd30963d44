use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::entries::core::category::Category;

/// A single remembered contact or place.
///
/// `user_id` is the owning identity and the sole authorization boundary:
/// list, update, and delete only ever touch rows whose `user_id` matches the
/// caller. `notes` is never null; absence is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub notes: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
