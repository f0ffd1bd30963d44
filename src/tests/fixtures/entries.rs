// Shared test fixture for entry records.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::entries::core::category::Category;
use crate::modules::entries::core::entry::Entry;

pub struct EntryBuilder {
    inner: Entry,
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EntryBuilder {
    pub fn new() -> Self {
        let created_at = parse_timestamp("2026-01-15T20:00:00Z");
        Self {
            inner: Entry {
                id: Uuid::now_v7(),
                user_id: "user-fixed-0001".to_string(),
                name: "Lindsay Mendez".to_string(),
                notes: String::new(),
                category: Category::Actor,
                created_at,
                updated_at: created_at,
            },
        }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.inner.id = v;
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = v.into();
        self
    }

    pub fn category(mut self, v: Category) -> Self {
        self.inner.category = v;
        self
    }

    /// RFC 3339; sets both timestamps, the shape of a freshly created row.
    pub fn created_at(mut self, v: &str) -> Self {
        let at = parse_timestamp(v);
        self.inner.created_at = at;
        self.inner.updated_at = at;
        self
    }

    pub fn updated_at(mut self, v: &str) -> Self {
        self.inner.updated_at = parse_timestamp(v);
        self
    }

    pub fn build(self) -> Entry {
        self.inner
    }
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("fixture timestamp must be RFC 3339")
        .with_timezone(&Utc)
}

#[cfg(test)]
mod entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_a_freshly_created_shape_by_default() {
        let entry = EntryBuilder::default().build();
        assert_eq!(entry.user_id, "user-fixed-0001");
        assert_eq!(entry.notes, "");
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[rstest]
    fn it_should_override_fields_through_setters() {
        let entry = EntryBuilder::new()
            .user_id("user-b")
            .name("August Wilson")
            .notes("Pittsburgh Cycle")
            .category(Category::Playwright)
            .created_at("2025-06-01T12:00:00Z")
            .updated_at("2025-06-02T12:00:00Z")
            .build();

        assert_eq!(entry.user_id, "user-b");
        assert_eq!(entry.name, "August Wilson");
        assert_eq!(entry.category, Category::Playwright);
        assert!(entry.updated_at > entry.created_at);
    }
}
