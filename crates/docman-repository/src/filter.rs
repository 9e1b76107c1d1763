//! Document search predicate.
//!
//! A [`DocumentFilter`] is assembled per request and handed to the
//! persistence layer. Every field is optional; an empty filter matches all
//! rows, soft-deleted ones included. The same predicate can be rendered as a
//! SQL `WHERE` clause or evaluated against an in-memory [`Document`].

use chrono::{DateTime, Utc};
use docman_core::{Document, ShippingStatus};
use sqlx::{MySql, QueryBuilder};

/// Typed predicate over documents. Conditions are combined with `AND`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// Exact match on the soft-delete flag.
    pub delete_flag: Option<bool>,
    /// Case-sensitive substring match on the title.
    pub title_contains: Option<String>,
    /// Exact match on shipping status, including 0.
    pub shipping_status: Option<ShippingStatus>,
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub created_to: Option<DateTime<Utc>>,
}

impl DocumentFilter {
    /// Creates an empty filter that matches every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter that only matches documents which are not soft-deleted.
    #[must_use]
    pub fn not_deleted() -> Self {
        Self::new().with_delete_flag(false)
    }

    #[must_use]
    pub const fn with_delete_flag(mut self, deleted: bool) -> Self {
        self.delete_flag = Some(deleted);
        self
    }

    #[must_use]
    pub fn with_title_contains(mut self, title: impl Into<String>) -> Self {
        self.title_contains = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_shipping_status(mut self, status: ShippingStatus) -> Self {
        self.shipping_status = Some(status);
        self
    }

    #[must_use]
    pub const fn with_created_from(mut self, from: DateTime<Utc>) -> Self {
        self.created_from = Some(from);
        self
    }

    #[must_use]
    pub const fn with_created_to(mut self, to: DateTime<Utc>) -> Self {
        self.created_to = Some(to);
        self
    }

    /// Returns true when no condition is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Evaluates the predicate against a document.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        self.delete_flag.map_or(true, |flag| document.delete_flag == flag)
            && self
                .title_contains
                .as_deref()
                .map_or(true, |needle| document.title.contains(needle))
            && self
                .shipping_status
                .map_or(true, |status| document.shipping_status == status)
            && self.created_from.map_or(true, |from| document.created_at >= from)
            && self.created_to.map_or(true, |to| document.created_at <= to)
    }

    /// Appends the predicate as a `WHERE` clause with bound parameters.
    ///
    /// Nothing is appended for an empty filter.
    pub fn push_where(&self, query: &mut QueryBuilder<'_, MySql>) {
        let mut clause = Clause::new(query);

        if let Some(flag) = self.delete_flag {
            clause.next().push("delete_flag = ").push_bind(flag);
        }
        if let Some(title) = &self.title_contains {
            // Binary comparison keeps the match case-sensitive regardless of column collation.
            clause
                .next()
                .push("INSTR(CAST(title AS BINARY), CAST(")
                .push_bind(title.clone())
                .push(" AS BINARY)) > 0");
        }
        if let Some(status) = self.shipping_status {
            clause.next().push("shipping_status = ").push_bind(status.value());
        }
        if let Some(from) = self.created_from {
            clause.next().push("created_at >= ").push_bind(from);
        }
        if let Some(to) = self.created_to {
            clause.next().push("created_at <= ").push_bind(to);
        }
    }
}

/// Emits ` WHERE ` before the first condition and ` AND ` before the rest.
struct Clause<'q, 'a> {
    query: &'q mut QueryBuilder<'a, MySql>,
    started: bool,
}

impl<'q, 'a> Clause<'q, 'a> {
    fn new(query: &'q mut QueryBuilder<'a, MySql>) -> Self {
        Self { query, started: false }
    }

    fn next(&mut self) -> &mut QueryBuilder<'a, MySql> {
        let keyword = if self.started { " AND " } else { " WHERE " };
        self.started = true;
        self.query.push(keyword)
    }
}
