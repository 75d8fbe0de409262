//! List query parameters and paginated responses.
//!
//! The same `ListQuery` is built by the client, parsed by the server, normalised, and
//! forwarded to the external API.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Page sizes offered by the pagination control.
pub const PAGE_SIZES: [u64; 4] = [10, 25, 50, 100];

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// Query parameters accepted by every paged list endpoint.
///
/// `status`, `kind` and `action` are list specific filters; lists that don't support a
/// filter simply never set it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct ListQuery {
    /// Zero based page index.
    #[serde(default)]
    pub page: u64,
    /// Entries per page, clamped to `1..=100`.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Free text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Ticket or verification status filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Sanction kind filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Audit log action filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_LIMIT,
            search: None,
            status: None,
            kind: None,
            action: None,
        }
    }
}

impl ListQuery {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Clamps the page size and drops blank filters, trimming the rest.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page,
            limit: self.limit.clamp(1, MAX_LIMIT),
            search: normalize_filter(self.search),
            status: normalize_filter(self.status),
            kind: normalize_filter(self.kind),
            action: normalize_filter(self.action),
        }
    }

    /// URL encoded form of the normalised query, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let query = self.clone().normalized();
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());

        serializer.append_pair("page", &query.page.to_string());
        serializer.append_pair("limit", &query.limit.to_string());

        let filters = [
            ("search", &query.search),
            ("status", &query.status),
            ("kind", &query.kind),
            ("action", &query.action),
        ];
        for (key, value) in filters {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }

        serializer.finish()
    }
}

fn normalize_filter(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// One page of a list returned by the external API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paginated<T> {
    #[serde(default, alias = "data", alias = "entries")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl<T> Paginated<T> {
    /// Entries per page; a zero limit from the backend counts as one.
    fn page_size(&self) -> u64 {
        self.limit.max(1)
    }

    /// Number of pages, never less than one so "Page 1 of 1" renders for empty lists.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.page_size()).max(1)
    }

    /// One based index of the first entry on this page, `0` when the list is empty.
    pub fn first_shown(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            self.page
                .saturating_mul(self.page_size())
                .saturating_add(1)
                .min(self.total)
        }
    }

    /// One based index of the last entry on this page.
    pub fn last_shown(&self) -> u64 {
        self.page
            .saturating_add(1)
            .saturating_mul(self.page_size())
            .min(self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: u64, page: u64, limit: u64) -> Paginated<u8> {
        Paginated {
            items: Vec::new(),
            total,
            page,
            limit,
        }
    }

    #[test]
    fn normalized_clamps_limit() {
        assert_eq!(ListQuery::new(0, 0).normalized().limit, 1);
        assert_eq!(ListQuery::new(0, 500).normalized().limit, MAX_LIMIT);
        assert_eq!(ListQuery::new(3, 25).normalized().limit, 25);
    }

    #[test]
    fn normalized_trims_and_drops_blank_filters() {
        let query = ListQuery::default()
            .search("  raider  ")
            .status("   ")
            .kind("ban")
            .normalized();

        assert_eq!(query.search.as_deref(), Some("raider"));
        assert_eq!(query.status, None);
        assert_eq!(query.kind.as_deref(), Some("ban"));
        assert_eq!(query.action, None);
    }

    #[test]
    fn deserializes_defaults_from_empty_query() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();

        assert_eq!(query, ListQuery::default());
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn query_string_encodes_filters() {
        let query = ListQuery::new(2, 25).search("fox & wolf").action(" member_ban ");

        assert_eq!(
            query.to_query_string(),
            "page=2&limit=25&search=fox+%26+wolf&action=member_ban"
        );
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(page(0, 0, 10).total_pages(), 1);
        assert_eq!(page(10, 0, 10).total_pages(), 1);
        assert_eq!(page(11, 0, 10).total_pages(), 2);
        assert_eq!(page(5, 0, 0).total_pages(), 5);
    }

    #[test]
    fn shown_range_covers_partial_last_page() {
        let last = page(23, 2, 10);
        assert_eq!(last.first_shown(), 21);
        assert_eq!(last.last_shown(), 23);
        assert!(last.has_previous());
        assert!(!last.has_next());

        let empty = page(0, 0, 10);
        assert_eq!(empty.first_shown(), 0);
        assert_eq!(empty.last_shown(), 0);
        assert!(!empty.has_next());
    }

    #[test]
    fn zero_limit_counts_as_one_entry_per_page() {
        let first = page(5, 0, 0);
        assert_eq!(first.total_pages(), 5);
        assert_eq!(first.first_shown(), 1);
        assert_eq!(first.last_shown(), 1);

        let last = page(5, 4, 0);
        assert_eq!(last.first_shown(), 5);
        assert_eq!(last.last_shown(), 5);
        assert!(!last.has_next());
    }

    #[test]
    fn huge_page_index_does_not_overflow() {
        let far = page(10, u64::MAX, 10);
        assert_eq!(far.first_shown(), 10);
        assert_eq!(far.last_shown(), 10);
        assert!(!far.has_next());
    }

    #[test]
    fn accepts_data_alias_for_items() {
        let parsed: Paginated<u8> =
            serde_json::from_str(r#"{"data":[1,2,3],"total":3}"#).unwrap();

        assert_eq!(parsed.items, vec![1, 2, 3]);
        assert_eq!(parsed.limit, DEFAULT_LIMIT);
    }
}
