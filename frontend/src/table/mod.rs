//! Client-side search, sort and pagination shared by every list page.
//!
//! A page describes its records once with a [`TableConfig`] (which fields are
//! searchable, which keys are sortable and how each key reads its value) and
//! drives a [`TableState`] from user input. [`TableConfig::apply`] turns the
//! raw record list into the rows of the current page.

pub mod filter;
pub mod pagination;
pub mod sort;
pub mod view_model;

pub use filter::filter_records;
pub use pagination::{page_items, slice_page, total_pages, PageItem, PageMeta, Pagination};
pub use sort::{sort_records, SortDirection, SortDirective, SortValue};
pub use view_model::{use_server_table_view_model, use_table_view_model, TableViewModel};

/// Sortable column of a table: a key, the header label and the accessor that
/// resolves the key for one record.
pub struct SortColumn<T, K> {
    pub key: K,
    pub label: &'static str,
    pub accessor: fn(&T) -> SortValue,
}

impl<T, K: Copy> Clone for SortColumn<T, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            accessor: self.accessor,
        }
    }
}

pub struct TableConfig<T, K> {
    pub search_fields: fn(&T) -> Vec<String>,
    pub columns: Vec<SortColumn<T, K>>,
}

impl<T, K: Copy> Clone for TableConfig<T, K> {
    fn clone(&self) -> Self {
        Self {
            search_fields: self.search_fields,
            columns: self.columns.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState<K> {
    pub query: String,
    pub sort: SortDirective<K>,
    pub pagination: Pagination,
}

impl<K> TableState<K> {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            sort: SortDirective::default(),
            pagination: Pagination::new(page_size),
        }
    }
}

impl<K: Copy + PartialEq> TableState<K> {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pagination.page = 1;
    }

    pub fn toggle_sort(&mut self, key: K) {
        self.sort.toggle(key);
    }
}

/// Rows of the current page plus the numbers the page controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    pub rows: Vec<T>,
    pub matched: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Default for TableView<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            matched: 0,
            page: 1,
            total_pages: 0,
        }
    }
}

impl<T: Clone, K: Copy + PartialEq> TableConfig<T, K> {
    pub fn accessor(&self, key: K) -> Option<fn(&T) -> SortValue> {
        self.columns
            .iter()
            .find(|column| column.key == key)
            .map(|column| column.accessor)
    }

    /// Filter and sort without slicing.
    pub fn arrange(&self, records: &[T], state: &TableState<K>) -> Vec<T> {
        let filtered = filter_records(records, &state.query, self.search_fields);
        let accessor = state.sort.key.and_then(|key| self.accessor(key));
        match accessor {
            Some(accessor) => sort_records(filtered, accessor, state.sort.direction),
            None => filtered,
        }
    }

    /// Filter, sort and cut out the current page (client-driven pagination).
    pub fn apply(&self, records: &[T], state: &TableState<K>) -> TableView<T> {
        let arranged = self.arrange(records, state);
        let total = total_pages(arranged.len(), state.pagination.page_size);
        let page = state.pagination.page.clamp(1, total.max(1));
        TableView {
            rows: slice_page(&arranged, page, state.pagination.page_size).to_vec(),
            matched: arranged.len(),
            page,
            total_pages: total,
        }
    }

    /// Filter and sort a page that the server already cut out; the page
    /// numbers come from the response metadata.
    pub fn apply_server_page(
        &self,
        records: &[T],
        state: &TableState<K>,
        meta: &PageMeta,
    ) -> TableView<T> {
        let rows = self.arrange(records, state);
        TableView {
            matched: rows.len(),
            rows,
            page: state.pagination.page,
            total_pages: meta.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Member {
        name: &'static str,
        date: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum MemberKey {
        Name,
        Date,
    }

    fn config() -> TableConfig<Member, MemberKey> {
        TableConfig {
            search_fields: |m| vec![m.name.to_string(), m.date.to_string()],
            columns: vec![
                SortColumn {
                    key: MemberKey::Name,
                    label: "Name",
                    accessor: |m| SortValue::text(m.name),
                },
                SortColumn {
                    key: MemberKey::Date,
                    label: "Date",
                    accessor: |m| SortValue::date(m.date),
                },
            ],
        }
    }

    fn members() -> Vec<Member> {
        vec![
            Member {
                name: "Bob",
                date: "2024-01-02",
            },
            Member {
                name: "Amy",
                date: "2024-01-01",
            },
        ]
    }

    fn names(rows: &[Member]) -> Vec<&'static str> {
        rows.iter().map(|m| m.name).collect()
    }

    #[test]
    fn sorts_by_name_ascending_and_date_descending() {
        let config = config();
        let mut state = TableState::new(10);

        state.toggle_sort(MemberKey::Name);
        assert_eq!(names(&config.apply(&members(), &state).rows), ["Amy", "Bob"]);

        state.toggle_sort(MemberKey::Date);
        state.toggle_sort(MemberKey::Date);
        assert_eq!(state.sort.direction, SortDirection::Descending);
        assert_eq!(names(&config.apply(&members(), &state).rows), ["Bob", "Amy"]);
    }

    #[test]
    fn unset_sort_key_keeps_input_order() {
        let view = config().apply(&members(), &TableState::new(10));
        assert_eq!(names(&view.rows), ["Bob", "Amy"]);
    }

    #[test]
    fn query_change_resets_to_first_page() {
        let mut state: TableState<MemberKey> = TableState::new(1);
        state.pagination.page = 2;
        state.set_query("amy");
        assert_eq!(state.pagination.page, 1);
        let view = config().apply(&members(), &state);
        assert_eq!(names(&view.rows), ["Amy"]);
        assert_eq!(view.matched, 1);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let mut state: TableState<MemberKey> = TableState::new(1);
        state.pagination.page = 9;
        let view = config().apply(&members(), &state);
        assert_eq!(view.page, 2);
        assert_eq!(names(&view.rows), ["Amy"]);
    }

    #[test]
    fn iterating_pages_reproduces_arranged_list() {
        let config = config();
        let records: Vec<Member> = ["Eve", "Dan", "Cat", "Bob", "Amy", "Fay", "Gus"]
            .into_iter()
            .map(|name| Member {
                name,
                date: "2024-01-01",
            })
            .collect();
        let mut state = TableState::new(3);
        state.toggle_sort(MemberKey::Name);
        let arranged = config.arrange(&records, &state);

        let mut stitched = Vec::new();
        let pages = total_pages(arranged.len(), 3);
        for page in 1..=pages {
            state.pagination.page = page;
            stitched.extend(config.apply(&records, &state).rows);
        }
        assert_eq!(stitched, arranged);
    }

    #[test]
    fn server_page_uses_meta_for_page_count() {
        let config = config();
        let mut state = TableState::new(2);
        state.pagination.page = 3;
        let meta = PageMeta {
            total_pages: 7,
            total_items: 13,
        };
        let view = config.apply_server_page(&members(), &state, &meta);
        assert_eq!(view.page, 3);
        assert_eq!(view.total_pages, 7);
        assert_eq!(view.rows.len(), 2);
    }
}
