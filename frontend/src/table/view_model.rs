use leptos::*;

use super::{PageMeta, Pagination, SortDirection, TableConfig, TableState, TableView};

/// Reactive wrapper around a [`TableConfig`]: the page owns the state signal
/// and renders `view`.
pub struct TableViewModel<T: 'static, K: 'static> {
    pub state: RwSignal<TableState<K>>,
    pub view: Signal<TableView<T>>,
    config: StoredValue<TableConfig<T, K>>,
}

impl<T: 'static, K: 'static> Clone for TableViewModel<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, K: 'static> Copy for TableViewModel<T, K> {}

/// Client-driven table: `records` holds the whole list.
pub fn use_table_view_model<T, K>(
    records: Signal<Vec<T>>,
    config: TableConfig<T, K>,
    page_size: usize,
) -> TableViewModel<T, K>
where
    T: Clone + 'static,
    K: Copy + PartialEq + 'static,
{
    let state = create_rw_signal(TableState::new(page_size));
    let config = store_value(config);
    let view = Signal::derive(move || {
        records.with(|records| {
            state.with(|state| config.with_value(|config| config.apply(records, state)))
        })
    });
    TableViewModel {
        state,
        view,
        config,
    }
}

/// Server-driven table: `records` holds one page and `meta` the totals the
/// API reported for it.
pub fn use_server_table_view_model<T, K>(
    records: Signal<Vec<T>>,
    meta: Signal<PageMeta>,
    config: TableConfig<T, K>,
    page_size: usize,
) -> TableViewModel<T, K>
where
    T: Clone + 'static,
    K: Copy + PartialEq + 'static,
{
    let state = create_rw_signal(TableState::new(page_size));
    let config = store_value(config);
    let view = Signal::derive(move || {
        let meta = meta.get();
        records.with(|records| {
            state.with(|state| {
                config.with_value(|config| config.apply_server_page(records, state, &meta))
            })
        })
    });
    TableViewModel {
        state,
        view,
        config,
    }
}

impl<T, K> TableViewModel<T, K>
where
    T: Clone + 'static,
    K: Copy + PartialEq + 'static,
{
    pub fn pagination(&self) -> Signal<Pagination> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.pagination))
    }

    pub fn query(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.query.clone()))
    }

    pub fn headers(&self) -> Vec<(K, &'static str)> {
        self.config.with_value(|config| {
            config
                .columns
                .iter()
                .map(|column| (column.key, column.label))
                .collect()
        })
    }

    pub fn sort_direction(&self, key: K) -> Option<SortDirection> {
        self.state.with(|state| state.sort.direction_for(key))
    }

    pub fn set_query(&self, query: String) {
        self.state.update(|state| state.set_query(query));
    }

    pub fn toggle_sort(&self, key: K) {
        self.state.update(|state| state.toggle_sort(key));
    }

    pub fn go_to(&self, page: usize) {
        let total = self.view.with_untracked(|view| view.total_pages);
        self.state
            .update(|state| state.pagination.go_to(page, total));
    }

    pub fn previous(&self) {
        self.state.update(|state| state.pagination.previous());
    }

    pub fn next(&self) {
        let total = self.view.with_untracked(|view| view.total_pages);
        self.state.update(|state| state.pagination.next(total));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.state
            .update(|state| state.pagination.set_page_size(page_size));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::table::{SortColumn, SortValue};
    use crate::test_support::ssr::with_runtime;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        Name,
    }

    fn config() -> TableConfig<&'static str, Key> {
        TableConfig {
            search_fields: |name| vec![name.to_string()],
            columns: vec![SortColumn {
                key: Key::Name,
                label: "Name",
                accessor: |name| SortValue::text(name),
            }],
        }
    }

    #[test]
    fn view_follows_query_sort_and_page() {
        with_runtime(|| {
            let records = create_rw_signal(vec!["Dewi", "ari", "Citra", "Bayu", "adi"]);
            let vm = use_table_view_model(records.into(), config(), 2);

            assert_eq!(vm.view.get().rows, vec!["Dewi", "ari"]);
            assert_eq!(vm.view.get().total_pages, 3);

            vm.toggle_sort(Key::Name);
            assert_eq!(vm.view.get().rows, vec!["adi", "ari"]);
            assert_eq!(vm.sort_direction(Key::Name), Some(SortDirection::Ascending));

            vm.next();
            vm.next();
            vm.next();
            assert_eq!(vm.pagination().get().page, 3);
            assert_eq!(vm.view.get().rows, vec!["Dewi"]);

            vm.set_query("A".into());
            assert_eq!(vm.pagination().get().page, 1);
            assert_eq!(vm.view.get().rows, vec!["adi", "ari"]);
            assert_eq!(vm.view.get().matched, 4);
        });
    }

    #[test]
    fn replaced_records_are_picked_up() {
        with_runtime(|| {
            let records = create_rw_signal(vec!["Eka"]);
            let vm = use_table_view_model(records.into(), config(), 10);
            records.set(vec!["Fajar", "Gita"]);
            assert_eq!(vm.view.get().rows, vec!["Fajar", "Gita"]);
            assert_eq!(vm.headers(), vec![(Key::Name, "Name")]);
        });
    }

    #[test]
    fn server_table_reports_meta_pages() {
        with_runtime(|| {
            let records = create_rw_signal(vec!["Hana", "Indra"]);
            let meta = create_rw_signal(PageMeta {
                total_pages: 5,
                total_items: 10,
            });
            let vm = use_server_table_view_model(records.into(), meta.into(), config(), 2);
            vm.go_to(4);
            assert_eq!(vm.pagination().get().page, 4);
            assert_eq!(vm.view.get().total_pages, 5);
            assert_eq!(vm.view.get().rows, vec!["Hana", "Indra"]);
        });
    }
}
