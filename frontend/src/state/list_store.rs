use std::{future::Future, rc::Rc};

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::*;

use crate::{
    api::{ApiError, ListPage},
    table::PageMeta,
};

type Fetcher<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<ListPage<T>, ApiError>>>;

/// Records of one list page plus the error and loading state of the last
/// fetch. Every mount and every successful mutation goes through
/// [`ListStore::reload`].
pub struct ListStore<T: 'static> {
    pub items: RwSignal<Vec<T>>,
    pub meta: RwSignal<PageMeta>,
    pub error: RwSignal<Option<ApiError>>,
    pub loading: RwSignal<bool>,
    generation: StoredValue<u64>,
    fetcher: StoredValue<Fetcher<T>>,
}

impl<T: 'static> Clone for ListStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListStore<T> {}

impl<T: Clone + 'static> ListStore<T> {
    /// Store over an endpoint that returns the whole list.
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        Self::paged(move || {
            let request = fetch();
            async move {
                request.await.map(|items| ListPage {
                    items,
                    meta: PageMeta::default(),
                })
            }
        })
    }

    /// Store over a server-paginated endpoint; the fetcher reads the page it
    /// should request when it is called.
    pub fn paged<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<ListPage<T>, ApiError>> + 'static,
    {
        let fetcher: Fetcher<T> = Rc::new(move || fetch().boxed_local());
        Self {
            items: create_rw_signal(Vec::new()),
            meta: create_rw_signal(PageMeta::default()),
            error: create_rw_signal(None),
            loading: create_rw_signal(false),
            generation: store_value(0),
            fetcher: store_value(fetcher),
        }
    }

    pub fn items_signal(&self) -> Signal<Vec<T>> {
        self.items.into()
    }

    pub fn meta_signal(&self) -> Signal<PageMeta> {
        self.meta.into()
    }

    /// Fetches and applies the result. A failure keeps the previous records.
    /// Results that arrive after a newer refresh started, or after the owning
    /// view was disposed, are dropped.
    pub async fn refresh(&self) {
        let Some(ticket) = self.generation.try_update_value(|generation| {
            *generation += 1;
            *generation
        }) else {
            return;
        };
        let Some(fetch) = self.fetcher.try_get_value() else {
            return;
        };
        let _ = self.loading.try_set(true);

        let result = fetch().await;

        if self.generation.try_get_value() != Some(ticket) {
            return;
        }
        match result {
            Ok(page) => {
                let _ = self.items.try_set(page.items);
                let _ = self.meta.try_set(page.meta);
                let _ = self.error.try_set(None);
            }
            Err(err) => {
                log::error!("list fetch failed: {}", err);
                let _ = self.error.try_set(Some(err));
            }
        }
        let _ = self.loading.try_set(false);
    }

    pub fn reload(&self) {
        let store = *self;
        spawn_local(async move { store.refresh().await });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn scripted(
        answers: Vec<Result<Vec<&'static str>, ApiError>>,
    ) -> ListStore<&'static str> {
        let answers = Rc::new(RefCell::new(answers.into_iter()));
        ListStore::new(move || {
            let next = answers
                .borrow_mut()
                .next()
                .unwrap_or_else(|| Err(ApiError::unknown("exhausted")));
            async move { next }
        })
    }

    #[test]
    fn refresh_replaces_items() {
        with_runtime(|| {
            let store = scripted(vec![Ok(vec!["Mobile", "Web"]), Ok(vec!["Data"])]);
            block_on(store.refresh());
            assert_eq!(store.items.get(), vec!["Mobile", "Web"]);
            assert!(!store.loading.get());

            block_on(store.refresh());
            assert_eq!(store.items.get(), vec!["Data"]);
            assert!(store.error.get().is_none());
        });
    }

    #[test]
    fn failed_refresh_keeps_previous_items() {
        with_runtime(|| {
            let store = scripted(vec![
                Ok(vec!["Mobile"]),
                Err(ApiError::request_failed("offline")),
            ]);
            block_on(store.refresh());
            block_on(store.refresh());
            assert_eq!(store.items.get(), vec!["Mobile"]);
            assert_eq!(store.error.get().map(|e| e.error), Some("offline".into()));
            assert!(!store.loading.get());
        });
    }

    #[test]
    fn success_after_failure_clears_error() {
        with_runtime(|| {
            let store = scripted(vec![
                Err(ApiError::request_failed("offline")),
                Ok(vec!["Web"]),
            ]);
            block_on(store.refresh());
            assert!(store.items.get().is_empty());
            block_on(store.refresh());
            assert_eq!(store.items.get(), vec!["Web"]);
            assert!(store.error.get().is_none());
        });
    }

    #[test]
    fn paged_store_records_meta() {
        with_runtime(|| {
            let store = ListStore::paged(|| async {
                Ok(ListPage {
                    items: vec![1, 2],
                    meta: PageMeta {
                        total_pages: 3,
                        total_items: 6,
                    },
                })
            });
            block_on(store.refresh());
            assert_eq!(store.items.get(), vec![1, 2]);
            assert_eq!(store.meta.get().total_pages, 3);
        });
    }
}
