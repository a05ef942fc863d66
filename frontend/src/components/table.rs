use crate::{
    api::ApiError,
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    table::{page_items, pagination::PAGE_SIZE_OPTIONS, PageItem, SortDirection, TableViewModel},
};
use leptos::*;

#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="w-full md:w-64 rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg"
            placeholder=placeholder.unwrap_or_else(|| "Search...".to_string())
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    direction.map(SortDirection::indicator).unwrap_or("↕")
}

/// Header cells of every sortable column, followed by the plain `extra`
/// headers (actions and other unsortable columns).
#[component]
pub fn SortableHeaders<T, K>(
    vm: TableViewModel<T, K>,
    #[prop(optional)] extra: Vec<&'static str>,
) -> impl IntoView
where
    T: Clone + 'static,
    K: Copy + PartialEq + 'static,
{
    let headers = vm.headers();
    view! {
        <thead class="bg-surface-muted">
            <tr>
                {headers
                    .into_iter()
                    .map(|(key, label)| {
                        view! {
                            <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                <button
                                    type="button"
                                    class="inline-flex items-center gap-1 hover:text-fg"
                                    on:click=move |_| vm.toggle_sort(key)
                                >
                                    {label}
                                    <span aria-hidden="true">
                                        {move || sort_indicator(vm.sort_direction(key))}
                                    </span>
                                </button>
                            </th>
                        }
                    })
                    .collect_view()}
                {extra
                    .into_iter()
                    .map(|label| view! {
                        <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                            {label}
                        </th>
                    })
                    .collect_view()}
            </tr>
        </thead>
    }
}

/// Search box above a table, bound to the table's query.
#[component]
pub fn TableToolbar<T, K>(vm: TableViewModel<T, K>, children: Children) -> impl IntoView
where
    T: Clone + 'static,
    K: Copy + PartialEq + 'static,
{
    view! {
        <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
            <SearchInput
                value=vm.query()
                on_input=Callback::new(move |query: String| vm.set_query(query))
            />
            <div class="flex gap-2">{children()}</div>
        </div>
    }
}

#[component]
pub fn RowActions(
    #[prop(optional)] on_edit: Option<Callback<()>>,
    on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex gap-2">
            {on_edit.map(|on_edit| view! {
                <button
                    type="button"
                    class="text-sm text-action-primary-bg hover:underline"
                    on:click=move |_| on_edit.call(())
                >
                    "Edit"
                </button>
            })}
            <button
                type="button"
                class="text-sm text-action-danger-bg hover:underline"
                on:click=move |_| on_delete.call(())
            >
                "Delete"
            </button>
        </div>
    }
}

/// Previous/next buttons, the condensed page list and the page-size picker.
#[component]
pub fn PaginationControls<T, K>(vm: TableViewModel<T, K>) -> impl IntoView
where
    T: Clone + 'static,
    K: Copy + PartialEq + 'static,
{
    let page = Signal::derive(move || vm.view.with(|view| view.page));
    let total = Signal::derive(move || vm.view.with(|view| view.total_pages));
    let page_size = Signal::derive(move || vm.pagination().get().page_size);

    let button_class = "px-3 py-1 rounded-md border border-border text-sm disabled:opacity-50 disabled:cursor-not-allowed";

    view! {
        <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between pt-4">
            <div class="flex items-center gap-2 text-sm text-fg-muted">
                <span>"Rows per page"</span>
                <select
                    class="rounded-md border border-border bg-surface-elevated px-2 py-1"
                    prop:value=move || page_size.get().to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            vm.set_page_size(size);
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <nav class="flex items-center gap-1" aria-label="Pagination">
                <button
                    type="button"
                    class=button_class
                    disabled=move || page.get() <= 1
                    on:click=move |_| vm.previous()
                >
                    "Previous"
                </button>
                {move || {
                    let current = page.get();
                    page_items(current, total.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(number) => {
                                let class = if number == current {
                                    "px-3 py-1 rounded-md text-sm bg-action-primary-bg text-action-primary-text"
                                } else {
                                    "px-3 py-1 rounded-md text-sm text-fg hover:bg-action-ghost-bg-hover"
                                };
                                view! {
                                    <button
                                        type="button"
                                        class=class
                                        aria-current=(number == current).then_some("page")
                                        on:click=move |_| vm.go_to(number)
                                    >
                                        {number}
                                    </button>
                                }
                                .into_view()
                            }
                            PageItem::Ellipsis => {
                                view! { <span class="px-2 text-fg-muted">"…"</span> }.into_view()
                            }
                        })
                        .collect_view()
                }}
                <button
                    type="button"
                    class=button_class
                    disabled=move || page.get() >= total.get()
                    on:click=move |_| vm.next()
                >
                    "Next"
                </button>
            </nav>
        </div>
    }
}

/// Sortable, paginated table over a [`TableViewModel`]. `row` renders one
/// `<tr>` for a record of the current page.
#[component]
pub fn DataTable<T, K, R, IV>(
    vm: TableViewModel<T, K>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] empty_title: String,
    #[prop(optional)] extra_headers: Vec<&'static str>,
    row: R,
) -> impl IntoView
where
    T: Clone + 'static,
    K: Copy + PartialEq + 'static,
    R: Fn(T) -> IV + 'static,
    IV: IntoView,
{
    let is_empty = Signal::derive(move || vm.view.with(|view| view.rows.is_empty()));
    view! {
        <InlineErrorMessage error=error />
        {move || match (is_empty.get(), loading.get()) {
            (true, true) => view! { <LoadingSpinner /> }.into_view(),
            (true, false) => view! { <EmptyState title=empty_title.clone() /> }.into_view(),
            _ => ().into_view(),
        }}
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <SortableHeaders vm=vm extra=extra_headers />
                <tbody class="divide-y divide-border bg-surface-elevated">
                    {move || vm.view.get().rows.into_iter().map(&row).collect_view()}
                </tbody>
            </table>
        </div>
        <PaginationControls vm=vm />
    }
}

pub const CELL_CLASS: &str = "px-4 py-3 text-sm text-fg whitespace-nowrap";
