use crate::{
    components::error::InlineErrorMessage,
    state::{
        auth::{use_auth, use_logout},
        crud::MessageState,
        menu::{allowed_menu, MenuEntry},
    },
};
use leptos::*;

const NAV_LINK_CLASS: &str = "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let entries = create_memo(move |_| allowed_menu(auth.get().role_id()));
    let display_name = move || auth.get().display_name();
    let logout = use_logout();

    let on_logout = move |_| {
        set_menu_open.set(false);
        logout.call(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let nav_links = move |extra_class: &'static str| {
        entries
            .get()
            .into_iter()
            .map(|entry: MenuEntry| {
                view! {
                    <a
                        href=entry.path()
                        class=format!("{} {}", NAV_LINK_CLASS, extra_class)
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {entry.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-semibold text-fg">"MyCheva Admin"</h1>
                        <span class="hidden sm:inline text-sm text-fg-muted">{display_name}</span>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-1">
                            {move || nav_links("")}
                            <button on:click=on_logout class=NAV_LINK_CLASS>
                                "Logout"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 flex flex-col space-y-1">
                            {move || nav_links("block")}
                            <button on:click=on_logout class=format!("{} w-full text-left", NAV_LINK_CLASS)>
                                "Logout"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-semibold text-fg">{title}</h2>
            {description.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Outcome of the last save or delete on a page.
#[component]
pub fn Messages(messages: RwSignal<MessageState>) -> impl IntoView {
    let success = Signal::derive(move || messages.with(|state| state.success.clone()));
    let error = Signal::derive(move || messages.with(|state| state.error.clone()));
    view! {
        {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
        <InlineErrorMessage error=error />
    }
}
