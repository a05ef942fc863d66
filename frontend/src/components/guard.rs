use crate::{
    components::layout::LoadingSpinner,
    state::{
        auth::use_auth,
        menu::{can_access, landing_path, MenuEntry},
    },
    utils::storage::redirect_to,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated());
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated() {
            return;
        }
        redirect_to("/login");
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Renders `children` only for roles whose menu contains `entry`; other
/// signed-in users are sent to their landing page.
#[component]
pub fn RequireMenu(entry: MenuEntry, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let role_id = create_memo(move |_| auth.get().role_id());
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated());
    create_effect(move |_| {
        if !is_authenticated.get() {
            return;
        }
        let role = role_id.get();
        if !can_access(role, entry) {
            log::warn!("role {:?} may not open {}", role, entry.path());
            redirect_to(landing_path(role));
        }
    });
    view! {
        <Show
            when=move || should_render_menu(is_authenticated.get(), role_id.get(), entry)
            fallback=|| view! {
                <p class="text-sm text-fg-muted p-6">"You do not have access to this page."</p>
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_menu(is_authenticated: bool, role_id: Option<i64>, entry: MenuEntry) -> bool {
    is_authenticated && can_access(role_id, entry)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, provide_signed_out};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth(Some(1));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_signed_out();
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_loading() {
        let html = render_to_string(move || {
            let (_, set_auth) = provide_auth(Some(1));
            set_auth.update(|state| state.loading = true);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_menu_hides_pages_outside_the_role() {
        let html = render_to_string(move || {
            provide_auth(Some(8));
            view! {
                <RequireMenu entry=MenuEntry::Users>
                    {|| view! { <div>"user-admin"</div> }}
                </RequireMenu>
            }
        });
        assert!(!html.contains("user-admin"));
        assert!(html.contains("You do not have access"));
    }

    #[test]
    fn require_menu_renders_allowed_pages() {
        let html = render_to_string(move || {
            provide_auth(Some(8));
            view! {
                <RequireMenu entry=MenuEntry::Roadmap>
                    {|| view! { <div>"roadmap-page"</div> }}
                </RequireMenu>
            }
        });
        assert!(html.contains("roadmap-page"));
    }
}
