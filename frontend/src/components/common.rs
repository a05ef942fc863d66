use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text shadow-sm",
            ButtonVariant::Ghost => "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    /// Renders `type="submit"` instead of `type="button"`.
    #[prop(optional)]
    submit: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.call(());
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Thumbnail for an uploaded image path, or a dash when there is none.
#[component]
pub fn AssetImage(#[prop(into)] path: Option<String>, #[prop(into)] alt: String) -> impl IntoView {
    match path.filter(|p| !p.trim().is_empty()) {
        Some(path) => view! {
            <img
                class="h-12 w-12 rounded object-cover border border-border"
                src=crate::config::asset_url(&path)
                alt=alt
            />
        }
        .into_view(),
        None => view! { <span class="text-fg-muted">"-"</span> }.into_view(),
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn asset_image_resolves_against_asset_base() {
        let html = render_to_string(|| {
            let path = Some("uploads/map.png".to_string());
            view! { <AssetImage path=path alt="Roadmap" /> }
        });
        assert!(html.contains("/uploads/map.png"));
        assert!(html.contains("alt=\"Roadmap\""));

        let empty = render_to_string(|| {
            let path: Option<String> = None;
            view! { <AssetImage path=path alt="none" /> }
        });
        assert!(empty.contains("-"));
        assert!(!empty.contains("<img"));
    }
}
