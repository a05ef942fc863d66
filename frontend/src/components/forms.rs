use crate::{
    api::{ApiError, Division},
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
    },
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg shadow-sm focus:border-action-primary-bg focus:outline-none focus:ring-1 focus:ring-action-primary-bg";

#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(optional, into)] id: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            {children()}
        </div>
    }
}

#[component]
pub fn TextInput(
    #[prop(optional, into)] id: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            id=id
            type=input_type.unwrap_or_else(|| "text".to_string())
            class=INPUT_CLASS
            placeholder=placeholder
            required=required
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(optional, into)] id: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <textarea
            id=id
            class=INPUT_CLASS
            rows=rows.unwrap_or(4)
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        ></textarea>
    }
}

/// `<select>` over `(value, label)` pairs. The empty value stands for "none".
#[component]
pub fn SelectInput(
    #[prop(optional, into)] id: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <select
            id=id
            class=INPUT_CLASS
            prop:value=move || value.get()
            on:change=move |ev| on_change.call(event_target_value(&ev))
        >
            {placeholder.map(|text| view! { <option value="">{text}</option> })}
            {move || {
                let selected = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|(option, label)| {
                        let is_selected = option == selected;
                        view! { <option value=option selected=is_selected>{label}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}

pub fn division_options(divisions: &[Division]) -> Vec<(String, String)> {
    divisions
        .iter()
        .map(|division| (division.id.to_string(), division.name.clone()))
        .collect()
}

#[component]
pub fn DivisionSelect(
    #[prop(optional, into)] id: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] divisions: Signal<Vec<Division>>,
    on_change: Callback<String>,
) -> impl IntoView {
    let options = Signal::derive(move || divisions.with(|divisions| division_options(divisions)));
    view! {
        <SelectInput
            id=id
            value=value
            options=options
            on_change=on_change
            placeholder="Select a division"
        />
    }
}

/// Create/edit dialog around a page's form fields.
#[component]
pub fn FormModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        on_submit.call(());
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center">
                <div class="absolute inset-0 bg-overlay-backdrop" on:click=move |_| on_cancel.call(())></div>
                <div
                    class="relative z-10 w-full max-w-lg rounded-lg bg-surface-elevated p-6 shadow-xl"
                    role="dialog"
                    aria-modal="true"
                >
                    <h3 class="text-lg font-semibold text-fg mb-4">{move || title.get()}</h3>
                    <form class="space-y-4" on:submit=handle_submit>
                        {children()}
                        <InlineErrorMessage error=error />
                        <div class="flex justify-end gap-2 pt-2">
                            <Button
                                variant=ButtonVariant::Secondary
                                on_click=Callback::new(move |_| on_cancel.call(()))
                            >
                                "Cancel"
                            </Button>
                            <Button loading=pending submit=true>
                                "Save"
                            </Button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_options_use_ids_as_values() {
        let divisions = vec![
            Division {
                id: 1,
                name: "Mobile".into(),
                description: None,
            },
            Division {
                id: 4,
                name: "Web".into(),
                description: Some("Frontend".into()),
            },
        ];
        assert_eq!(
            division_options(&divisions),
            vec![
                ("1".to_string(), "Mobile".to_string()),
                ("4".to_string(), "Web".to_string())
            ]
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_fields_and_actions_when_open() {
        let html = render_to_string(move || {
            let value = create_rw_signal("Kickoff".to_string());
            view! {
                <FormModal
                    is_open=Signal::derive(|| true)
                    title=Signal::derive(|| "Edit meeting".to_string())
                    pending=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                >
                    <FormField label="Title" id="meeting-title">
                        <TextInput
                            id="meeting-title"
                            value=value
                            on_input=Callback::new(move |v| value.set(v))
                        />
                    </FormField>
                </FormModal>
            }
        });
        assert!(html.contains("Edit meeting"));
        assert!(html.contains("meeting-title"));
        assert!(html.contains("Save"));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <FormModal
                    is_open=Signal::derive(|| false)
                    title=Signal::derive(|| "Edit meeting".to_string())
                    pending=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                >
                    <p>"fields"</p>
                </FormModal>
            }
        });
        assert!(!html.contains("Edit meeting"));
    }

    #[test]
    fn division_select_marks_current_value() {
        let html = render_to_string(move || {
            let divisions = Signal::derive(|| {
                vec![
                    Division {
                        id: 1,
                        name: "Mobile".into(),
                        description: None,
                    },
                    Division {
                        id: 2,
                        name: "Web".into(),
                        description: None,
                    },
                ]
            });
            view! {
                <DivisionSelect
                    value=Signal::derive(|| "2".to_string())
                    divisions=divisions
                    on_change=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Select a division"));
        assert!(html.contains("Mobile"));
        assert!(html.contains("Web"));
        assert!(html.contains("selected"));
    }
}
