use super::view_model::{use_login_view_model, LoginViewModel};
use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    forms::{FormField, TextInput},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = use_login_view_model();
    view! { <LoginPanel vm=vm /> }
}

#[component]
pub fn LoginPanel(vm: LoginViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.pending();
    let error = Signal::derive(move || vm.error.get());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Sign in to MyCheva"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Administration dashboard"
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <FormField label="Email" id="email">
                        <TextInput
                            id="email"
                            input_type="email"
                            value=form.email
                            on_input=Callback::new(move |v| form.email.set(v))
                            required=true
                        />
                    </FormField>
                    <FormField label="Password" id="password">
                        <TextInput
                            id="password"
                            input_type="password"
                            value=form.password
                            on_input=Callback::new(move |v| form.password.set(v))
                            required=true
                        />
                    </FormField>
                    <InlineErrorMessage error=error />
                    <Button class="w-full" loading=pending submit=true>
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
