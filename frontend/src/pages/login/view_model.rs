use super::utils::LoginFormState;
use crate::{
    api::{ApiError, LoginRequest},
    state::{
        auth::{use_auth, use_login_action},
        menu::landing_path,
    },
    utils::storage::redirect_to,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.login_action.pending().into()
    }

    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = use_login_action();
    let (auth, _) = use_auth();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.password.set(String::new());
                    redirect_to(landing_path(auth.get_untracked().role_id()));
                }
                Err(err) => {
                    log::error!("sign-in failed: {}", err);
                    error.set(Some(err));
                }
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.email.get().is_empty());
            assert!(!vm.pending().get());
        });
    }

    #[test]
    fn submit_reports_missing_fields_without_dispatching() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.form.email.set("rani@example.com".into());
            vm.submit();
            assert_eq!(vm.error.get().unwrap().error, "Password is required");
            assert!(vm.login_action.input().get().is_none());
        });
    }
}
