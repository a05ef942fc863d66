use crate::api::{ApiError, LoginRequest};
use leptos::*;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        Ok(LoginRequest {
            email: email.trim().to_string(),
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_credentials_requires_both_fields() {
        assert_eq!(
            validate_credentials("", "secret").unwrap_err().error,
            "Email is required"
        );
        assert_eq!(
            validate_credentials("  ", "secret").unwrap_err().error,
            "Email is required"
        );
        assert_eq!(
            validate_credentials("rani@example.com", "").unwrap_err().error,
            "Password is required"
        );
        assert!(validate_credentials("rani@example.com", "secret").is_ok());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn request_trims_the_email_but_not_the_password() {
        with_runtime(|| {
            let form = LoginFormState::default();
            form.email.set(" rani@example.com ".into());
            form.password.set(" secret ".into());
            let request = form.to_request().unwrap();
            assert_eq!(request.email, "rani@example.com");
            assert_eq!(request.password, " secret ");
        });
    }
}
