#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{DivisionRef, RoleRef, User};
    use crate::state::auth::AuthState;
    use crate::state::session::Session;
    use leptos::*;

    pub fn member(id: i64, full_name: &str, role_id: Option<i64>) -> User {
        User {
            id,
            full_name: full_name.into(),
            email: format!("{}@example.com", full_name.to_lowercase().replace(' ', ".")),
            role_id,
            division_id: Some(2),
            role: role_id.map(|id| RoleRef {
                id,
                name: format!("Role {}", id),
            }),
            division: Some(DivisionRef {
                id: 2,
                name: "Web".into(),
            }),
            image: None,
        }
    }

    /// Signed-in auth context for a user of the given role.
    pub fn provide_auth(role_id: Option<i64>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            session: Some(Session {
                token: "test-token".into(),
                user_id: 7,
                role_id,
            }),
            user: Some(member(7, "Test Admin", role_id)),
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_signed_out() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState::default());
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
