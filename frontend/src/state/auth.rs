use crate::{
    api::{ApiClient, ApiError, LoginRequest, User},
    pages::login::repository::LoginRepository,
    state::session::{use_session, Session},
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn from_session(session: Option<Session>) -> Self {
        Self {
            session,
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role_id(&self) -> Option<i64> {
        self.session
            .as_ref()
            .and_then(|session| session.role_id)
            .or_else(|| self.user.as_ref().and_then(|user| user.role_id))
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|user| user.full_name.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Account".to_string())
    }
}

fn create_auth_context() -> AuthContext {
    let session = use_session();
    let (auth_state, set_auth_state) = create_signal(AuthState::from_session(session.read()));

    if auth_state.get_untracked().is_authenticated() {
        let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        spawn_local(async move {
            match api_client.current_user().await {
                Ok(user) => set_auth_state.update(|state| state.user = Some(user)),
                Err(err) => {
                    log::warn!("could not load the signed-in profile: {}", err);
                    let session = api_client.session().read();
                    set_auth_state.update(|state| state.session = session);
                }
            }
        });
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            let session = repo.session();
            set_auth_state.update(|state| {
                state.session = session;
                state.user = Some(response.user);
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.set(AuthState::default());
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));
    Callback::new(move |_| {
        logout(&repo, set_auth);
        crate::utils::storage::redirect_to("/login");
    })
}
