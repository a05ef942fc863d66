use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::{RequireAuth, RequireMenu},
    pages::{
        announcements::AnnouncementsPage,
        app_versions::AppVersionsPage,
        assignments::AssignmentsPage,
        attendance::AttendancePage,
        dashboard::DashboardPage,
        discussion::{ForumThreadPage, ForumsPage},
        divisions::DivisionsPage,
        login::LoginPage,
        meetings::MeetingsPage,
        profile::ProfilePage,
        roadmaps::RoadmapsPage,
        roles::RolesPage,
        users::UsersPage,
    },
    state::{
        auth::{use_auth, AuthProvider},
        menu::{landing_path, MenuEntry},
        session::{provide_session, SessionContext},
    },
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/attendance",
    "/announcements",
    "/assignments",
    "/meetings",
    "/roadmaps",
    "/discussion",
    "/discussion/:id",
    "/users",
    "/divisions",
    "/roles",
    "/app-versions",
    "/profile",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/attendance",
    "/announcements",
    "/assignments",
    "/meetings",
    "/roadmaps",
    "/discussion",
    "/discussion/:id",
    "/users",
    "/divisions",
    "/roles",
    "/app-versions",
    "/profile",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let session = SessionContext::browser();
    provide_session(session.clone());
    provide_context(ApiClient::with_session(session));

    view! {
        <Title text="MyCheva Admin"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=Landing/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=|| view! {
                        <Protected entry=MenuEntry::Dashboard><DashboardPage/></Protected>
                    }/>
                    <Route path="/attendance" view=|| view! {
                        <Protected entry=MenuEntry::Attendance><AttendancePage/></Protected>
                    }/>
                    <Route path="/announcements" view=|| view! {
                        <Protected entry=MenuEntry::Announcements><AnnouncementsPage/></Protected>
                    }/>
                    <Route path="/assignments" view=|| view! {
                        <Protected entry=MenuEntry::Assignments><AssignmentsPage/></Protected>
                    }/>
                    <Route path="/meetings" view=|| view! {
                        <Protected entry=MenuEntry::Meetings><MeetingsPage/></Protected>
                    }/>
                    <Route path="/roadmaps" view=|| view! {
                        <Protected entry=MenuEntry::Roadmap><RoadmapsPage/></Protected>
                    }/>
                    <Route path="/discussion" view=|| view! {
                        <Protected entry=MenuEntry::Discussion><ForumsPage/></Protected>
                    }/>
                    <Route path="/discussion/:id" view=|| view! {
                        <Protected entry=MenuEntry::Discussion><ForumThreadPage/></Protected>
                    }/>
                    <Route path="/users" view=|| view! {
                        <Protected entry=MenuEntry::Users><UsersPage/></Protected>
                    }/>
                    <Route path="/divisions" view=|| view! {
                        <Protected entry=MenuEntry::Divisions><DivisionsPage/></Protected>
                    }/>
                    <Route path="/roles" view=|| view! {
                        <Protected entry=MenuEntry::Roles><RolesPage/></Protected>
                    }/>
                    <Route path="/app-versions" view=|| view! {
                        <Protected entry=MenuEntry::AppVersions><AppVersionsPage/></Protected>
                    }/>
                    <Route path="/profile" view=|| view! {
                        <Protected entry=MenuEntry::Profile><ProfilePage/></Protected>
                    }/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

/// Signed-in page whose menu entry must be visible to the current role.
#[component]
fn Protected(entry: MenuEntry, children: ChildrenFn) -> impl IntoView {
    let children = store_value(children);
    view! {
        <RequireAuth>
            <RequireMenu entry=entry>
                {children.with_value(|children| children())}
            </RequireMenu>
        </RequireAuth>
    }
}

/// `/` forwards to the role's landing page, or to the login form.
#[component]
fn Landing() -> impl IntoView {
    let (auth, _) = use_auth();
    let target = auth.with_untracked(|state| root_target(state.is_authenticated(), state.role_id()));
    view! { <Redirect path=target/> }
}

fn root_target(is_authenticated: bool, role_id: Option<i64>) -> &'static str {
    if is_authenticated {
        landing_path(role_id)
    } else {
        "/login"
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-2 bg-surface">
            <h2 class="text-2xl font-semibold text-fg">"Page not found"</h2>
            <a href="/" class="text-sm text-action-primary-bg hover:underline">"Back to the dashboard"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_menu_entry_has_a_protected_route() {
        for entry in MenuEntry::ALL {
            assert!(
                PROTECTED_ROUTE_PATHS.contains(&entry.path()),
                "menu entry without a route: {}",
                entry.path()
            );
        }
    }

    #[test]
    fn protected_and_public_routes_partition_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        let joined: HashSet<&str> = protected.union(&public).copied().collect();
        assert_eq!(joined, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn root_sends_visitors_to_login_and_members_home() {
        assert_eq!(root_target(false, Some(1)), "/login");
        assert_eq!(root_target(true, Some(1)), "/dashboard");
        assert_eq!(root_target(true, Some(8)), "/meetings");
    }
}
