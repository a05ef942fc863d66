use crate::{
    api::User,
    components::{
        common::{AssetImage, Button, ButtonVariant},
        layout::{Layout, PageHeader},
    },
    state::auth::{use_auth, use_logout},
    utils::forms::or_dash,
};
use leptos::*;

fn detail_rows(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Name", or_dash(Some(user.full_name.as_str()))),
        ("Email", or_dash(Some(user.email.as_str()))),
        ("Role", or_dash(user.role.as_ref().map(|r| r.name.as_str()))),
        (
            "Division",
            or_dash(user.division.as_ref().map(|d| d.name.as_str())),
        ),
    ]
}

/// Details of the signed-in user, or a placeholder while the profile loads.
#[component]
pub fn ProfileCard() -> impl IntoView {
    let (auth, _) = use_auth();
    let user = Signal::derive(move || auth.with(|state| state.user.clone()));

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            {move || match user.get() {
                None => view! { <p class="text-sm text-fg-muted">"Loading profile..."</p> }.into_view(),
                Some(user) => {
                    let alt = user.full_name.clone();
                    let image = user.image.clone();
                    view! {
                        <div class="flex flex-col gap-6 sm:flex-row sm:items-start">
                            <AssetImage path=image alt=alt />
                            <dl class="grid grid-cols-1 gap-3 sm:grid-cols-2 flex-1">
                                {detail_rows(&user)
                                    .into_iter()
                                    .map(|(label, value)| view! {
                                        <div>
                                            <dt class="text-xs uppercase tracking-wider text-fg-muted">{label}</dt>
                                            <dd class="text-sm text-fg">{value}</dd>
                                        </div>
                                    })
                                    .collect_view()}
                            </dl>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let logout = use_logout();
    view! {
        <Layout>
            <PageHeader title="Profile" description="Your account details." />
            <ProfileCard />
            <div>
                <Button variant=ButtonVariant::Danger on_click=logout>"Log out"</Button>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::member;

    #[test]
    fn missing_role_shows_a_dash() {
        let rows = detail_rows(&member(3, "Maya", None));
        assert_eq!(rows[2], ("Role", "-".to_string()));
        assert_eq!(rows[3], ("Division", "Web".to_string()));
    }
}
