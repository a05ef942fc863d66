use super::{
    utils::parse_forum_id,
    view_model::{use_forum_thread_view_model, ForumThreadViewModel},
};
use crate::{
    api::Reply,
    components::{
        common::Button,
        confirm_dialog::DeleteDialog,
        forms::TextArea,
        layout::{ErrorMessage, Layout, LoadingSpinner, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
    utils::{forms::or_dash, time::format_datetime},
};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn ForumThreadPage() -> impl IntoView {
    let params = use_params_map();
    let forum_id = params.with_untracked(|params| {
        params.get("id").and_then(|raw| parse_forum_id(raw))
    });
    match forum_id {
        Some(id) => {
            let vm = use_forum_thread_view_model(id);
            view! { <ForumThreadPanel vm=vm /> }.into_view()
        }
        None => view! {
            <Layout>
                <ErrorMessage message="This forum does not exist." />
                <a href="/discussion" class="text-sm text-action-primary-bg hover:underline">
                    "Back to discussion"
                </a>
            </Layout>
        }
        .into_view(),
    }
}

#[component]
fn ForumHeading(vm: ForumThreadViewModel) -> impl IntoView {
    move || match vm.forum.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Ok(forum)) => view! {
            <PageHeader title=forum.title description=forum.description.unwrap_or_default() />
        }
        .into_view(),
        Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
    }
}

#[component]
pub fn ForumThreadPanel(vm: ForumThreadViewModel) -> impl IntoView {
    let row = move |reply: Reply| {
        let id = reply.id;
        let posted = reply
            .created_at
            .as_deref()
            .map(format_datetime)
            .unwrap_or_else(|| "-".into());
        view! {
            <tr>
                <td class=CELL_CLASS>{or_dash(reply.user.as_ref().map(|u| u.full_name.as_str()))}</td>
                <td class="px-4 py-3 text-sm text-fg whitespace-pre-line">{reply.content}</td>
                <td class=CELL_CLASS>{posted}</td>
                <td class=CELL_CLASS>
                    <RowActions on_delete=Callback::new(move |_| vm.crud.request_delete(id)) />
                </td>
            </tr>
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.post_reply();
    };

    view! {
        <Layout>
            <a href="/discussion" class="text-sm text-action-primary-bg hover:underline">
                "← All forums"
            </a>
            <ForumHeading vm=vm />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <span class="text-sm text-fg-muted">
                        {move || format!("{} replies", vm.replies.items.with(Vec::len))}
                    </span>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.replies.loading
                    error=vm.replies.error
                    empty_title="No replies yet"
                    extra_headers=vec!["Actions"]
                    row=row
                />
            </div>
            <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-3" on:submit=on_submit>
                <label for="reply-content" class="block text-sm font-medium text-fg">"Your reply"</label>
                <TextArea
                    id="reply-content"
                    rows=3
                    value=vm.draft
                    on_input=Callback::new(move |v| vm.draft.set(v))
                />
                <div class="flex justify-end">
                    <Button submit=true loading=vm.crud.is_saving()>"Post reply"</Button>
                </div>
            </form>
            <DeleteDialog
                noun="Reply"
                pending_delete=vm.crud.pending_delete
                pending=vm.crud.delete.pending()
                on_confirm=Callback::new(move |_| vm.crud.confirm_delete())
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::UserRef;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn thread_lists_replies_and_reply_form() {
        let html = render_to_string(move || {
            provide_auth(Some(8));
            let vm = use_forum_thread_view_model(4);
            vm.replies.items.set(vec![
                Reply {
                    id: 1,
                    content: "Use the staging branch".into(),
                    user: Some(UserRef {
                        id: 3,
                        full_name: "Lestari".into(),
                    }),
                    ..Reply::default()
                },
                Reply {
                    id: 2,
                    content: "Thanks!".into(),
                    ..Reply::default()
                },
            ]);
            view! { <ForumThreadPanel vm=vm /> }
        });
        assert!(html.contains("Use the staging branch"));
        assert!(html.contains("Lestari"));
        assert!(html.contains("2 replies"));
        assert!(html.contains("Post reply"));
        assert!(html.contains("All forums"));
    }
}
