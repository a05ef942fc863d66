use super::{
    repository::DiscussionRepository,
    utils::{
        forum_table_config, reply_payload, reply_table_config, ForumFormState, ForumSortKey,
        ReplySortKey,
    },
};
use crate::{
    api::{ApiClient, ApiError, Division, Forum, ForumPayload, Reply, ReplyPayload},
    pages::divisions::use_division_options,
    state::{
        auth::use_auth,
        crud::{use_crud_controls, CrudControls},
        list_store::ListStore,
    },
    table::{pagination::DEFAULT_PAGE_SIZE, use_table_view_model, TableViewModel},
};
use leptos::*;
use std::rc::Rc;

fn repository() -> DiscussionRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    DiscussionRepository::new_with_client(Rc::new(api))
}

#[derive(Clone, Copy)]
pub struct ForumsViewModel {
    pub store: ListStore<Forum>,
    pub divisions: ListStore<Division>,
    pub table: TableViewModel<Forum, ForumSortKey>,
    pub crud: CrudControls<ForumPayload>,
    pub form: RwSignal<ForumFormState>,
}

impl ForumsViewModel {
    pub fn open_create(&self) {
        self.form.set(ForumFormState::default());
        self.crud.open_editor(None);
    }

    pub fn open_edit(&self, forum: &Forum) {
        self.form.set(ForumFormState::from_record(forum));
        self.crud.open_editor(Some(forum.id));
    }

    pub fn submit(&self) {
        self.crud
            .submit(self.form.with_untracked(ForumFormState::to_payload));
    }
}

pub fn use_forums_view_model() -> ForumsViewModel {
    let repository = repository();

    let repo_for_list = repository.clone();
    let store = ListStore::new(move || {
        let repo = repo_for_list.clone();
        async move { repo.fetch_forums().await }
    });
    let table = use_table_view_model(
        store.items_signal(),
        forum_table_config(),
        DEFAULT_PAGE_SIZE,
    );

    let repo_for_save = repository.clone();
    let repo_for_delete = repository;
    let crud = use_crud_controls(
        store,
        "Forum",
        move |id, payload| {
            let repo = repo_for_save.clone();
            async move { repo.save_forum(id, payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_forum(id).await }
        },
    );

    create_effect(move |_| store.reload());

    ForumsViewModel {
        store,
        divisions: use_division_options(),
        table,
        crud,
        form: create_rw_signal(ForumFormState::default()),
    }
}

/// One forum with its replies. Replies are posted inline, so the editor of
/// the crud controls stays closed and every save creates a reply.
#[derive(Clone, Copy)]
pub struct ForumThreadViewModel {
    pub forum_id: i64,
    pub forum: Resource<i64, Result<Forum, ApiError>>,
    pub replies: ListStore<Reply>,
    pub table: TableViewModel<Reply, ReplySortKey>,
    pub crud: CrudControls<ReplyPayload>,
    pub draft: RwSignal<String>,
    user_id: Signal<Option<i64>>,
}

impl ForumThreadViewModel {
    pub fn post_reply(&self) {
        let user_id = self.user_id.get_untracked();
        self.crud.submit(
            self.draft
                .with_untracked(|draft| reply_payload(self.forum_id, user_id, draft)),
        );
    }
}

pub fn use_forum_thread_view_model(forum_id: i64) -> ForumThreadViewModel {
    let repository = repository();
    let (auth, _) = use_auth();
    let user_id = Signal::derive(move || {
        auth.with(|state| state.session.as_ref().map(|session| session.user_id))
    });

    let repo_for_forum = repository.clone();
    let forum = create_resource(
        move || forum_id,
        move |id| {
            let repo = repo_for_forum.clone();
            async move { repo.fetch_forum(id).await }
        },
    );

    let repo_for_list = repository.clone();
    let replies = ListStore::new(move || {
        let repo = repo_for_list.clone();
        async move { repo.fetch_replies(forum_id).await }
    });
    let table = use_table_view_model(
        replies.items_signal(),
        reply_table_config(),
        DEFAULT_PAGE_SIZE,
    );

    let repo_for_post = repository.clone();
    let repo_for_delete = repository;
    let crud = use_crud_controls(
        replies,
        "Reply",
        move |_id, payload| {
            let repo = repo_for_post.clone();
            async move { repo.post_reply(payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_reply(id).await }
        },
    );

    let draft = create_rw_signal(String::new());
    create_effect(move |_| {
        if let Some(Ok(_)) = crud.save.value().get() {
            draft.set(String::new());
        }
    });
    create_effect(move |_| replies.reload());

    ForumThreadViewModel {
        forum_id,
        forum,
        replies,
        table,
        crud,
        draft,
        user_id,
    }
}
