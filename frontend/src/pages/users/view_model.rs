use super::{
    repository::UsersRepository,
    utils::{table_config, UserFormState, UserSortKey},
};
use crate::{
    api::{ApiClient, Division, Role, User, UserPayload},
    pages::divisions::use_division_options,
    state::{
        crud::{use_crud_controls, CrudControls},
        list_store::ListStore,
    },
    table::{
        pagination::DEFAULT_PAGE_SIZE, use_server_table_view_model, Pagination, TableViewModel,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub store: ListStore<User>,
    pub roles: ListStore<Role>,
    pub divisions: ListStore<Division>,
    pub table: TableViewModel<User, UserSortKey>,
    pub crud: CrudControls<UserPayload>,
    pub form: RwSignal<UserFormState>,
}

impl UsersViewModel {
    pub fn open_create(&self) {
        self.form.set(UserFormState::default());
        self.crud.open_editor(None);
    }

    pub fn open_edit(&self, user: &User) {
        self.form.set(UserFormState::from_record(user));
        self.crud.open_editor(Some(user.id));
    }

    pub fn is_creating(&self) -> bool {
        self.crud.editing.get().is_none()
    }

    pub fn submit(&self) {
        let creating = self.crud.editing.get_untracked().is_none();
        self.crud
            .submit(self.form.with_untracked(|form| form.to_payload(creating)));
    }
}

pub fn use_users_view_model() -> UsersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = UsersRepository::new_with_client(Rc::new(api));

    let requested = store_value(Pagination::new(DEFAULT_PAGE_SIZE));

    let repo_for_list = repository.clone();
    let store = ListStore::paged(move || {
        let repo = repo_for_list.clone();
        let page = requested.get_value();
        async move { repo.fetch_page(page.page, page.page_size).await }
    });
    let table = use_server_table_view_model(
        store.items_signal(),
        store.meta_signal(),
        table_config(),
        DEFAULT_PAGE_SIZE,
    );

    let repo_for_roles = repository.clone();
    let roles = ListStore::new(move || {
        let repo = repo_for_roles.clone();
        async move { repo.fetch_roles().await }
    });

    let repo_for_save = repository.clone();
    let repo_for_delete = repository;
    let crud = use_crud_controls(
        store,
        "User",
        move |id, payload| {
            let repo = repo_for_save.clone();
            async move { repo.save_user(id, payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_user(id).await }
        },
    );

    let pagination = create_memo(move |_| table.pagination().get());
    create_effect(move |_| {
        requested.set_value(pagination.get());
        store.reload();
    });
    create_effect(move |_| roles.reload());

    UsersViewModel {
        store,
        roles,
        divisions: use_division_options(),
        table,
        crud,
        form: create_rw_signal(UserFormState::default()),
    }
}
