use super::{
    repository::RolesRepository,
    utils::{table_config, RoleFormState, RoleSortKey},
};
use crate::{
    api::{ApiClient, Role, RolePayload},
    state::{
        crud::{use_crud_controls, CrudControls},
        list_store::ListStore,
    },
    table::{pagination::DEFAULT_PAGE_SIZE, use_table_view_model, TableViewModel},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct RolesViewModel {
    pub store: ListStore<Role>,
    pub table: TableViewModel<Role, RoleSortKey>,
    pub crud: CrudControls<RolePayload>,
    pub form: RwSignal<RoleFormState>,
}

impl RolesViewModel {
    pub fn open_create(&self) {
        self.form.set(RoleFormState::default());
        self.crud.open_editor(None);
    }

    pub fn open_edit(&self, role: &Role) {
        self.form.set(RoleFormState::from_record(role));
        self.crud.open_editor(Some(role.id));
    }

    pub fn submit(&self) {
        self.crud
            .submit(self.form.with_untracked(RoleFormState::to_payload));
    }
}

pub fn use_roles_view_model() -> RolesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = RolesRepository::new_with_client(Rc::new(api));

    let repo_for_list = repository.clone();
    let store = ListStore::new(move || {
        let repo = repo_for_list.clone();
        async move { repo.fetch_roles().await }
    });
    let table = use_table_view_model(store.items_signal(), table_config(), DEFAULT_PAGE_SIZE);

    let repo_for_save = repository.clone();
    let repo_for_delete = repository;
    let crud = use_crud_controls(
        store,
        "Role",
        move |id, payload| {
            let repo = repo_for_save.clone();
            async move { repo.save_role(id, payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_role(id).await }
        },
    );

    create_effect(move |_| store.reload());

    RolesViewModel {
        store,
        table,
        crud,
        form: create_rw_signal(RoleFormState::default()),
    }
}
