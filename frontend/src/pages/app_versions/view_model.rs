use super::{
    repository::AppVersionsRepository,
    utils::{table_config, AppVersionFormState, AppVersionSortKey},
};
use crate::{
    api::{ApiClient, AppVersion, AppVersionPayload},
    state::{
        crud::{use_crud_controls, CrudControls},
        list_store::ListStore,
    },
    table::{pagination::DEFAULT_PAGE_SIZE, use_table_view_model, TableViewModel},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AppVersionsViewModel {
    pub store: ListStore<AppVersion>,
    pub table: TableViewModel<AppVersion, AppVersionSortKey>,
    pub crud: CrudControls<AppVersionPayload>,
    pub form: RwSignal<AppVersionFormState>,
}

impl AppVersionsViewModel {
    pub fn open_create(&self) {
        self.form.set(AppVersionFormState::default());
        self.crud.open_editor(None);
    }

    pub fn open_edit(&self, version: &AppVersion) {
        self.form.set(AppVersionFormState::from_record(version));
        self.crud.open_editor(Some(version.id));
    }

    pub fn submit(&self) {
        self.crud
            .submit(self.form.with_untracked(AppVersionFormState::to_payload));
    }
}

pub fn use_app_versions_view_model() -> AppVersionsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AppVersionsRepository::new_with_client(Rc::new(api));

    let repo_for_list = repository.clone();
    let store = ListStore::new(move || {
        let repo = repo_for_list.clone();
        async move { repo.fetch_versions().await }
    });
    let table = use_table_view_model(store.items_signal(), table_config(), DEFAULT_PAGE_SIZE);

    let repo_for_save = repository.clone();
    let repo_for_delete = repository;
    let crud = use_crud_controls(
        store,
        "App version",
        move |id, payload| {
            let repo = repo_for_save.clone();
            async move { repo.save_version(id, payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_version(id).await }
        },
    );

    create_effect(move |_| store.reload());

    AppVersionsViewModel {
        store,
        table,
        crud,
        form: create_rw_signal(AppVersionFormState::default()),
    }
}
