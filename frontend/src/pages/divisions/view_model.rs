use super::{
    repository::DivisionsRepository,
    utils::{table_config, DivisionFormState, DivisionSortKey},
};
use crate::{
    api::{ApiClient, Division, DivisionPayload},
    state::{
        crud::{use_crud_controls, CrudControls},
        list_store::ListStore,
    },
    table::{pagination::DEFAULT_PAGE_SIZE, use_table_view_model, TableViewModel},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DivisionsViewModel {
    pub store: ListStore<Division>,
    pub table: TableViewModel<Division, DivisionSortKey>,
    pub crud: CrudControls<DivisionPayload>,
    pub form: RwSignal<DivisionFormState>,
}

impl DivisionsViewModel {
    pub fn open_create(&self) {
        self.form.set(DivisionFormState::default());
        self.crud.open_editor(None);
    }

    pub fn open_edit(&self, division: &Division) {
        self.form.set(DivisionFormState::from_record(division));
        self.crud.open_editor(Some(division.id));
    }

    pub fn submit(&self) {
        self.crud
            .submit(self.form.with_untracked(DivisionFormState::to_payload));
    }
}

fn repository() -> DivisionsRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    DivisionsRepository::new_with_client(Rc::new(api))
}

fn division_store(repository: DivisionsRepository) -> ListStore<Division> {
    ListStore::new(move || {
        let repo = repository.clone();
        async move { repo.fetch_divisions().await }
    })
}

/// Divisions for the select inputs of other pages, loaded on mount.
pub fn use_division_options() -> ListStore<Division> {
    let store = division_store(repository());
    create_effect(move |_| store.reload());
    store
}

pub fn use_divisions_view_model() -> DivisionsViewModel {
    let repository = repository();
    let store = division_store(repository.clone());
    let table = use_table_view_model(store.items_signal(), table_config(), DEFAULT_PAGE_SIZE);

    let repo_for_save = repository.clone();
    let repo_for_delete = repository;
    let crud = use_crud_controls(
        store,
        "Division",
        move |id, payload| {
            let repo = repo_for_save.clone();
            async move { repo.save_division(id, payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_division(id).await }
        },
    );

    create_effect(move |_| store.reload());

    DivisionsViewModel {
        store,
        table,
        crud,
        form: create_rw_signal(DivisionFormState::default()),
    }
}
