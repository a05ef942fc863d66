use super::{
    repository::RoadmapsRepository,
    utils::{table_config, RoadmapFormState, RoadmapSortKey},
};
use crate::{
    api::{ApiClient, Division, Roadmap, RoadmapPayload},
    pages::divisions::use_division_options,
    state::{
        crud::{use_crud_controls, CrudControls},
        list_store::ListStore,
    },
    table::{pagination::DEFAULT_PAGE_SIZE, use_table_view_model, TableViewModel},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct RoadmapsViewModel {
    pub store: ListStore<Roadmap>,
    pub divisions: ListStore<Division>,
    pub table: TableViewModel<Roadmap, RoadmapSortKey>,
    pub crud: CrudControls<RoadmapPayload>,
    pub form: RwSignal<RoadmapFormState>,
}

impl RoadmapsViewModel {
    pub fn open_create(&self) {
        self.form.set(RoadmapFormState::default());
        self.crud.open_editor(None);
    }

    pub fn open_edit(&self, roadmap: &Roadmap) {
        self.form.set(RoadmapFormState::from_record(roadmap));
        self.crud.open_editor(Some(roadmap.id));
    }

    pub fn submit(&self) {
        self.crud
            .submit(self.form.with_untracked(RoadmapFormState::to_payload));
    }
}

pub fn use_roadmaps_view_model() -> RoadmapsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = RoadmapsRepository::new_with_client(Rc::new(api));

    let repo_for_list = repository.clone();
    let store = ListStore::new(move || {
        let repo = repo_for_list.clone();
        async move { repo.fetch_roadmaps().await }
    });
    let table = use_table_view_model(store.items_signal(), table_config(), DEFAULT_PAGE_SIZE);

    let repo_for_save = repository.clone();
    let repo_for_delete = repository;
    let crud = use_crud_controls(
        store,
        "Roadmap",
        move |id, payload| {
            let repo = repo_for_save.clone();
            async move { repo.save_roadmap(id, payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_roadmap(id).await }
        },
    );

    create_effect(move |_| store.reload());

    RoadmapsViewModel {
        store,
        divisions: use_division_options(),
        table,
        crud,
        form: create_rw_signal(RoadmapFormState::default()),
    }
}
