use super::{
    repository::MeetingsRepository,
    utils::{table_config, MeetingFormState, MeetingSortKey},
};
use crate::{
    api::{ApiClient, Division, Meeting, MeetingPayload},
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
pub struct MeetingsViewModel {
    pub store: ListStore<Meeting>,
    pub divisions: ListStore<Division>,
    pub table: TableViewModel<Meeting, MeetingSortKey>,
    pub crud: CrudControls<MeetingPayload>,
    pub form: RwSignal<MeetingFormState>,
}

impl MeetingsViewModel {
    pub fn open_create(&self) {
        self.form.set(MeetingFormState::default());
        self.crud.open_editor(None);
    }

    pub fn open_edit(&self, meeting: &Meeting) {
        self.form.set(MeetingFormState::from_record(meeting));
        self.crud.open_editor(Some(meeting.id));
    }

    pub fn submit(&self) {
        self.crud
            .submit(self.form.with_untracked(MeetingFormState::to_payload));
    }
}

pub fn use_meetings_view_model() -> MeetingsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = MeetingsRepository::new_with_client(Rc::new(api));

    let repo_for_list = repository.clone();
    let store = ListStore::new(move || {
        let repo = repo_for_list.clone();
        async move { repo.fetch_meetings().await }
    });
    let table = use_table_view_model(store.items_signal(), table_config(), DEFAULT_PAGE_SIZE);

    let repo_for_save = repository.clone();
    let repo_for_delete = repository;
    let crud = use_crud_controls(
        store,
        "Meeting",
        move |id, payload| {
            let repo = repo_for_save.clone();
            async move { repo.save_meeting(id, payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_meeting(id).await }
        },
    );

    create_effect(move |_| store.reload());

    MeetingsViewModel {
        store,
        divisions: use_division_options(),
        table,
        crud,
        form: create_rw_signal(MeetingFormState::default()),
    }
}
