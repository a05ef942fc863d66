use super::{
    repository::AnnouncementsRepository,
    utils::{table_config, AnnouncementFormState, AnnouncementSortKey},
};
use crate::{
    api::{Announcement, AnnouncementPayload, ApiClient, Division},
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
pub struct AnnouncementsViewModel {
    pub store: ListStore<Announcement>,
    pub divisions: ListStore<Division>,
    pub table: TableViewModel<Announcement, AnnouncementSortKey>,
    pub crud: CrudControls<AnnouncementPayload>,
    pub form: RwSignal<AnnouncementFormState>,
}

impl AnnouncementsViewModel {
    pub fn open_create(&self) {
        self.form.set(AnnouncementFormState::default());
        self.crud.open_editor(None);
    }

    pub fn open_edit(&self, announcement: &Announcement) {
        self.form.set(AnnouncementFormState::from_record(announcement));
        self.crud.open_editor(Some(announcement.id));
    }

    pub fn submit(&self) {
        self.crud
            .submit(self.form.with_untracked(AnnouncementFormState::to_payload));
    }
}

pub fn use_announcements_view_model() -> AnnouncementsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AnnouncementsRepository::new_with_client(Rc::new(api));

    let repo_for_list = repository.clone();
    let store = ListStore::new(move || {
        let repo = repo_for_list.clone();
        async move { repo.fetch_announcements().await }
    });
    let table = use_table_view_model(store.items_signal(), table_config(), DEFAULT_PAGE_SIZE);

    let repo_for_save = repository.clone();
    let repo_for_delete = repository;
    let crud = use_crud_controls(
        store,
        "Announcement",
        move |id, payload| {
            let repo = repo_for_save.clone();
            async move { repo.save_announcement(id, payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_announcement(id).await }
        },
    );

    create_effect(move |_| store.reload());

    AnnouncementsViewModel {
        store,
        divisions: use_division_options(),
        table,
        crud,
        form: create_rw_signal(AnnouncementFormState::default()),
    }
}
