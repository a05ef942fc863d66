use super::{
    repository::AttendanceRepository,
    utils::{table_config, AttendanceFormState, AttendanceSortKey},
};
use crate::{
    api::{ApiClient, Attendance, AttendancePayload, Meeting},
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
pub struct AttendanceViewModel {
    pub store: ListStore<Attendance>,
    pub events: ListStore<Meeting>,
    pub table: TableViewModel<Attendance, AttendanceSortKey>,
    pub crud: CrudControls<AttendancePayload>,
    pub form: RwSignal<AttendanceFormState>,
}

impl AttendanceViewModel {
    pub fn open_create(&self) {
        self.form.set(AttendanceFormState::default());
        self.crud.open_editor(None);
    }

    pub fn open_edit(&self, record: &Attendance) {
        self.form.set(AttendanceFormState::from_record(record));
        self.crud.open_editor(Some(record.id));
    }

    pub fn submit(&self) {
        self.crud
            .submit(self.form.with_untracked(AttendanceFormState::to_payload));
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceRepository::new_with_client(Rc::new(api));

    // Page the next fetch asks for; written by the pagination effect below.
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

    let repo_for_events = repository.clone();
    let events = ListStore::new(move || {
        let repo = repo_for_events.clone();
        async move { repo.fetch_events().await }
    });

    let repo_for_save = repository.clone();
    let repo_for_delete = repository;
    let crud = use_crud_controls(
        store,
        "Attendance",
        move |id, payload| {
            let repo = repo_for_save.clone();
            async move { repo.save_attendance(id, payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_attendance(id).await }
        },
    );

    let pagination = create_memo(move |_| table.pagination().get());
    create_effect(move |_| {
        requested.set_value(pagination.get());
        store.reload();
    });
    create_effect(move |_| events.reload());

    AttendanceViewModel {
        store,
        events,
        table,
        crud,
        form: create_rw_signal(AttendanceFormState::default()),
    }
}
