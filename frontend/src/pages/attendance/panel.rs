use super::{
    utils::{event_options, status_badge_class, status_label, STATUS_OPTIONS},
    view_model::{use_attendance_view_model, AttendanceViewModel},
};
use crate::{
    api::Attendance,
    components::{
        common::Button,
        confirm_dialog::DeleteDialog,
        forms::{FormField, FormModal, SelectInput, TextInput},
        layout::{Layout, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
    utils::{
        forms::or_dash,
        time::{format_optional_date, format_time},
    },
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    view! { <AttendancePanel vm=vm /> }
}

#[component]
pub fn AttendancePanel(vm: AttendanceViewModel) -> impl IntoView {
    let form = vm.form;
    let events = vm.events.items;
    let event_choices = Signal::derive(move || events.with(|meetings| event_options(meetings)));
    let status_choices = Signal::derive(|| {
        STATUS_OPTIONS
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect::<Vec<_>>()
    });

    let row = move |record: Attendance| {
        let edited = record.clone();
        let id = record.id;
        let badge = format!(
            "inline-flex px-2 py-0.5 rounded-full text-xs font-medium {}",
            status_badge_class(&record.status)
        );
        view! {
            <tr>
                <td class=CELL_CLASS>{or_dash(record.user.as_ref().map(|u| u.full_name.as_str()))}</td>
                <td class=CELL_CLASS>{or_dash(record.event.as_ref().map(|e| e.title.as_str()))}</td>
                <td class=CELL_CLASS><span class=badge>{status_label(&record.status)}</span></td>
                <td class=CELL_CLASS>{format_optional_date(record.date.as_deref())}</td>
                <td class=CELL_CLASS>{record.time.as_deref().map(format_time).unwrap_or_else(|| "-".into())}</td>
                <td class=CELL_CLASS>
                    <RowActions
                        on_edit=Callback::new(move |_| vm.open_edit(&edited))
                        on_delete=Callback::new(move |_| vm.crud.request_delete(id))
                    />
                </td>
            </tr>
        }
    };

    view! {
        <Layout>
            <PageHeader title="Attendance" description="Check-ins recorded for each meeting." />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"Record attendance"</Button>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.store.loading
                    error=vm.store.error
                    empty_title="No attendance recorded"
                    extra_headers=vec!["Actions"]
                    row=row
                />
            </div>
            <FormModal
                is_open=vm.crud.editor_open
                title=Signal::derive(move || vm.crud.editor_title("attendance"))
                pending=vm.crud.is_saving()
                error=Signal::derive(move || vm.crud.messages.with(|m| m.error.clone()))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.crud.close_editor())
            >
                <FormField label="Member ID" id="attendance-user">
                    <TextInput
                        id="attendance-user"
                        input_type="number"
                        value=Signal::derive(move || form.with(|f| f.user_id.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.user_id = v))
                        required=true
                    />
                </FormField>
                <FormField label="Meeting" id="attendance-event">
                    <SelectInput
                        id="attendance-event"
                        value=Signal::derive(move || form.with(|f| f.event_id.clone()))
                        options=event_choices
                        on_change=Callback::new(move |v| form.update(|f| f.event_id = v))
                        placeholder="Select a meeting"
                    />
                </FormField>
                <FormField label="Status" id="attendance-status">
                    <SelectInput
                        id="attendance-status"
                        value=Signal::derive(move || form.with(|f| f.status.clone()))
                        options=status_choices
                        on_change=Callback::new(move |v| form.update(|f| f.status = v))
                    />
                </FormField>
                <div class="grid grid-cols-2 gap-4">
                    <FormField label="Date" id="attendance-date">
                        <TextInput
                            id="attendance-date"
                            input_type="date"
                            value=Signal::derive(move || form.with(|f| f.date.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.date = v))
                        />
                    </FormField>
                    <FormField label="Time" id="attendance-time">
                        <TextInput
                            id="attendance-time"
                            input_type="time"
                            value=Signal::derive(move || form.with(|f| f.time.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.time = v))
                        />
                    </FormField>
                </div>
            </FormModal>
            <DeleteDialog
                noun="Attendance"
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
    use crate::api::{EventRef, UserRef};
    use crate::table::PageMeta;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn attendance_rows_show_status_and_server_pages() {
        let html = render_to_string(move || {
            provide_auth(Some(4));
            let vm = use_attendance_view_model();
            vm.store.items.set(vec![Attendance {
                id: 1,
                status: "late".into(),
                date: Some("2024-04-02".into()),
                time: Some("08:10:00".into()),
                user: Some(UserRef {
                    id: 12,
                    full_name: "Dewi".into(),
                }),
                event: Some(EventRef {
                    id: 4,
                    title: "Sprint review".into(),
                }),
                ..Attendance::default()
            }]);
            vm.store.meta.set(PageMeta {
                total_pages: 3,
                total_items: 25,
            });
            view! { <AttendancePanel vm=vm /> }
        });
        assert!(html.contains("Dewi"));
        assert!(html.contains("Sprint review"));
        assert!(html.contains("Late"));
        assert!(html.contains("08:10"));
        assert!(html.contains("aria-current=\"page\""));
        assert!(html.contains("Next"));
    }
}
