use super::view_model::{use_meetings_view_model, MeetingsViewModel};
use crate::{
    api::Meeting,
    components::{
        common::Button,
        confirm_dialog::DeleteDialog,
        forms::{DivisionSelect, FormField, FormModal, TextArea, TextInput},
        layout::{Layout, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
    utils::{
        forms::or_dash,
        time::{format_optional_date, format_time},
    },
};
use leptos::*;

fn time_range(meeting: &Meeting) -> String {
    match (meeting.start_time.as_deref(), meeting.end_time.as_deref()) {
        (Some(start), Some(end)) => format!("{} - {}", format_time(start), format_time(end)),
        (Some(start), None) => format_time(start),
        _ => "-".to_string(),
    }
}

#[component]
pub fn MeetingsPage() -> impl IntoView {
    let vm = use_meetings_view_model();
    view! { <MeetingsPanel vm=vm /> }
}

#[component]
pub fn MeetingsPanel(vm: MeetingsViewModel) -> impl IntoView {
    let form = vm.form;

    let row = move |meeting: Meeting| {
        let edited = meeting.clone();
        let id = meeting.id;
        let time = time_range(&meeting);
        view! {
            <tr>
                <td class=CELL_CLASS>{meeting.title}</td>
                <td class=CELL_CLASS>{format_optional_date(meeting.date.as_deref())}</td>
                <td class=CELL_CLASS>{time}</td>
                <td class=CELL_CLASS>{or_dash(meeting.location.as_deref())}</td>
                <td class=CELL_CLASS>{or_dash(meeting.division.as_ref().map(|d| d.name.as_str()))}</td>
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
            <PageHeader title="Meetings" description="Scheduled events of every division." />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"Add meeting"</Button>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.store.loading
                    error=vm.store.error
                    empty_title="No meetings scheduled"
                    extra_headers=vec!["Actions"]
                    row=row
                />
            </div>
            <FormModal
                is_open=vm.crud.editor_open
                title=Signal::derive(move || vm.crud.editor_title("meeting"))
                pending=vm.crud.is_saving()
                error=Signal::derive(move || vm.crud.messages.with(|m| m.error.clone()))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.crud.close_editor())
            >
                <FormField label="Title" id="meeting-title">
                    <TextInput
                        id="meeting-title"
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.title = v))
                        required=true
                    />
                </FormField>
                <FormField label="Description" id="meeting-description">
                    <TextArea
                        id="meeting-description"
                        value=Signal::derive(move || form.with(|f| f.description.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    />
                </FormField>
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                    <FormField label="Date" id="meeting-date">
                        <TextInput
                            id="meeting-date"
                            input_type="date"
                            value=Signal::derive(move || form.with(|f| f.date.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.date = v))
                            required=true
                        />
                    </FormField>
                    <FormField label="Start" id="meeting-start">
                        <TextInput
                            id="meeting-start"
                            input_type="time"
                            value=Signal::derive(move || form.with(|f| f.start_time.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.start_time = v))
                            required=true
                        />
                    </FormField>
                    <FormField label="End" id="meeting-end">
                        <TextInput
                            id="meeting-end"
                            input_type="time"
                            value=Signal::derive(move || form.with(|f| f.end_time.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.end_time = v))
                            required=true
                        />
                    </FormField>
                </div>
                <FormField label="Location" id="meeting-location">
                    <TextInput
                        id="meeting-location"
                        value=Signal::derive(move || form.with(|f| f.location.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.location = v))
                    />
                </FormField>
                <FormField label="Division" id="meeting-division">
                    <DivisionSelect
                        id="meeting-division"
                        value=Signal::derive(move || form.with(|f| f.division_id.clone()))
                        divisions=vm.divisions.items_signal()
                        on_change=Callback::new(move |v| form.update(|f| f.division_id = v))
                    />
                </FormField>
            </FormModal>
            <DeleteDialog
                noun="Meeting"
                pending_delete=vm.crud.pending_delete
                pending=vm.crud.delete.pending()
                on_confirm=Callback::new(move |_| vm.crud.confirm_delete())
            />
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range_formats_both_ends() {
        let meeting = Meeting {
            start_time: Some("09:00:00".into()),
            end_time: Some("10:30:00".into()),
            ..Meeting::default()
        };
        assert_eq!(time_range(&meeting), "09:00 - 10:30");
        assert_eq!(time_range(&Meeting::default()), "-");
    }
}
