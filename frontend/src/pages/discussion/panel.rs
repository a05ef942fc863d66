use super::view_model::{use_forums_view_model, ForumsViewModel};
use crate::{
    api::Forum,
    components::{
        common::Button,
        confirm_dialog::DeleteDialog,
        forms::{DivisionSelect, FormField, FormModal, TextArea, TextInput},
        layout::{Layout, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
    utils::{forms::or_dash, time::format_datetime},
};
use leptos::*;

#[component]
pub fn ForumsPage() -> impl IntoView {
    let vm = use_forums_view_model();
    view! { <ForumsPanel vm=vm /> }
}

#[component]
pub fn ForumsPanel(vm: ForumsViewModel) -> impl IntoView {
    let form = vm.form;

    let row = move |forum: Forum| {
        let edited = forum.clone();
        let id = forum.id;
        let opened = forum
            .created_at
            .as_deref()
            .map(format_datetime)
            .unwrap_or_else(|| "-".into());
        view! {
            <tr>
                <td class=CELL_CLASS>
                    <a href=format!("/discussion/{}", id) class="font-medium text-action-primary-bg hover:underline">
                        {forum.title}
                    </a>
                </td>
                <td class=CELL_CLASS>{or_dash(forum.division.as_ref().map(|d| d.name.as_str()))}</td>
                <td class=CELL_CLASS>{opened}</td>
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
            <PageHeader title="Discussion" description="Forums where members ask and answer." />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"Open forum"</Button>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.store.loading
                    error=vm.store.error
                    empty_title="No forums yet"
                    extra_headers=vec!["Actions"]
                    row=row
                />
            </div>
            <FormModal
                is_open=vm.crud.editor_open
                title=Signal::derive(move || vm.crud.editor_title("forum"))
                pending=vm.crud.is_saving()
                error=Signal::derive(move || vm.crud.messages.with(|m| m.error.clone()))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.crud.close_editor())
            >
                <FormField label="Topic" id="forum-title">
                    <TextInput
                        id="forum-title"
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.title = v))
                        required=true
                    />
                </FormField>
                <FormField label="Description" id="forum-description">
                    <TextArea
                        id="forum-description"
                        value=Signal::derive(move || form.with(|f| f.description.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    />
                </FormField>
                <FormField label="Division" id="forum-division">
                    <DivisionSelect
                        id="forum-division"
                        value=Signal::derive(move || form.with(|f| f.division_id.clone()))
                        divisions=vm.divisions.items_signal()
                        on_change=Callback::new(move |v| form.update(|f| f.division_id = v))
                    />
                </FormField>
            </FormModal>
            <DeleteDialog
                noun="Forum"
                pending_delete=vm.crud.pending_delete
                pending=vm.crud.delete.pending()
                on_confirm=Callback::new(move |_| vm.crud.confirm_delete())
            />
        </Layout>
    }
}
