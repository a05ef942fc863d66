use super::view_model::{use_divisions_view_model, DivisionsViewModel};
use crate::{
    api::Division,
    components::{
        common::Button,
        confirm_dialog::DeleteDialog,
        forms::{FormField, FormModal, TextArea, TextInput},
        layout::{Layout, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
    utils::forms::or_dash,
};
use leptos::*;

#[component]
pub fn DivisionsPage() -> impl IntoView {
    let vm = use_divisions_view_model();
    view! { <DivisionsPanel vm=vm /> }
}

#[component]
pub fn DivisionsPanel(vm: DivisionsViewModel) -> impl IntoView {
    let form = vm.form;

    let row = move |division: Division| {
        let edited = division.clone();
        let id = division.id;
        view! {
            <tr>
                <td class=CELL_CLASS>{division.id}</td>
                <td class=CELL_CLASS>{division.name}</td>
                <td class="px-4 py-3 text-sm text-fg-muted">{or_dash(division.description.as_deref())}</td>
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
            <PageHeader title="Divisions" description="Organisational groups members belong to." />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"Add division"</Button>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.store.loading
                    error=vm.store.error
                    empty_title="No divisions yet"
                    extra_headers=vec!["Actions"]
                    row=row
                />
            </div>
            <FormModal
                is_open=vm.crud.editor_open
                title=Signal::derive(move || vm.crud.editor_title("division"))
                pending=vm.crud.is_saving()
                error=Signal::derive(move || vm.crud.messages.with(|m| m.error.clone()))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.crud.close_editor())
            >
                <FormField label="Name" id="division-name">
                    <TextInput
                        id="division-name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                        required=true
                    />
                </FormField>
                <FormField label="Description" id="division-description">
                    <TextArea
                        id="division-description"
                        value=Signal::derive(move || form.with(|f| f.description.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    />
                </FormField>
            </FormModal>
            <DeleteDialog
                noun="Division"
                pending_delete=vm.crud.pending_delete
                pending=vm.crud.delete.pending()
                on_confirm=Callback::new(move |_| vm.crud.confirm_delete())
            />
        </Layout>
    }
}
