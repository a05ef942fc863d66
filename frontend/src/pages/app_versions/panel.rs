use super::view_model::{use_app_versions_view_model, AppVersionsViewModel};
use crate::{
    api::AppVersion,
    components::{
        common::Button,
        confirm_dialog::DeleteDialog,
        forms::{FormField, FormModal, TextArea, TextInput},
        layout::{Layout, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
    config,
    utils::{forms::or_dash, time::format_optional_date},
};
use leptos::*;

#[component]
pub fn AppVersionsPage() -> impl IntoView {
    let vm = use_app_versions_view_model();
    view! { <AppVersionsPanel vm=vm /> }
}

#[component]
pub fn AppVersionsPanel(vm: AppVersionsViewModel) -> impl IntoView {
    let form = vm.form;

    let row = move |version: AppVersion| {
        let edited = version.clone();
        let id = version.id;
        let download = version.file.as_deref().map(|file| {
            view! {
                <a href=config::asset_url(file) class="text-action-primary-bg hover:underline" target="_blank">
                    "Download"
                </a>
            }
        });
        view! {
            <tr>
                <td class=CELL_CLASS>{version.version}</td>
                <td class=CELL_CLASS>{format_optional_date(version.release_date.as_deref())}</td>
                <td class=CELL_CLASS>{or_dash(version.description.as_deref())}</td>
                <td class=CELL_CLASS>{download.map(IntoView::into_view).unwrap_or_else(|| "-".into_view())}</td>
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
            <PageHeader title="App Versions" description="Mobile app releases offered to members." />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"Add version"</Button>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.store.loading
                    error=vm.store.error
                    empty_title="No releases yet"
                    extra_headers=vec!["Notes", "File", "Actions"]
                    row=row
                />
            </div>
            <FormModal
                is_open=vm.crud.editor_open
                title=Signal::derive(move || vm.crud.editor_title("app version"))
                pending=vm.crud.is_saving()
                error=Signal::derive(move || vm.crud.messages.with(|m| m.error.clone()))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.crud.close_editor())
            >
                <FormField label="Version" id="version-number">
                    <TextInput
                        id="version-number"
                        placeholder="1.0.0"
                        value=Signal::derive(move || form.with(|f| f.version.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.version = v))
                        required=true
                    />
                </FormField>
                <FormField label="Release date" id="version-release">
                    <TextInput
                        id="version-release"
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.release_date.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.release_date = v))
                    />
                </FormField>
                <FormField label="Release notes" id="version-description">
                    <TextArea
                        id="version-description"
                        value=Signal::derive(move || form.with(|f| f.description.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    />
                </FormField>
                <FormField label="File path" id="version-file">
                    <TextInput
                        id="version-file"
                        placeholder="uploads/app-release.apk"
                        value=Signal::derive(move || form.with(|f| f.file.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.file = v))
                    />
                </FormField>
            </FormModal>
            <DeleteDialog
                noun="App version"
                pending_delete=vm.crud.pending_delete
                pending=vm.crud.delete.pending()
                on_confirm=Callback::new(move |_| vm.crud.confirm_delete())
            />
        </Layout>
    }
}
