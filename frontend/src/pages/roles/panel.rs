use super::view_model::{use_roles_view_model, RolesViewModel};
use crate::{
    api::Role,
    components::{
        common::Button,
        confirm_dialog::DeleteDialog,
        forms::{FormField, FormModal, TextInput},
        layout::{Layout, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
};
use leptos::*;

#[component]
pub fn RolesPage() -> impl IntoView {
    let vm = use_roles_view_model();
    view! { <RolesPanel vm=vm /> }
}

#[component]
pub fn RolesPanel(vm: RolesViewModel) -> impl IntoView {
    let form = vm.form;

    let row = move |role: Role| {
        let edited = role.clone();
        let id = role.id;
        view! {
            <tr>
                <td class=CELL_CLASS>{role.id}</td>
                <td class=CELL_CLASS>{role.name}</td>
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
            <PageHeader title="Roles" description="Permission tiers assigned to members." />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"Add role"</Button>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.store.loading
                    error=vm.store.error
                    empty_title="No roles yet"
                    extra_headers=vec!["Actions"]
                    row=row
                />
            </div>
            <FormModal
                is_open=vm.crud.editor_open
                title=Signal::derive(move || vm.crud.editor_title("role"))
                pending=vm.crud.is_saving()
                error=Signal::derive(move || vm.crud.messages.with(|m| m.error.clone()))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.crud.close_editor())
            >
                <FormField label="Name" id="role-name">
                    <TextInput
                        id="role-name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                        required=true
                    />
                </FormField>
            </FormModal>
            <DeleteDialog
                noun="Role"
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
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn roles_page_renders_loaded_rows() {
        let html = render_to_string(move || {
            provide_auth(Some(1));
            let vm = use_roles_view_model();
            vm.store.items.set(vec![
                Role {
                    id: 1,
                    name: "Super Admin".into(),
                },
                Role {
                    id: 8,
                    name: "Student".into(),
                },
            ]);
            view! { <RolesPanel vm=vm /> }
        });
        assert!(html.contains("Add role"));
        assert!(html.contains("Super Admin"));
        assert!(html.contains("Student"));
        assert!(!html.contains("No roles yet"));
    }
}
