use super::{
    utils::role_options,
    view_model::{use_users_view_model, UsersViewModel},
};
use crate::{
    api::User,
    components::{
        common::Button,
        confirm_dialog::DeleteDialog,
        forms::{DivisionSelect, FormField, FormModal, SelectInput, TextInput},
        layout::{Layout, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
    utils::forms::or_dash,
};
use leptos::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    let vm = use_users_view_model();
    view! { <UsersPanel vm=vm /> }
}

#[component]
pub fn UsersPanel(vm: UsersViewModel) -> impl IntoView {
    let form = vm.form;
    let roles = vm.roles.items;
    let role_choices = Signal::derive(move || roles.with(|roles| role_options(roles)));
    let password_label = move || {
        if vm.is_creating() {
            "Password"
        } else {
            "New password (leave blank to keep)"
        }
    };

    let row = move |user: User| {
        let edited = user.clone();
        let id = user.id;
        view! {
            <tr>
                <td class=CELL_CLASS>{user.full_name}</td>
                <td class=CELL_CLASS>{user.email}</td>
                <td class=CELL_CLASS>{or_dash(user.role.as_ref().map(|r| r.name.as_str()))}</td>
                <td class=CELL_CLASS>{or_dash(user.division.as_ref().map(|d| d.name.as_str()))}</td>
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
            <PageHeader title="Users" description="Member accounts, their roles and divisions." />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"Add user"</Button>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.store.loading
                    error=vm.store.error
                    empty_title="No users found"
                    extra_headers=vec!["Actions"]
                    row=row
                />
            </div>
            <FormModal
                is_open=vm.crud.editor_open
                title=Signal::derive(move || vm.crud.editor_title("user"))
                pending=vm.crud.is_saving()
                error=Signal::derive(move || vm.crud.messages.with(|m| m.error.clone()))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.crud.close_editor())
            >
                <FormField label="Full name" id="user-name">
                    <TextInput
                        id="user-name"
                        value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.full_name = v))
                        required=true
                    />
                </FormField>
                <FormField label="Email" id="user-email">
                    <TextInput
                        id="user-email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        required=true
                    />
                </FormField>
                <div class="grid grid-cols-2 gap-4">
                    <div class="space-y-1">
                        <label for="user-password" class="block text-sm font-medium text-fg">
                            {password_label}
                        </label>
                        <TextInput
                            id="user-password"
                            input_type="password"
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        />
                    </div>
                    <FormField label="Confirm password" id="user-password-confirm">
                        <TextInput
                            id="user-password-confirm"
                            input_type="password"
                            value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.confirm_password = v))
                        />
                    </FormField>
                </div>
                <FormField label="Role" id="user-role">
                    <SelectInput
                        id="user-role"
                        value=Signal::derive(move || form.with(|f| f.role_id.clone()))
                        options=role_choices
                        on_change=Callback::new(move |v| form.update(|f| f.role_id = v))
                        placeholder="Select a role"
                    />
                </FormField>
                <FormField label="Division" id="user-division">
                    <DivisionSelect
                        id="user-division"
                        value=Signal::derive(move || form.with(|f| f.division_id.clone()))
                        divisions=vm.divisions.items_signal()
                        on_change=Callback::new(move |v| form.update(|f| f.division_id = v))
                    />
                </FormField>
            </FormModal>
            <DeleteDialog
                noun="User"
                pending_delete=vm.crud.pending_delete
                pending=vm.crud.delete.pending()
                on_confirm=Callback::new(move |_| vm.crud.confirm_delete())
            />
        </Layout>
    }
}
