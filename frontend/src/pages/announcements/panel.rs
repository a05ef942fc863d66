use super::{
    utils::excerpt,
    view_model::{use_announcements_view_model, AnnouncementsViewModel},
};
use crate::{
    api::Announcement,
    components::{
        common::{AssetImage, Button},
        confirm_dialog::DeleteDialog,
        forms::{DivisionSelect, FormField, FormModal, TextArea, TextInput},
        layout::{Layout, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
    utils::{forms::or_dash, time::format_datetime},
};
use leptos::*;

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    let vm = use_announcements_view_model();
    view! { <AnnouncementsPanel vm=vm /> }
}

#[component]
pub fn AnnouncementsPanel(vm: AnnouncementsViewModel) -> impl IntoView {
    let form = vm.form;

    let row = move |announcement: Announcement| {
        let edited = announcement.clone();
        let id = announcement.id;
        let alt = announcement.title.clone();
        let posted = announcement
            .created_at
            .as_deref()
            .map(format_datetime)
            .unwrap_or_else(|| "-".to_string());
        view! {
            <tr>
                <td class=CELL_CLASS>
                    <div class="font-medium">{announcement.title}</div>
                    <div class="text-xs text-fg-muted">{excerpt(announcement.content.as_deref(), 80)}</div>
                </td>
                <td class=CELL_CLASS>{or_dash(announcement.division.as_ref().map(|d| d.name.as_str()))}</td>
                <td class=CELL_CLASS>{posted}</td>
                <td class=CELL_CLASS><AssetImage path=announcement.image alt=alt /></td>
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
            <PageHeader title="Announcements" description="News posted to members." />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"Post announcement"</Button>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.store.loading
                    error=vm.store.error
                    empty_title="No announcements yet"
                    extra_headers=vec!["Image", "Actions"]
                    row=row
                />
            </div>
            <FormModal
                is_open=vm.crud.editor_open
                title=Signal::derive(move || vm.crud.editor_title("announcement"))
                pending=vm.crud.is_saving()
                error=Signal::derive(move || vm.crud.messages.with(|m| m.error.clone()))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.crud.close_editor())
            >
                <FormField label="Title" id="announcement-title">
                    <TextInput
                        id="announcement-title"
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.title = v))
                        required=true
                    />
                </FormField>
                <FormField label="Content" id="announcement-content">
                    <TextArea
                        id="announcement-content"
                        rows=6
                        value=Signal::derive(move || form.with(|f| f.content.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.content = v))
                    />
                </FormField>
                <FormField label="Image path" id="announcement-image">
                    <TextInput
                        id="announcement-image"
                        value=Signal::derive(move || form.with(|f| f.image.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.image = v))
                    />
                </FormField>
                <FormField label="Division" id="announcement-division">
                    <DivisionSelect
                        id="announcement-division"
                        value=Signal::derive(move || form.with(|f| f.division_id.clone()))
                        divisions=vm.divisions.items_signal()
                        on_change=Callback::new(move |v| form.update(|f| f.division_id = v))
                    />
                </FormField>
            </FormModal>
            <DeleteDialog
                noun="Announcement"
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
    fn announcements_show_excerpt_and_post_date() {
        let html = render_to_string(move || {
            provide_auth(Some(3));
            let vm = use_announcements_view_model();
            vm.store.items.set(vec![Announcement {
                id: 1,
                title: "Holiday".into(),
                content: Some("Campus closed on Friday".into()),
                created_at: Some("2024-05-01T07:30:00.000Z".into()),
                ..Announcement::default()
            }]);
            view! { <AnnouncementsPanel vm=vm /> }
        });
        assert!(html.contains("Holiday"));
        assert!(html.contains("Campus closed on Friday"));
        assert!(html.contains("01 May 2024, 07:30"));
    }
}
