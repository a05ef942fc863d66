use super::{
    utils::month_label,
    view_model::{use_roadmaps_view_model, RoadmapsViewModel},
};
use crate::{
    api::Roadmap,
    components::{
        common::{AssetImage, Button},
        confirm_dialog::DeleteDialog,
        forms::{DivisionSelect, FormField, FormModal, TextArea, TextInput},
        layout::{Layout, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
    utils::forms::or_dash,
};
use leptos::*;

#[component]
pub fn RoadmapsPage() -> impl IntoView {
    let vm = use_roadmaps_view_model();
    view! { <RoadmapsPanel vm=vm /> }
}

#[component]
pub fn RoadmapsPanel(vm: RoadmapsViewModel) -> impl IntoView {
    let form = vm.form;

    let row = move |roadmap: Roadmap| {
        let edited = roadmap.clone();
        let id = roadmap.id;
        let alt = roadmap.title.clone();
        view! {
            <tr>
                <td class=CELL_CLASS>{roadmap.title}</td>
                <td class=CELL_CLASS>{month_label(roadmap.month)}</td>
                <td class=CELL_CLASS>{or_dash(roadmap.division.as_ref().map(|d| d.name.as_str()))}</td>
                <td class=CELL_CLASS><AssetImage path=roadmap.image alt=alt /></td>
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
            <PageHeader title="Roadmap" description="Learning milestones per division." />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"Add roadmap"</Button>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.store.loading
                    error=vm.store.error
                    empty_title="No roadmap entries yet"
                    extra_headers=vec!["Image", "Actions"]
                    row=row
                />
            </div>
            <FormModal
                is_open=vm.crud.editor_open
                title=Signal::derive(move || vm.crud.editor_title("roadmap"))
                pending=vm.crud.is_saving()
                error=Signal::derive(move || vm.crud.messages.with(|m| m.error.clone()))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.crud.close_editor())
            >
                <FormField label="Title" id="roadmap-title">
                    <TextInput
                        id="roadmap-title"
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.title = v))
                        required=true
                    />
                </FormField>
                <FormField label="Description" id="roadmap-description">
                    <TextArea
                        id="roadmap-description"
                        value=Signal::derive(move || form.with(|f| f.description.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    />
                </FormField>
                <FormField label="Month" id="roadmap-month">
                    <TextInput
                        id="roadmap-month"
                        input_type="number"
                        value=Signal::derive(move || form.with(|f| f.month.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.month = v))
                    />
                </FormField>
                <FormField label="Image path" id="roadmap-image">
                    <TextInput
                        id="roadmap-image"
                        placeholder="uploads/roadmap.png"
                        value=Signal::derive(move || form.with(|f| f.image.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.image = v))
                    />
                </FormField>
                <FormField label="Division" id="roadmap-division">
                    <DivisionSelect
                        id="roadmap-division"
                        value=Signal::derive(move || form.with(|f| f.division_id.clone()))
                        divisions=vm.divisions.items_signal()
                        on_change=Callback::new(move |v| form.update(|f| f.division_id = v))
                    />
                </FormField>
            </FormModal>
            <DeleteDialog
                noun="Roadmap"
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
    fn roadmap_rows_show_resolved_images() {
        let html = render_to_string(move || {
            provide_auth(Some(8));
            let vm = use_roadmaps_view_model();
            vm.store.items.set(vec![Roadmap {
                id: 1,
                title: "Basics".into(),
                month: Some(1),
                image: Some("uploads/basics.png".into()),
                ..Roadmap::default()
            }]);
            view! { <RoadmapsPanel vm=vm /> }
        });
        assert!(html.contains("Month 1"));
        assert!(html.contains("http://localhost:5000/uploads/basics.png"));
    }
}
