use super::{
    utils::{format_grade, AssignmentOverview},
    view_model::{use_assignments_view_model, AssignmentsViewModel},
};
use crate::{
    api::Submission,
    components::{
        common::Button,
        confirm_dialog::DeleteDialog,
        empty_state::EmptyState,
        forms::{DivisionSelect, FormField, FormModal, TextArea, TextInput},
        layout::{Layout, Messages, PageHeader},
        table::{DataTable, RowActions, TableToolbar, CELL_CLASS},
    },
    config,
    utils::{
        forms::or_dash,
        time::{format_datetime, format_optional_date},
    },
};
use leptos::*;

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    let vm = use_assignments_view_model();
    view! { <AssignmentsPanel vm=vm /> }
}

#[component]
fn SubmissionRow(submission: Submission, vm: AssignmentsViewModel) -> impl IntoView {
    let graded = submission.clone();
    let submitted = submission
        .submitted_at
        .as_deref()
        .map(format_datetime)
        .unwrap_or_else(|| "-".into());
    let file = submission.file.as_deref().map(|path| {
        view! {
            <a href=config::asset_url(path) target="_blank" class="text-action-primary-bg hover:underline">
                "Open file"
            </a>
        }
    });
    view! {
        <tr>
            <td class=CELL_CLASS>{or_dash(submission.user.as_ref().map(|u| u.full_name.as_str()))}</td>
            <td class=CELL_CLASS>{submitted}</td>
            <td class=CELL_CLASS>{file.map(IntoView::into_view).unwrap_or_else(|| "-".into_view())}</td>
            <td class=CELL_CLASS>
                {submission.grade.map(format_grade).unwrap_or_else(|| "Not graded".into())}
            </td>
            <td class=CELL_CLASS>
                <button
                    type="button"
                    class="text-sm text-action-primary-bg hover:underline"
                    on:click=move |_| vm.open_grading(&graded)
                >
                    "Grade"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn SubmissionsCard(vm: AssignmentsViewModel) -> impl IntoView {
    move || {
        vm.selected_overview().map(|overview| {
            let title = overview.assignment.title.clone();
            let body = if overview.submissions.is_empty() {
                view! { <EmptyState title="Nothing handed in yet" /> }.into_view()
            } else {
                view! {
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                {["Member", "Submitted", "File", "Grade", ""]
                                    .into_iter()
                                    .map(|label| view! {
                                        <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                            {label}
                                        </th>
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {overview
                                .submissions
                                .into_iter()
                                .map(|submission| view! { <SubmissionRow submission=submission vm=vm /> })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_view()
            };
            view! {
                <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                    <h3 class="text-lg font-semibold text-fg">{format!("Submissions for {}", title)}</h3>
                    {body}
                </div>
            }
        })
    }
}

#[component]
pub fn AssignmentsPanel(vm: AssignmentsViewModel) -> impl IntoView {
    let form = vm.form;

    let row = move |row: AssignmentOverview| {
        let edited = row.clone();
        let id = row.assignment.id;
        let count = row.submissions.len();
        let graded = row.graded_count();
        view! {
            <tr>
                <td class=CELL_CLASS>{row.assignment.title}</td>
                <td class=CELL_CLASS>{format_optional_date(row.assignment.deadline.as_deref())}</td>
                <td class=CELL_CLASS>{or_dash(row.assignment.division.as_ref().map(|d| d.name.as_str()))}</td>
                <td class=CELL_CLASS>
                    <button
                        type="button"
                        class="text-sm text-action-primary-bg hover:underline"
                        on:click=move |_| vm.toggle_submissions(id)
                    >
                        {format!("{} handed in, {} graded", count, graded)}
                    </button>
                </td>
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
            <PageHeader title="Assignments" description="Tasks, hand-ins and grades." />
            <Messages messages=vm.crud.messages />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <TableToolbar vm=vm.table>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"Add assignment"</Button>
                </TableToolbar>
                <DataTable
                    vm=vm.table
                    loading=vm.store.loading
                    error=vm.store.error
                    empty_title="No assignments yet"
                    extra_headers=vec!["Actions"]
                    row=row
                />
            </div>
            <SubmissionsCard vm=vm />
            <FormModal
                is_open=vm.crud.editor_open
                title=Signal::derive(move || vm.crud.editor_title("assignment"))
                pending=vm.crud.is_saving()
                error=Signal::derive(move || vm.crud.messages.with(|m| m.error.clone()))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.crud.close_editor())
            >
                <FormField label="Title" id="assignment-title">
                    <TextInput
                        id="assignment-title"
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.title = v))
                        required=true
                    />
                </FormField>
                <FormField label="Description" id="assignment-description">
                    <TextArea
                        id="assignment-description"
                        value=Signal::derive(move || form.with(|f| f.description.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    />
                </FormField>
                <FormField label="Deadline" id="assignment-deadline">
                    <TextInput
                        id="assignment-deadline"
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.deadline.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.deadline = v))
                        required=true
                    />
                </FormField>
                <FormField label="Brief file path" id="assignment-file">
                    <TextInput
                        id="assignment-file"
                        value=Signal::derive(move || form.with(|f| f.file.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.file = v))
                    />
                </FormField>
                <FormField label="Division" id="assignment-division">
                    <DivisionSelect
                        id="assignment-division"
                        value=Signal::derive(move || form.with(|f| f.division_id.clone()))
                        divisions=vm.divisions.items_signal()
                        on_change=Callback::new(move |v| form.update(|f| f.division_id = v))
                    />
                </FormField>
            </FormModal>
            <FormModal
                is_open=Signal::derive(move || vm.grading.get().is_some())
                title=Signal::derive(|| "Grade submission".to_string())
                pending=vm.grade.pending()
                error=vm.grade_error
                on_submit=Callback::new(move |_| vm.submit_grade())
                on_cancel=Callback::new(move |_| vm.close_grading())
            >
                <FormField label="Grade (0-100)" id="submission-grade">
                    <TextInput
                        id="submission-grade"
                        input_type="number"
                        value=vm.grade_input
                        on_input=Callback::new(move |v| vm.grade_input.set(v))
                        required=true
                    />
                </FormField>
            </FormModal>
            <DeleteDialog
                noun="Assignment"
                pending_delete=vm.crud.pending_delete
                pending=vm.crud.delete.pending()
                on_confirm=Callback::new(move |_| vm.crud.confirm_delete())
            />
        </Layout>
    }
}
