use super::{
    repository::AssignmentsRepository,
    utils::{
        grade_field, parse_grade, table_config, AssignmentFormState, AssignmentOverview,
        AssignmentSortKey,
    },
};
use crate::{
    api::{
        ApiClient, ApiError, AssignmentPayload, Division, GradePayload, MutationResponse,
        Submission,
    },
    pages::divisions::use_division_options,
    state::{
        crud::{use_crud_controls, CrudControls, MessageState},
        list_store::ListStore,
    },
    table::{pagination::DEFAULT_PAGE_SIZE, use_table_view_model, TableViewModel},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AssignmentsViewModel {
    pub store: ListStore<AssignmentOverview>,
    pub divisions: ListStore<Division>,
    pub table: TableViewModel<AssignmentOverview, AssignmentSortKey>,
    pub crud: CrudControls<AssignmentPayload>,
    pub form: RwSignal<AssignmentFormState>,
    /// Assignment whose submissions are listed below the table.
    pub selected: RwSignal<Option<i64>>,
    /// Submission in the grading dialog.
    pub grading: RwSignal<Option<i64>>,
    pub grade_input: RwSignal<String>,
    pub grade_error: RwSignal<Option<ApiError>>,
    pub grade: Action<(i64, GradePayload), Result<MutationResponse, ApiError>>,
}

impl AssignmentsViewModel {
    pub fn open_create(&self) {
        self.form.set(AssignmentFormState::default());
        self.crud.open_editor(None);
    }

    pub fn open_edit(&self, row: &AssignmentOverview) {
        self.form
            .set(AssignmentFormState::from_record(&row.assignment));
        self.crud.open_editor(Some(row.assignment.id));
    }

    pub fn submit(&self) {
        self.crud
            .submit(self.form.with_untracked(AssignmentFormState::to_payload));
    }

    pub fn toggle_submissions(&self, assignment_id: i64) {
        self.selected.update(|selected| {
            *selected = match *selected {
                Some(current) if current == assignment_id => None,
                _ => Some(assignment_id),
            }
        });
    }

    pub fn selected_overview(&self) -> Option<AssignmentOverview> {
        let selected = self.selected.get()?;
        self.store.items.with(|rows| {
            rows.iter()
                .find(|row| row.assignment.id == selected)
                .cloned()
        })
    }

    pub fn open_grading(&self, submission: &Submission) {
        self.grade_error.set(None);
        self.grade_input.set(grade_field(submission.grade));
        self.grading.set(Some(submission.id));
    }

    pub fn close_grading(&self) {
        self.grading.set(None);
    }

    pub fn submit_grade(&self) {
        if self.grade.pending().get_untracked() {
            return;
        }
        let Some(submission_id) = self.grading.get_untracked() else {
            return;
        };
        match self.grade_input.with_untracked(|value| parse_grade(value)) {
            Ok(payload) => {
                self.grade_error.set(None);
                self.grade.dispatch((submission_id, payload));
            }
            Err(err) => self.grade_error.set(Some(err)),
        }
    }
}

pub fn use_assignments_view_model() -> AssignmentsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AssignmentsRepository::new_with_client(Rc::new(api));

    let repo_for_list = repository.clone();
    let store = ListStore::new(move || {
        let repo = repo_for_list.clone();
        async move { repo.fetch_overview().await }
    });
    let table = use_table_view_model(store.items_signal(), table_config(), DEFAULT_PAGE_SIZE);

    let repo_for_save = repository.clone();
    let repo_for_delete = repository.clone();
    let crud = use_crud_controls(
        store,
        "Assignment",
        move |id, payload| {
            let repo = repo_for_save.clone();
            async move { repo.save_assignment(id, payload).await }
        },
        move |id| {
            let repo = repo_for_delete.clone();
            async move { repo.delete_assignment(id).await }
        },
    );

    let repo_for_grade = repository;
    let grade = create_action(move |input: &(i64, GradePayload)| {
        let repo = repo_for_grade.clone();
        let (submission_id, payload) = input.clone();
        async move { repo.grade_submission(submission_id, payload).await }
    });

    let grading = create_rw_signal(None::<i64>);
    let grade_error = create_rw_signal(None::<ApiError>);
    let messages = crud.messages;
    create_effect(move |_| {
        if let Some(result) = grade.value().get() {
            match result {
                Ok(response) => {
                    messages.update(|state: &mut MessageState| {
                        state.set_success(
                            response
                                .message
                                .unwrap_or_else(|| "Grade saved.".to_string()),
                        )
                    });
                    grading.set(None);
                    store.reload();
                }
                Err(err) => {
                    log::error!("grading failed: {}", err);
                    grade_error.set(Some(err));
                }
            }
        }
    });

    create_effect(move |_| store.reload());

    AssignmentsViewModel {
        store,
        divisions: use_division_options(),
        table,
        crud,
        form: create_rw_signal(AssignmentFormState::default()),
        selected: create_rw_signal(None),
        grading,
        grade_input: create_rw_signal(String::new()),
        grade_error,
        grade,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Assignment;
    use crate::test_support::ssr::with_runtime;

    fn overview(id: i64) -> AssignmentOverview {
        AssignmentOverview {
            assignment: Assignment {
                id,
                title: format!("Task {}", id),
                ..Assignment::default()
            },
            submissions: vec![Submission {
                id: id * 10,
                assignment_id: Some(id),
                grade: Some(75.0),
                ..Submission::default()
            }],
        }
    }

    #[test]
    fn selecting_twice_hides_submissions() {
        with_runtime(|| {
            let vm = use_assignments_view_model();
            vm.store.items.set(vec![overview(1), overview(2)]);

            vm.toggle_submissions(2);
            assert_eq!(vm.selected_overview().map(|o| o.assignment.id), Some(2));
            vm.toggle_submissions(1);
            assert_eq!(vm.selected.get(), Some(1));
            vm.toggle_submissions(1);
            assert!(vm.selected_overview().is_none());
        });
    }

    #[test]
    fn invalid_grade_stays_local() {
        with_runtime(|| {
            let vm = use_assignments_view_model();
            let submission = overview(1).submissions[0].clone();
            vm.open_grading(&submission);
            assert_eq!(vm.grade_input.get(), "75");

            vm.grade_input.set("excellent".into());
            vm.submit_grade();
            assert!(vm.grade_error.get().is_some_and(|e| e.is_validation()));
            assert!(vm.grade.value().get().is_none());
        });
    }
}
