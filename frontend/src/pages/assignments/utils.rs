use crate::{
    api::{ApiError, Assignment, AssignmentPayload, GradePayload, Submission},
    table::{SortColumn, SortValue, TableConfig},
    utils::{
        forms::{id_to_field, optional_text, parse_optional_id, required},
        time::{format_optional_date, input_date, wire_date},
    },
};

/// An assignment with the submissions handed in for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentOverview {
    pub assignment: Assignment,
    pub submissions: Vec<Submission>,
}

impl AssignmentOverview {
    pub fn graded_count(&self) -> usize {
        self.submissions
            .iter()
            .filter(|submission| submission.grade.is_some())
            .count()
    }
}

/// Pairs every assignment with its submissions, keeping the assignment
/// order. Submissions for unknown assignments are dropped.
pub fn join_submissions(
    assignments: Vec<Assignment>,
    submissions: Vec<Submission>,
) -> Vec<AssignmentOverview> {
    assignments
        .into_iter()
        .map(|assignment| {
            let handed_in = submissions
                .iter()
                .filter(|submission| submission.assignment_id == Some(assignment.id))
                .cloned()
                .collect();
            AssignmentOverview {
                assignment,
                submissions: handed_in,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentSortKey {
    Title,
    Deadline,
    Division,
    Submissions,
}

pub fn table_config() -> TableConfig<AssignmentOverview, AssignmentSortKey> {
    TableConfig {
        search_fields: |row| {
            vec![
                row.assignment.title.clone(),
                row.assignment.description.clone().unwrap_or_default(),
                row.assignment
                    .division
                    .as_ref()
                    .map(|d| d.name.clone())
                    .unwrap_or_default(),
                format_optional_date(row.assignment.deadline.as_deref()),
            ]
        },
        columns: vec![
            SortColumn {
                key: AssignmentSortKey::Title,
                label: "Title",
                accessor: |row| SortValue::text(&row.assignment.title),
            },
            SortColumn {
                key: AssignmentSortKey::Deadline,
                label: "Deadline",
                accessor: |row| SortValue::date_opt(row.assignment.deadline.as_deref()),
            },
            SortColumn {
                key: AssignmentSortKey::Division,
                label: "Division",
                accessor: |row| {
                    SortValue::text_opt(row.assignment.division.as_ref().map(|d| d.name.as_str()))
                },
            },
            SortColumn {
                key: AssignmentSortKey::Submissions,
                label: "Submissions",
                accessor: |row| SortValue::number(row.submissions.len() as f64),
            },
        ],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentFormState {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub file: String,
    pub division_id: String,
}

impl AssignmentFormState {
    pub fn from_record(assignment: &Assignment) -> Self {
        Self {
            title: assignment.title.clone(),
            description: assignment.description.clone().unwrap_or_default(),
            deadline: input_date(assignment.deadline.as_deref()),
            file: assignment.file.clone().unwrap_or_default(),
            division_id: id_to_field(assignment.division_id),
        }
    }

    pub fn to_payload(&self) -> Result<AssignmentPayload, ApiError> {
        let title = required(&self.title, "Title")?;
        let deadline = wire_date(&required(&self.deadline, "Deadline")?)
            .ok_or_else(|| ApiError::validation("Deadline must be a valid date"))?;
        Ok(AssignmentPayload {
            title,
            description: optional_text(&self.description),
            deadline,
            file: optional_text(&self.file),
            division_id: parse_optional_id(&self.division_id),
        })
    }
}

pub fn grade_field(grade: Option<f64>) -> String {
    grade.map(format_grade).unwrap_or_default()
}

/// `85` for whole grades, `85.5` otherwise.
pub fn format_grade(grade: f64) -> String {
    if grade.fract() == 0.0 {
        format!("{:.0}", grade)
    } else {
        format!("{}", grade)
    }
}

pub fn parse_grade(value: &str) -> Result<GradePayload, ApiError> {
    let raw = required(value, "Grade")?;
    match raw.parse::<f64>() {
        Ok(grade) if (0.0..=100.0).contains(&grade) => Ok(GradePayload { grade }),
        _ => Err(ApiError::validation(
            "Grade must be a number between 0 and 100",
        )),
    }
}
