use crate::{
    api::{ApiError, Attendance, AttendancePayload, Meeting},
    table::{SortColumn, SortValue, TableConfig},
    utils::{
        forms::{id_to_field, required, required_id},
        time::{format_optional_date, input_date, input_time, wire_date, wire_time},
    },
};

pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("present", "Present"),
    ("late", "Late"),
    ("permit", "Permit"),
    ("sick", "Sick"),
    ("absent", "Absent"),
];

/// Display label of a stored status; unknown values are shown as sent.
pub fn status_label(status: &str) -> String {
    STATUS_OPTIONS
        .iter()
        .find(|(value, _)| value.eq_ignore_ascii_case(status.trim()))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| status.to_string())
}

pub fn status_badge_class(status: &str) -> &'static str {
    match status.trim().to_ascii_lowercase().as_str() {
        "present" => "bg-status-success-bg text-status-success-text",
        "late" | "permit" | "sick" => "bg-status-warning-bg text-status-warning-text",
        "absent" => "bg-status-error-bg text-status-error-text",
        _ => "bg-surface-muted text-fg-muted",
    }
}

pub fn event_options(meetings: &[Meeting]) -> Vec<(String, String)> {
    meetings
        .iter()
        .map(|meeting| (meeting.id.to_string(), meeting.title.clone()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceSortKey {
    User,
    Event,
    Status,
    Date,
    Time,
}

pub fn table_config() -> TableConfig<Attendance, AttendanceSortKey> {
    TableConfig {
        search_fields: |record| {
            vec![
                record
                    .user
                    .as_ref()
                    .map(|u| u.full_name.clone())
                    .unwrap_or_default(),
                record
                    .event
                    .as_ref()
                    .map(|e| e.title.clone())
                    .unwrap_or_default(),
                record.status.clone(),
                format_optional_date(record.date.as_deref()),
            ]
        },
        columns: vec![
            SortColumn {
                key: AttendanceSortKey::User,
                label: "Member",
                accessor: |record| {
                    SortValue::text_opt(record.user.as_ref().map(|u| u.full_name.as_str()))
                },
            },
            SortColumn {
                key: AttendanceSortKey::Event,
                label: "Meeting",
                accessor: |record| {
                    SortValue::text_opt(record.event.as_ref().map(|e| e.title.as_str()))
                },
            },
            SortColumn {
                key: AttendanceSortKey::Status,
                label: "Status",
                accessor: |record| SortValue::text(&record.status),
            },
            SortColumn {
                key: AttendanceSortKey::Date,
                label: "Date",
                accessor: |record| SortValue::date_opt(record.date.as_deref()),
            },
            SortColumn {
                key: AttendanceSortKey::Time,
                label: "Time",
                accessor: |record| SortValue::time_of_day_opt(record.time.as_deref()),
            },
        ],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFormState {
    pub user_id: String,
    pub event_id: String,
    pub status: String,
    pub date: String,
    pub time: String,
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            event_id: String::new(),
            status: "present".into(),
            date: String::new(),
            time: String::new(),
        }
    }
}

impl AttendanceFormState {
    pub fn from_record(record: &Attendance) -> Self {
        Self {
            user_id: id_to_field(record.user_id.or(record.user.as_ref().map(|u| u.id))),
            event_id: id_to_field(record.event_id.or(record.event.as_ref().map(|e| e.id))),
            status: record.status.clone(),
            date: input_date(record.date.as_deref()),
            time: input_time(record.time.as_deref()),
        }
    }

    pub fn to_payload(&self) -> Result<AttendancePayload, ApiError> {
        let user_id = required_id(&self.user_id, "Member")?;
        let event_id = required_id(&self.event_id, "Meeting")?;
        let status = required(&self.status, "Status")?;
        let date = wire_date(&required(&self.date, "Date")?)
            .ok_or_else(|| ApiError::validation("Date must be a valid date"))?;
        let time = wire_time(&required(&self.time, "Time")?)
            .ok_or_else(|| ApiError::validation("Time must be a valid time"))?;
        Ok(AttendancePayload {
            user_id,
            event_id,
            status,
            date,
            time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{EventRef, UserRef};
    use crate::table::{PageMeta, TableState};

    fn record(id: i64, name: &str, time: &str) -> Attendance {
        Attendance {
            id,
            status: "present".into(),
            time: Some(time.into()),
            user: Some(UserRef {
                id,
                full_name: name.into(),
            }),
            ..Attendance::default()
        }
    }

    #[test]
    fn server_page_is_sorted_locally() {
        let page = vec![
            record(1, "Bima", "09:15:00"),
            record(2, "Ayu", "08:05:00"),
            record(3, "Citra", "8:30:00"),
        ];
        let mut state = TableState::new(3);
        state.toggle_sort(AttendanceSortKey::Time);
        let meta = PageMeta {
            total_pages: 7,
            total_items: 21,
        };
        let view = table_config().apply_server_page(&page, &state, &meta);
        let names: Vec<String> = view
            .rows
            .iter()
            .filter_map(|r| r.user.as_ref().map(|u| u.full_name.clone()))
            .collect();
        assert_eq!(names, vec!["Ayu", "Citra", "Bima"]);
        assert_eq!(view.total_pages, 7);
    }

    #[test]
    fn form_reads_ids_from_embedded_refs() {
        let form = AttendanceFormState::from_record(&Attendance {
            id: 5,
            status: "late".into(),
            date: Some("2024-04-02T00:00:00.000Z".into()),
            time: Some("08:10:00".into()),
            user: Some(UserRef {
                id: 12,
                full_name: "Dewi".into(),
            }),
            event: Some(EventRef {
                id: 4,
                title: "Sprint review".into(),
            }),
            ..Attendance::default()
        });
        assert_eq!(form.user_id, "12");
        assert_eq!(form.event_id, "4");
        assert_eq!(form.date, "2024-04-02");
        assert_eq!(form.time, "08:10");

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.time, "08:10:00");
        assert_eq!(payload.status, "late");
    }

    #[test]
    fn payload_requires_member_and_meeting() {
        let form = AttendanceFormState::default();
        assert_eq!(form.to_payload().unwrap_err().error, "Member is required");

        let form = AttendanceFormState {
            user_id: "3".into(),
            ..AttendanceFormState::default()
        };
        assert_eq!(form.to_payload().unwrap_err().error, "Meeting is required");
    }

    #[test]
    fn status_labels_and_badges() {
        assert_eq!(status_label("PRESENT"), "Present");
        assert_eq!(status_label("remote"), "remote");
        assert_ne!(status_badge_class("absent"), status_badge_class("present"));
    }
}
