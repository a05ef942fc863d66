use crate::{
    api::{ApiError, Meeting, MeetingPayload},
    table::{SortColumn, SortValue, TableConfig},
    utils::{
        forms::{id_to_field, optional_text, parse_optional_id, required},
        time::{format_optional_date, input_date, input_time, wire_date, wire_time},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingSortKey {
    Title,
    Date,
    StartTime,
    Location,
    Division,
}

pub fn table_config() -> TableConfig<Meeting, MeetingSortKey> {
    TableConfig {
        search_fields: |meeting| {
            vec![
                meeting.title.clone(),
                meeting.location.clone().unwrap_or_default(),
                meeting
                    .division
                    .as_ref()
                    .map(|d| d.name.clone())
                    .unwrap_or_default(),
                format_optional_date(meeting.date.as_deref()),
            ]
        },
        columns: vec![
            SortColumn {
                key: MeetingSortKey::Title,
                label: "Title",
                accessor: |meeting| SortValue::text(&meeting.title),
            },
            SortColumn {
                key: MeetingSortKey::Date,
                label: "Date",
                accessor: |meeting| SortValue::date_opt(meeting.date.as_deref()),
            },
            SortColumn {
                key: MeetingSortKey::StartTime,
                label: "Time",
                accessor: |meeting| SortValue::time_of_day_opt(meeting.start_time.as_deref()),
            },
            SortColumn {
                key: MeetingSortKey::Location,
                label: "Location",
                accessor: |meeting| SortValue::text_opt(meeting.location.as_deref()),
            },
            SortColumn {
                key: MeetingSortKey::Division,
                label: "Division",
                accessor: |meeting| {
                    SortValue::text_opt(meeting.division.as_ref().map(|d| d.name.as_str()))
                },
            },
        ],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingFormState {
    pub title: String,
    pub description: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub division_id: String,
}

impl MeetingFormState {
    pub fn from_record(meeting: &Meeting) -> Self {
        Self {
            title: meeting.title.clone(),
            description: meeting.description.clone().unwrap_or_default(),
            date: input_date(meeting.date.as_deref()),
            start_time: input_time(meeting.start_time.as_deref()),
            end_time: input_time(meeting.end_time.as_deref()),
            location: meeting.location.clone().unwrap_or_default(),
            division_id: id_to_field(meeting.division_id),
        }
    }

    pub fn to_payload(&self) -> Result<MeetingPayload, ApiError> {
        let title = required(&self.title, "Title")?;
        let date = wire_date(&self.date).ok_or_else(|| ApiError::validation("Date is required"))?;
        let start_time = wire_time(&self.start_time)
            .ok_or_else(|| ApiError::validation("Start time is required"))?;
        let end_time = wire_time(&self.end_time)
            .ok_or_else(|| ApiError::validation("End time is required"))?;
        if end_time < start_time {
            return Err(ApiError::validation("End time must be after the start time"));
        }
        Ok(MeetingPayload {
            title,
            description: optional_text(&self.description),
            date,
            start_time,
            end_time,
            location: optional_text(&self.location),
            division_id: parse_optional_id(&self.division_id),
        })
    }
}
