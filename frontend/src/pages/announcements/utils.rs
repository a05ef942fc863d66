use crate::{
    api::{Announcement, AnnouncementPayload, ApiError},
    table::{SortColumn, SortValue, TableConfig},
    utils::{
        forms::{id_to_field, optional_text, parse_optional_id, required},
        time::format_datetime,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementSortKey {
    Title,
    Division,
    CreatedAt,
}

pub fn table_config() -> TableConfig<Announcement, AnnouncementSortKey> {
    TableConfig {
        search_fields: |announcement| {
            vec![
                announcement.title.clone(),
                announcement.content.clone().unwrap_or_default(),
                announcement
                    .division
                    .as_ref()
                    .map(|d| d.name.clone())
                    .unwrap_or_default(),
                announcement
                    .created_at
                    .as_deref()
                    .map(format_datetime)
                    .unwrap_or_default(),
            ]
        },
        columns: vec![
            SortColumn {
                key: AnnouncementSortKey::Title,
                label: "Title",
                accessor: |announcement| SortValue::text(&announcement.title),
            },
            SortColumn {
                key: AnnouncementSortKey::Division,
                label: "Division",
                accessor: |announcement| {
                    SortValue::text_opt(announcement.division.as_ref().map(|d| d.name.as_str()))
                },
            },
            SortColumn {
                key: AnnouncementSortKey::CreatedAt,
                label: "Posted",
                accessor: |announcement| SortValue::date_opt(announcement.created_at.as_deref()),
            },
        ],
    }
}

/// First `limit` characters of the body for the table cell.
pub fn excerpt(content: Option<&str>, limit: usize) -> String {
    let content = content.unwrap_or_default().trim();
    if content.chars().count() <= limit {
        return content.to_string();
    }
    let cut: String = content.chars().take(limit).collect();
    format!("{}…", cut.trim_end())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementFormState {
    pub title: String,
    pub content: String,
    pub image: String,
    pub division_id: String,
}

impl AnnouncementFormState {
    pub fn from_record(announcement: &Announcement) -> Self {
        Self {
            title: announcement.title.clone(),
            content: announcement.content.clone().unwrap_or_default(),
            image: announcement.image.clone().unwrap_or_default(),
            division_id: id_to_field(announcement.division_id),
        }
    }

    pub fn to_payload(&self) -> Result<AnnouncementPayload, ApiError> {
        Ok(AnnouncementPayload {
            title: required(&self.title, "Title")?,
            content: Some(required(&self.content, "Content")?),
            image: optional_text(&self.image),
            division_id: parse_optional_id(&self.division_id),
        })
    }
}
