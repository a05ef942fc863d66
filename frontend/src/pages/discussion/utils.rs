use crate::{
    api::{ApiError, Forum, ForumPayload, Reply, ReplyPayload},
    table::{SortColumn, SortValue, TableConfig},
    utils::{
        forms::{id_to_field, optional_text, parse_optional_id, required},
        time::format_datetime,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForumSortKey {
    Title,
    Division,
    CreatedAt,
}

pub fn forum_table_config() -> TableConfig<Forum, ForumSortKey> {
    TableConfig {
        search_fields: |forum| {
            vec![
                forum.title.clone(),
                forum.description.clone().unwrap_or_default(),
                forum
                    .division
                    .as_ref()
                    .map(|d| d.name.clone())
                    .unwrap_or_default(),
            ]
        },
        columns: vec![
            SortColumn {
                key: ForumSortKey::Title,
                label: "Topic",
                accessor: |forum| SortValue::text(&forum.title),
            },
            SortColumn {
                key: ForumSortKey::Division,
                label: "Division",
                accessor: |forum| {
                    SortValue::text_opt(forum.division.as_ref().map(|d| d.name.as_str()))
                },
            },
            SortColumn {
                key: ForumSortKey::CreatedAt,
                label: "Opened",
                accessor: |forum| SortValue::date_opt(forum.created_at.as_deref()),
            },
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySortKey {
    Author,
    Content,
    CreatedAt,
}

pub fn reply_table_config() -> TableConfig<Reply, ReplySortKey> {
    TableConfig {
        search_fields: |reply| {
            vec![
                reply.content.clone(),
                reply
                    .user
                    .as_ref()
                    .map(|u| u.full_name.clone())
                    .unwrap_or_default(),
                reply
                    .created_at
                    .as_deref()
                    .map(format_datetime)
                    .unwrap_or_default(),
            ]
        },
        columns: vec![
            SortColumn {
                key: ReplySortKey::Author,
                label: "Author",
                accessor: |reply| {
                    SortValue::text_opt(reply.user.as_ref().map(|u| u.full_name.as_str()))
                },
            },
            SortColumn {
                key: ReplySortKey::Content,
                label: "Reply",
                accessor: |reply| SortValue::text(&reply.content),
            },
            SortColumn {
                key: ReplySortKey::CreatedAt,
                label: "Posted",
                accessor: |reply| SortValue::date_opt(reply.created_at.as_deref()),
            },
        ],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForumFormState {
    pub title: String,
    pub description: String,
    pub division_id: String,
}

impl ForumFormState {
    pub fn from_record(forum: &Forum) -> Self {
        Self {
            title: forum.title.clone(),
            description: forum.description.clone().unwrap_or_default(),
            division_id: id_to_field(forum.division_id),
        }
    }

    pub fn to_payload(&self) -> Result<ForumPayload, ApiError> {
        Ok(ForumPayload {
            title: required(&self.title, "Topic")?,
            description: optional_text(&self.description),
            division_id: parse_optional_id(&self.division_id),
        })
    }
}

/// Reply by the signed-in user; without a session there is nobody to post as.
pub fn reply_payload(
    forum_id: i64,
    user_id: Option<i64>,
    content: &str,
) -> Result<ReplyPayload, ApiError> {
    let user_id = user_id.ok_or_else(|| ApiError::unauthorized("Sign in to reply"))?;
    Ok(ReplyPayload {
        forum_id,
        user_id,
        content: required(content, "Reply")?,
    })
}

/// `/discussion/:id` segment; anything but a positive id is rejected.
pub fn parse_forum_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
