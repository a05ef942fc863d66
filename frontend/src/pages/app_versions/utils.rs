use crate::{
    api::{ApiError, AppVersion, AppVersionPayload},
    table::{SortColumn, SortValue, TableConfig},
    utils::{
        forms::{optional_text, required},
        time::{format_optional_date, input_date, wire_date},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppVersionSortKey {
    Version,
    ReleaseDate,
}

pub fn table_config() -> TableConfig<AppVersion, AppVersionSortKey> {
    TableConfig {
        search_fields: |version| {
            vec![
                version.version.clone(),
                version.description.clone().unwrap_or_default(),
                format_optional_date(version.release_date.as_deref()),
            ]
        },
        columns: vec![
            SortColumn {
                key: AppVersionSortKey::Version,
                label: "Version",
                accessor: |version| SortValue::text(&version.version),
            },
            SortColumn {
                key: AppVersionSortKey::ReleaseDate,
                label: "Released",
                accessor: |version| SortValue::date_opt(version.release_date.as_deref()),
            },
        ],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppVersionFormState {
    pub version: String,
    pub description: String,
    pub file: String,
    pub release_date: String,
}

impl AppVersionFormState {
    pub fn from_record(version: &AppVersion) -> Self {
        Self {
            version: version.version.clone(),
            description: version.description.clone().unwrap_or_default(),
            file: version.file.clone().unwrap_or_default(),
            release_date: input_date(version.release_date.as_deref()),
        }
    }

    pub fn to_payload(&self) -> Result<AppVersionPayload, ApiError> {
        let release_date = match optional_text(&self.release_date) {
            Some(raw) => Some(
                wire_date(&raw)
                    .ok_or_else(|| ApiError::validation("Release date must be a valid date"))?,
            ),
            None => None,
        };
        Ok(AppVersionPayload {
            version: required(&self.version, "Version")?,
            description: optional_text(&self.description),
            file: optional_text(&self.file),
            release_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableState;

    #[test]
    fn release_date_is_optional_but_checked() {
        let mut form = AppVersionFormState {
            version: "1.4.0".into(),
            ..AppVersionFormState::default()
        };
        assert_eq!(form.to_payload().unwrap().release_date, None);

        form.release_date = "2024-13-01".into();
        assert_eq!(
            form.to_payload().unwrap_err().error,
            "Release date must be a valid date"
        );

        form.release_date = "2024-06-01".into();
        assert_eq!(
            form.to_payload().unwrap().release_date.as_deref(),
            Some("2024-06-01")
        );
    }

    #[test]
    fn undated_versions_sort_first() {
        let versions = vec![
            AppVersion {
                id: 1,
                version: "1.1.0".into(),
                release_date: Some("2024-03-01".into()),
                ..AppVersion::default()
            },
            AppVersion {
                id: 2,
                version: "1.0.0".into(),
                release_date: Some("2024-01-01".into()),
                ..AppVersion::default()
            },
            AppVersion {
                id: 3,
                version: "0.9.0".into(),
                release_date: None,
                ..AppVersion::default()
            },
        ];
        let mut state = TableState::new(10);
        state.toggle_sort(AppVersionSortKey::ReleaseDate);
        let view = table_config().apply(&versions, &state);
        let order: Vec<i64> = view.rows.iter().map(|v| v.id).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }
}
