use crate::{
    api::{ApiError, Roadmap, RoadmapPayload},
    table::{SortColumn, SortValue, TableConfig},
    utils::forms::{id_to_field, optional_text, parse_optional_id, required},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapSortKey {
    Title,
    Month,
    Division,
}

pub fn month_label(month: Option<i64>) -> String {
    month
        .map(|month| format!("Month {}", month))
        .unwrap_or_else(|| "-".to_string())
}

pub fn table_config() -> TableConfig<Roadmap, RoadmapSortKey> {
    TableConfig {
        search_fields: |roadmap| {
            vec![
                roadmap.title.clone(),
                roadmap.description.clone().unwrap_or_default(),
                month_label(roadmap.month),
                roadmap
                    .division
                    .as_ref()
                    .map(|d| d.name.clone())
                    .unwrap_or_default(),
            ]
        },
        columns: vec![
            SortColumn {
                key: RoadmapSortKey::Title,
                label: "Title",
                accessor: |roadmap| SortValue::text(&roadmap.title),
            },
            SortColumn {
                key: RoadmapSortKey::Month,
                label: "Month",
                accessor: |roadmap| SortValue::number_opt(roadmap.month.map(|m| m as f64)),
            },
            SortColumn {
                key: RoadmapSortKey::Division,
                label: "Division",
                accessor: |roadmap| {
                    SortValue::text_opt(roadmap.division.as_ref().map(|d| d.name.as_str()))
                },
            },
        ],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadmapFormState {
    pub title: String,
    pub description: String,
    pub month: String,
    pub image: String,
    pub division_id: String,
}

impl RoadmapFormState {
    pub fn from_record(roadmap: &Roadmap) -> Self {
        Self {
            title: roadmap.title.clone(),
            description: roadmap.description.clone().unwrap_or_default(),
            month: id_to_field(roadmap.month),
            image: roadmap.image.clone().unwrap_or_default(),
            division_id: id_to_field(roadmap.division_id),
        }
    }

    pub fn to_payload(&self) -> Result<RoadmapPayload, ApiError> {
        let title = required(&self.title, "Title")?;
        let month = match optional_text(&self.month) {
            None => None,
            Some(raw) => match raw.parse::<i64>() {
                Ok(month) if month >= 1 => Some(month),
                _ => return Err(ApiError::validation("Month must be a positive number")),
            },
        };
        Ok(RoadmapPayload {
            title,
            description: optional_text(&self.description),
            month,
            image: optional_text(&self.image),
            division_id: parse_optional_id(&self.division_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableState;

    #[test]
    fn months_sort_numerically_with_missing_first() {
        let roadmaps = vec![
            Roadmap {
                id: 1,
                title: "Deploy".into(),
                month: Some(10),
                ..Roadmap::default()
            },
            Roadmap {
                id: 2,
                title: "Basics".into(),
                month: Some(2),
                ..Roadmap::default()
            },
            Roadmap {
                id: 3,
                title: "Backlog".into(),
                ..Roadmap::default()
            },
        ];
        let mut state = TableState::new(10);
        state.toggle_sort(RoadmapSortKey::Month);
        let ids: Vec<i64> = table_config()
            .apply(&roadmaps, &state)
            .rows
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn month_must_be_positive() {
        let mut form = RoadmapFormState {
            title: "Basics".into(),
            month: "0".into(),
            ..RoadmapFormState::default()
        };
        assert!(form.to_payload().is_err());
        form.month = "3".into();
        form.image = " uploads/basics.png ".into();
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.month, Some(3));
        assert_eq!(payload.image.as_deref(), Some("uploads/basics.png"));
    }

    #[test]
    fn month_label_for_table() {
        assert_eq!(month_label(Some(4)), "Month 4");
        assert_eq!(month_label(None), "-");
    }
}
