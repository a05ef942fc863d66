use crate::{
    api::{ApiError, Division, DivisionPayload},
    table::{SortColumn, SortValue, TableConfig},
    utils::forms::{optional_text, required},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionSortKey {
    Id,
    Name,
    Description,
}

pub fn table_config() -> TableConfig<Division, DivisionSortKey> {
    TableConfig {
        search_fields: |division| {
            vec![
                division.name.clone(),
                division.description.clone().unwrap_or_default(),
            ]
        },
        columns: vec![
            SortColumn {
                key: DivisionSortKey::Id,
                label: "ID",
                accessor: |division| SortValue::number(division.id as f64),
            },
            SortColumn {
                key: DivisionSortKey::Name,
                label: "Name",
                accessor: |division| SortValue::text(&division.name),
            },
            SortColumn {
                key: DivisionSortKey::Description,
                label: "Description",
                accessor: |division| SortValue::text_opt(division.description.as_deref()),
            },
        ],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionFormState {
    pub name: String,
    pub description: String,
}

impl DivisionFormState {
    pub fn from_record(division: &Division) -> Self {
        Self {
            name: division.name.clone(),
            description: division.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<DivisionPayload, ApiError> {
        Ok(DivisionPayload {
            name: required(&self.name, "Name")?,
            description: optional_text(&self.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{SortDirection, TableState};

    fn divisions() -> Vec<Division> {
        vec![
            Division {
                id: 1,
                name: "Web".into(),
                description: Some("Frontend and backend".into()),
            },
            Division {
                id: 2,
                name: "Mobile".into(),
                description: None,
            },
        ]
    }

    #[test]
    fn search_covers_description() {
        let mut state = TableState::new(10);
        state.set_query("FRONTEND");
        let view = table_config().apply(&divisions(), &state);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].name, "Web");
    }

    #[test]
    fn missing_description_sorts_first_ascending() {
        let mut state = TableState::new(10);
        state.toggle_sort(DivisionSortKey::Description);
        let view = table_config().apply(&divisions(), &state);
        assert_eq!(view.rows[0].name, "Mobile");

        state.toggle_sort(DivisionSortKey::Description);
        assert_eq!(state.sort.direction, SortDirection::Descending);
        let view = table_config().apply(&divisions(), &state);
        assert_eq!(view.rows[0].name, "Web");
    }

    #[test]
    fn form_round_trip() {
        let form = DivisionFormState::from_record(&divisions()[1]);
        assert_eq!(form.description, "");
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.name, "Mobile");
        assert_eq!(payload.description, None);
    }
}
