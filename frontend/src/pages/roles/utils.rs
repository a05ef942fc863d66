use crate::{
    api::{ApiError, Role, RolePayload},
    table::{SortColumn, SortValue, TableConfig},
    utils::forms::required,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSortKey {
    Id,
    Name,
}

pub fn table_config() -> TableConfig<Role, RoleSortKey> {
    TableConfig {
        search_fields: |role| vec![role.name.clone()],
        columns: vec![
            SortColumn {
                key: RoleSortKey::Id,
                label: "ID",
                accessor: |role| SortValue::number(role.id as f64),
            },
            SortColumn {
                key: RoleSortKey::Name,
                label: "Name",
                accessor: |role| SortValue::text(&role.name),
            },
        ],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFormState {
    pub name: String,
}

impl RoleFormState {
    pub fn from_record(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
        }
    }

    pub fn to_payload(&self) -> Result<RolePayload, ApiError> {
        Ok(RolePayload {
            name: required(&self.name, "Name")?,
        })
    }
}
