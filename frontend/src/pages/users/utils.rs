use crate::{
    api::{ApiError, Role, User, UserPayload},
    table::{SortColumn, SortValue, TableConfig},
    utils::forms::{id_to_field, parse_optional_id, required},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortKey {
    Name,
    Email,
    Role,
    Division,
}

pub fn table_config() -> TableConfig<User, UserSortKey> {
    TableConfig {
        search_fields: |user| {
            vec![
                user.full_name.clone(),
                user.email.clone(),
                user.role.as_ref().map(|r| r.name.clone()).unwrap_or_default(),
                user.division
                    .as_ref()
                    .map(|d| d.name.clone())
                    .unwrap_or_default(),
            ]
        },
        columns: vec![
            SortColumn {
                key: UserSortKey::Name,
                label: "Name",
                accessor: |user| SortValue::text(&user.full_name),
            },
            SortColumn {
                key: UserSortKey::Email,
                label: "Email",
                accessor: |user| SortValue::text(&user.email),
            },
            SortColumn {
                key: UserSortKey::Role,
                label: "Role",
                accessor: |user| SortValue::text_opt(user.role.as_ref().map(|r| r.name.as_str())),
            },
            SortColumn {
                key: UserSortKey::Division,
                label: "Division",
                accessor: |user| {
                    SortValue::text_opt(user.division.as_ref().map(|d| d.name.as_str()))
                },
            },
        ],
    }
}

pub fn role_options(roles: &[Role]) -> Vec<(String, String)> {
    roles
        .iter()
        .map(|role| (role.id.to_string(), role.name.clone()))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormState {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role_id: String,
    pub division_id: String,
}

impl UserFormState {
    pub fn from_record(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            password: String::new(),
            confirm_password: String::new(),
            role_id: id_to_field(user.role_id.or(user.role.as_ref().map(|r| r.id))),
            division_id: id_to_field(user.division_id.or(user.division.as_ref().map(|d| d.id))),
        }
    }

    /// New accounts need a password; on update a blank password keeps the
    /// current one.
    pub fn to_payload(&self, creating: bool) -> Result<UserPayload, ApiError> {
        let full_name = required(&self.full_name, "Full name")?;
        let email = required(&self.email, "Email")?;
        if !email.contains('@') {
            return Err(ApiError::validation("Email must be a valid address"));
        }
        let password = if creating {
            Some(required(&self.password, "Password")?)
        } else {
            (!self.password.is_empty()).then(|| self.password.clone())
        };
        if password.is_some() && self.password != self.confirm_password {
            return Err(ApiError::validation("Passwords do not match"));
        }
        Ok(UserPayload {
            full_name,
            email,
            password,
            role_id: parse_optional_id(&self.role_id),
            division_id: parse_optional_id(&self.division_id),
        })
    }
}
