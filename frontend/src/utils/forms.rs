use crate::api::ApiError;

/// Trimmed text, `None` when blank.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn required(value: &str, label: &str) -> Result<String, ApiError> {
    optional_text(value).ok_or_else(|| ApiError::validation(format!("{} is required", label)))
}

pub fn parse_optional_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

pub fn required_id(value: &str, label: &str) -> Result<i64, ApiError> {
    parse_optional_id(value).ok_or_else(|| ApiError::validation(format!("{} is required", label)))
}

pub fn id_to_field(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Table cell text for an optional value.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}
