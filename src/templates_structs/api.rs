use serde::{Deserialize, Serialize};

use crate::models::tour::{FieldError, TourFormValues};

/// Generic paginated response wrapper for API endpoints.
#[derive(Serialize, Debug, Clone)]
pub struct PaginatedResponse<T: Serialize> {
    pub items: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// Create-tour request. Values may be JSON strings or numbers, and
/// `includedItems` may also be an array of strings.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiTourRequest {
    pub title: serde_json::Value,
    pub description: serde_json::Value,
    pub price: serde_json::Value,
    pub category: serde_json::Value,
    pub duration: serde_json::Value,
    pub max_group_size: serde_json::Value,
    pub meeting_point: serde_json::Value,
    pub included_items: serde_json::Value,
    pub status: serde_json::Value,
}

fn as_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items.iter().map(as_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

impl ApiTourRequest {
    /// Flatten into the same text values the HTML form posts.
    pub fn into_values(self) -> TourFormValues {
        TourFormValues {
            title: as_text(&self.title),
            description: as_text(&self.description),
            price: as_text(&self.price),
            category: as_text(&self.category),
            duration: as_text(&self.duration),
            max_group_size: as_text(&self.max_group_size),
            meeting_point: as_text(&self.meeting_point),
            included_items: as_text(&self.included_items),
            status: as_text(&self.status),
        }
    }
}
