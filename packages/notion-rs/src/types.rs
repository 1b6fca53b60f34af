use serde::{Deserialize, Serialize};
use serde_json::json;

/// Request body for `POST /v1/pages` — one row in a database.
#[derive(Debug, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct Parent {
    pub database_id: String,
}

impl CreatePageRequest {
    /// A waitlist-style row: an "Email" property plus a "Status" select.
    pub fn email_row(database_id: &str, email: &str, status: &str) -> Self {
        Self {
            parent: Parent {
                database_id: database_id.to_string(),
            },
            properties: json!({
                "Email": { "email": email },
                "Status": { "select": { "name": status } }
            }),
        }
    }
}

/// Subset of the page object Notion returns on success.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}
