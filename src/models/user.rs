use serde::{Deserialize, Serialize};

/// An employee account. `company_id` is a plain reference, looked up by scan;
/// it is not validated after a reassignment (best-effort foreign key).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub company_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    /// New users start active.
    pub fn new(id: i64, name: impl Into<String>, company_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
            company_id,
            email: None,
            phone: None,
            role: None,
        }
    }

    pub fn status_str(&self) -> &'static str {
        if self.active { "active" } else { "inactive" }
    }
}
