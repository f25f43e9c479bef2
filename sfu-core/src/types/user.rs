use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The local user as announced to the SFU in the auth payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub extra_data: HashMap<String, serde_json::Value>,
}

impl UserInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name shown to other participants; falls back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
