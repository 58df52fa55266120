use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use chrono::{DateTime, Utc};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    /// Records written without a timestamp load as the Unix epoch.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// Keys this service does not know about, kept so a save does not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields a caller may change on an existing shop. `id` and `createdAt` are
/// not listed, so they survive every update.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShopChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
}

impl Shop {
    pub fn apply(&mut self, changes: ShopChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
    }

    /// Case-insensitive substring match over name or category.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.category.to_lowercase().contains(needle_lower)
    }
}
