use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub shop_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    /// Outer `None`: key absent, keep the assignment. `Some(None)`: explicit
    /// `null`, unassign.
    #[serde(default, deserialize_with = "present")]
    pub shop_id: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Employee {
    pub fn apply(&mut self, changes: EmployeeChanges) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(shop_id) = changes.shop_id {
            self.shop_id = shop_id.filter(|id| !id.is_empty());
        }
    }

    pub fn works_at(&self, shop_id: &str) -> bool {
        self.shop_id.as_deref() == Some(shop_id)
    }
}
