use serde::{Deserialize, Serialize};

/// A catalog category. `guides` is a read-side convenience listing of guide
/// ids; the authoritative relation is the join table maintained by the API
/// layer and rebuilt wholesale on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon_url: String,
    pub color: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "comingSoon", default)]
    pub coming_soon: bool,
    #[serde(default)]
    pub guides: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}
