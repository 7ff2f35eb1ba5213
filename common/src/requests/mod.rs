//! Request payloads shared between the API layer and the authoring side.
//!
//! Write payloads use defaulted fields plus a `missing_fields` check instead
//! of failing on the first absent key, so a rejection can name every missing
//! field at once — the same report shape the authoring wizard shows.

use serde::{Deserialize, Serialize};

use crate::model::ai_model::Pricing;
use crate::model::guide::{CategorySnapshot, GuideMetadata, Module};

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// Body of category create/replace requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "comingSoon", default)]
    pub coming_soon: bool,
    /// Guide ids to link; join rows are created for each.
    #[serde(default)]
    pub guides: Vec<String>,
}

impl CategoryPayload {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.icon_url.trim().is_empty() {
            missing.push("icon_url");
        }
        if self.color.trim().is_empty() {
            missing.push("color");
        }
        missing
    }
}

/// Body of guide create/replace requests. The full object is sent on every
/// save; there are no partial patch semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidePayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub categories: Vec<CategorySnapshot>,
    #[serde(default)]
    pub metadata: GuideMetadata,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl GuidePayload {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.image.trim().is_empty() {
            missing.push("image");
        }
        missing
    }
}

/// Body of AI-model create/replace requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiModelPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub link: Option<String>,
}

impl AiModelPayload {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.company.trim().is_empty() {
            missing.push("company");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.strengths.is_empty() {
            missing.push("strengths");
        }
        if self.limitations.is_empty() {
            missing.push("limitations");
        }
        if self.use_cases.is_empty() {
            missing.push("use_cases");
        }
        match &self.pricing {
            None => {
                missing.push("pricing.free");
                missing.push("pricing.paid");
                missing.push("pricing.api");
            }
            Some(pricing) => {
                if pricing.free.trim().is_empty() {
                    missing.push("pricing.free");
                }
                if pricing.paid.trim().is_empty() {
                    missing.push("pricing.paid");
                }
                if pricing.api.trim().is_empty() {
                    missing.push("pricing.api");
                }
            }
        }
        missing
    }
}
