//! Guide catalog entries and their nested module content.
//!
//! A guide is the unit the catalog lists and the admin wizard edits: basic
//! info, category snapshots, keyword/overview metadata, and an ordered list
//! of modules. Modules carry no identity of their own; they live and die
//! with their guide and are addressed by position.

use serde::{Deserialize, Serialize};

/// A published guide as stored and served by the API.
///
/// `image` is always a resolved URL here; the pending-local-file state only
/// exists inside the authoring draft before upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_popular: bool,
    /// Read-side flattening of the join relation, rebuilt on every write.
    #[serde(default)]
    pub categories: Vec<CategorySnapshot>,
    #[serde(default)]
    pub metadata: GuideMetadata,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

/// The `{id, title, color}` snapshot a guide keeps of each selected
/// category. A snapshot, not a live reference: it is resolved from the
/// category list at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    pub id: String,
    pub title: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideMetadata {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub overview: Overview,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Overview {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub title: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub content: ModuleContent,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModuleContent {
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub text: SectionText,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expandable: Option<bool>,
}

/// Section body text, accepted either as a bare string or as a list of
/// paragraph strings. Untagged so both forms deserialize and serialize back
/// exactly as written; `normalized` is the list form written at rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionText {
    Text(String),
    Paragraphs(Vec<String>),
}

impl Default for SectionText {
    fn default() -> Self {
        SectionText::Text(String::new())
    }
}

impl SectionText {
    pub fn normalized(&self) -> Vec<String> {
        match self {
            SectionText::Text(text) => vec![text.clone()],
            SectionText::Paragraphs(paragraphs) => paragraphs.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SectionText::Text(text) => text.trim().is_empty(),
            SectionText::Paragraphs(paragraphs) => {
                paragraphs.iter().all(|p| p.trim().is_empty())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer", default)]
    pub correct_answer: usize,
}

/// Rewrites every section body to the list-of-paragraphs form. Applied to a
/// payload before it is persisted; editing keeps whatever form the author
/// typed.
pub fn normalize_sections(modules: &mut [Module]) {
    for module in modules {
        for section in &mut module.content.sections {
            section.text = SectionText::Paragraphs(section.text.normalized());
        }
    }
}
