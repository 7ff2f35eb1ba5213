//! The mutable guide draft owned by the wizard.
//!
//! The draft is the only mutable copy of a guide while it is being edited;
//! the persistence service becomes authoritative again after a successful
//! save.

use common::model::guide::{Guide, GuideMetadata, Module, Overview};

/// Where the draft's hero image currently lives.
///
/// A persisted guide always carries `Url`; `Pending` only exists between the
/// author picking a file and the submit sequence uploading it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ImageSource {
    #[default]
    Unset,
    Url(String),
    Pending {
        filename: String,
        bytes: Vec<u8>,
    },
}

impl ImageSource {
    pub fn is_set(&self) -> bool {
        !matches!(self, ImageSource::Unset)
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ImageSource::Url(url) => Some(url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuideDraft {
    pub title: String,
    pub description: String,
    pub image: ImageSource,
    pub color: String,
    pub is_popular: bool,
    /// Selected category ids, resolved to snapshots at submit time.
    pub category_ids: Vec<String>,
    pub keywords: Vec<String>,
    pub overview_text: String,
    pub overview_bullets: Vec<String>,
    pub modules: Vec<Module>,
}

impl GuideDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a draft from an existing guide for editing.
    pub fn from_guide(guide: &Guide) -> Self {
        Self {
            title: guide.title.clone(),
            description: guide.description.clone(),
            image: ImageSource::Url(guide.image.clone()),
            color: guide.color.clone(),
            is_popular: guide.is_popular,
            category_ids: guide.categories.iter().map(|c| c.id.clone()).collect(),
            keywords: guide.metadata.keywords.clone(),
            overview_text: guide.metadata.overview.text.clone(),
            overview_bullets: guide.metadata.overview.bullets.clone(),
            modules: guide.modules.clone(),
        }
    }

    pub fn metadata(&self) -> GuideMetadata {
        GuideMetadata {
            keywords: self.keywords.clone(),
            overview: Overview {
                text: self.overview_text.clone(),
                bullets: self.overview_bullets.clone(),
            },
        }
    }
}
