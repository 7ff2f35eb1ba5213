use common::model::guide::Guide;

use crate::category_index::CategoryIndex;
use crate::draft::GuideDraft;
use crate::modal::Modal;

pub const STEP_BASIC_INFO: usize = 0;
pub const STEP_CATEGORIES_KEYWORDS: usize = 1;
pub const STEP_OVERVIEW: usize = 2;
pub const STEP_MODULES: usize = 3;
pub const STEP_REVIEW: usize = 4;
pub const STEP_COUNT: usize = 5;

/// State container for the guide form: the draft, the step index, the
/// selectable category index, and the currently shown modal (if any).
pub struct GuideWizard {
    pub step: usize,
    pub draft: GuideDraft,
    /// `Some(id)` when editing an existing guide; drives create vs update.
    pub editing: Option<String>,
    pub categories: CategoryIndex,
    pub modal: Option<Modal>,
}

impl GuideWizard {
    pub fn new(categories: CategoryIndex) -> Self {
        Self {
            step: STEP_BASIC_INFO,
            draft: GuideDraft::new(),
            editing: None,
            categories,
            modal: None,
        }
    }

    pub fn edit(guide: &Guide, categories: CategoryIndex) -> Self {
        Self {
            step: STEP_BASIC_INFO,
            draft: GuideDraft::from_guide(guide),
            editing: Some(guide.id.clone()),
            categories,
            modal: None,
        }
    }

    /// Required fields missing on one step. Each step checks only its own
    /// slice of the draft; the review step has nothing of its own.
    pub fn missing_for_step(&self, step: usize) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            STEP_BASIC_INFO => {
                if self.draft.title.trim().is_empty() {
                    missing.push("Title");
                }
                if self.draft.description.trim().is_empty() {
                    missing.push("Description");
                }
                if !self.draft.image.is_set() {
                    missing.push("Image");
                }
            }
            STEP_CATEGORIES_KEYWORDS => {
                if self.draft.keywords.is_empty() {
                    missing.push("At least one keyword");
                }
            }
            STEP_OVERVIEW => {
                if self.draft.overview_text.trim().is_empty() {
                    missing.push("Overview text");
                }
            }
            STEP_MODULES => {
                if self.draft.modules.is_empty() {
                    missing.push("At least one module");
                }
            }
            _ => {}
        }
        missing
    }

    /// The submit-time superset, checked regardless of the active step.
    /// Keywords are step-gated but deliberately not part of this list.
    pub fn missing_for_submit(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.draft.title.trim().is_empty() {
            missing.push("Title");
        }
        if self.draft.description.trim().is_empty() {
            missing.push("Description");
        }
        if !self.draft.image.is_set() {
            missing.push("Image");
        }
        if self.draft.overview_text.trim().is_empty() {
            missing.push("Overview text");
        }
        if self.draft.modules.is_empty() {
            missing.push("At least one module");
        }
        missing
    }
}
