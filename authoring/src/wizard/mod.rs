//! The five-step guide authoring wizard.
//!
//! Forward navigation is gated on the current step's required fields only;
//! the submit sequence in [`crate::submit`] re-validates the union before
//! touching the network.

mod messages;
mod state;
mod update;

pub use messages::Msg;
pub use state::{
    GuideWizard, STEP_BASIC_INFO, STEP_CATEGORIES_KEYWORDS, STEP_COUNT, STEP_MODULES,
    STEP_OVERVIEW, STEP_REVIEW,
};
pub use update::update;
