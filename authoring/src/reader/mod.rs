//! Read-side module navigation: the locked-module gate and per-question
//! knowledge-check tracking. Used both by the public guide viewer and by the
//! review step's preview.

mod messages;
mod state;
mod update;

pub use messages::Msg;
pub use state::{AdvancePolicy, AnswerOutcome, GuideReader};
pub use update::update;
