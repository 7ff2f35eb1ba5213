//! Editor for one module's sections and knowledge-check questions.
//!
//! Works on a private copy of the module: the parent only sees the result
//! when `save` is called, and cancelling is just dropping the editor. The
//! caller replaces the original module by position, since modules carry no
//! id of their own.

mod messages;
mod state;
mod update;

pub use messages::Msg;
pub use state::ModuleEditor;
pub use update::update;
