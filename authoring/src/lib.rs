//! State machines behind the admin dashboard and the public guide viewer.
//!
//! Each component follows the same split: a state struct, a `Msg` enum, and
//! an `update` function that mutates the state and reports whether the view
//! should re-render. Nothing in here touches a display layer; a shell mounts
//! these states and renders from them.

pub mod category_index;
pub mod draft;
pub mod modal;
pub mod module_editor;
pub mod reader;
pub mod submit;
pub mod table;
pub mod wizard;
