use common::model::category::Category;
use common::model::guide::Module;

#[derive(Clone)]
pub enum Msg {
    SetTitle(String),
    SetDescription(String),
    SetColor(String),
    SetPopular(bool),
    /// A file was picked; it stays local until the submit sequence uploads it.
    AttachImage { filename: String, bytes: Vec<u8> },
    SetImageUrl(String),
    ClearImage,

    AddKeyword(String),
    RemoveKeyword(usize),

    ToggleCategory(String),
    /// Result of the in-form category creation side channel: the new
    /// category joins both the selectable index and the draft selection.
    CategoryCreated(Category),

    SetOverviewText(String),
    AddOverviewBullet(String),
    SetOverviewBullet(usize, String),
    RemoveOverviewBullet(usize),

    AddModule(Module),
    ReplaceModule(usize, Module),
    RemoveModule(usize),

    Advance,
    Retreat,
    DismissModal,
}
