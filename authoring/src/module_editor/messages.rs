#[derive(Clone)]
pub enum Msg {
    SetTitle(String),
    SetLocked(bool),

    AddSection,
    RemoveSection(usize),
    SetSectionHeading(usize, String),
    SetSectionText(usize, String),
    ToggleExpandable(usize),
    AddListItem(usize),
    SetListItem(usize, usize, String),
    RemoveListItem(usize, usize),

    AddQuestion,
    RemoveQuestion(usize),
    SetQuestionText(usize, String),
    AddOption(usize),
    SetOption(usize, usize, String),
    RemoveOption(usize, usize),
    SetCorrectAnswer(usize, usize),
}
