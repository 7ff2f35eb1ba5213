#[derive(Clone, Copy)]
pub enum Msg {
    Next,
    Back,
    /// From the unlock prompt; flips the one-way session flag.
    Unlock,
    /// Submits the selected option for a question of the current module.
    Answer { question: usize, option: usize },
}
