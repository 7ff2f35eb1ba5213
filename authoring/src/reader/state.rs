use std::collections::HashMap;

use common::model::guide::Module;

/// Whether "next" waits for the current module's knowledge checks.
///
/// The public viewer does not gate on answers (completion is a visual
/// indicator only); call sites that want hard gating opt in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancePolicy {
    Free,
    RequireAllCorrect,
}

/// Feedback from the most recent answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question: usize,
    pub correct: bool,
}

pub struct GuideReader {
    pub modules: Vec<Module>,
    pub index: usize,
    /// One-way session flag: once the reader unlocks, every locked module
    /// shows its content for the rest of the session.
    pub unlocked: bool,
    /// Per-module correctness, one flag per question.
    pub answers: HashMap<usize, Vec<bool>>,
    pub policy: AdvancePolicy,
    pub last_answer: Option<AnswerOutcome>,
}

impl GuideReader {
    pub fn new(modules: Vec<Module>, policy: AdvancePolicy) -> Self {
        Self {
            modules,
            index: 0,
            unlocked: false,
            answers: HashMap::new(),
            policy,
            last_answer: None,
        }
    }

    pub fn current(&self) -> Option<&Module> {
        self.modules.get(self.index)
    }

    /// The current module shows the unlock prompt instead of content.
    pub fn is_locked_for_display(&self) -> bool {
        self.current().map(|m| m.locked).unwrap_or(false) && !self.unlocked
    }

    pub fn answered_correctly(&self, module: usize, question: usize) -> bool {
        self.answers
            .get(&module)
            .and_then(|flags| flags.get(question).copied())
            .unwrap_or(false)
    }

    /// Every question of the module has been answered correctly. A module
    /// without questions counts as complete.
    pub fn fully_answered(&self, module: usize) -> bool {
        let count = match self.modules.get(module) {
            Some(m) => m.questions.len(),
            None => return false,
        };
        if count == 0 {
            return true;
        }
        match self.answers.get(&module) {
            Some(flags) => flags.len() == count && flags.iter().all(|f| *f),
            None => false,
        }
    }
}
