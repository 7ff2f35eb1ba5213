use common::model::guide::{Question, Section, SectionText};

use super::messages::Msg;
use super::state::ModuleEditor;

/// Applies one edit to the working copy. Index-addressed messages are
/// ignored when the index no longer exists.
pub fn update(editor: &mut ModuleEditor, msg: Msg) -> bool {
    let draft = &mut editor.draft;
    match msg {
        Msg::SetTitle(title) => {
            draft.title = title;
            true
        }
        Msg::SetLocked(locked) => {
            draft.locked = locked;
            true
        }

        Msg::AddSection => {
            draft.content.sections.push(Section {
                heading: String::new(),
                text: SectionText::Text(String::new()),
                list: Vec::new(),
                expandable: None,
            });
            true
        }
        Msg::RemoveSection(index) => {
            if index >= draft.content.sections.len() {
                return false;
            }
            draft.content.sections.remove(index);
            true
        }
        Msg::SetSectionHeading(index, heading) => {
            match draft.content.sections.get_mut(index) {
                Some(section) => {
                    section.heading = heading;
                    true
                }
                None => false,
            }
        }
        Msg::SetSectionText(index, text) => match draft.content.sections.get_mut(index) {
            Some(section) => {
                section.text = SectionText::Text(text);
                true
            }
            None => false,
        },
        Msg::ToggleExpandable(index) => match draft.content.sections.get_mut(index) {
            Some(section) => {
                section.expandable = Some(!section.expandable.unwrap_or(false));
                true
            }
            None => false,
        },
        Msg::AddListItem(section) => match draft.content.sections.get_mut(section) {
            Some(section) => {
                section.list.push(String::new());
                true
            }
            None => false,
        },
        Msg::SetListItem(section, item, value) => {
            match draft
                .content
                .sections
                .get_mut(section)
                .and_then(|s| s.list.get_mut(item))
            {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            }
        }
        Msg::RemoveListItem(section, item) => match draft.content.sections.get_mut(section) {
            Some(section) if item < section.list.len() => {
                section.list.remove(item);
                true
            }
            _ => false,
        },

        Msg::AddQuestion => {
            draft.questions.push(Question {
                question: String::new(),
                options: vec![String::new()],
                correct_answer: 0,
            });
            true
        }
        Msg::RemoveQuestion(index) => {
            if index >= draft.questions.len() {
                return false;
            }
            draft.questions.remove(index);
            true
        }
        Msg::SetQuestionText(index, text) => match draft.questions.get_mut(index) {
            Some(question) => {
                question.question = text;
                true
            }
            None => false,
        },
        Msg::AddOption(index) => match draft.questions.get_mut(index) {
            Some(question) => {
                question.options.push(String::new());
                true
            }
            None => false,
        },
        Msg::SetOption(index, option, value) => {
            match draft
                .questions
                .get_mut(index)
                .and_then(|q| q.options.get_mut(option))
            {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            }
        }
        Msg::RemoveOption(index, option) => match draft.questions.get_mut(index) {
            Some(question) if option < question.options.len() => {
                question.options.remove(option);
                // Removing the selected answer resets the selection; removing
                // any other option leaves the index numerically unchanged
                // unless it fell off the end of the list.
                if question.correct_answer == option
                    || question.correct_answer >= question.options.len()
                {
                    question.correct_answer = 0;
                }
                true
            }
            _ => false,
        },
        Msg::SetCorrectAnswer(index, option) => match draft.questions.get_mut(index) {
            Some(question) if option < question.options.len() => {
                question.correct_answer = option;
                true
            }
            _ => false,
        },
    }
}
