use super::messages::Msg;
use super::state::{AdvancePolicy, AnswerOutcome, GuideReader};

pub fn update(reader: &mut GuideReader, msg: Msg) -> bool {
    match msg {
        Msg::Next => {
            if reader.is_locked_for_display() {
                // The unlock prompt only offers "unlock" and "back".
                return false;
            }
            if reader.policy == AdvancePolicy::RequireAllCorrect
                && !reader.fully_answered(reader.index)
            {
                return false;
            }
            if reader.index + 1 >= reader.modules.len() {
                return false;
            }
            reader.index += 1;
            reader.last_answer = None;
            true
        }
        Msg::Back => {
            if reader.index == 0 {
                return false;
            }
            reader.index -= 1;
            reader.last_answer = None;
            true
        }
        Msg::Unlock => {
            reader.unlocked = true;
            true
        }
        Msg::Answer { question, option } => {
            if reader.is_locked_for_display() {
                return false;
            }
            let module = reader.index;
            let correct_option = match reader
                .modules
                .get(module)
                .and_then(|m| m.questions.get(question))
            {
                Some(q) => q.correct_answer,
                None => return false,
            };
            // A correct answer is final; the control is disabled afterwards.
            if reader.answered_correctly(module, question) {
                return false;
            }
            let question_count = reader.modules[module].questions.len();
            let flags = reader
                .answers
                .entry(module)
                .or_insert_with(|| vec![false; question_count]);
            if flags.len() < question_count {
                flags.resize(question_count, false);
            }
            let correct = option == correct_option;
            if correct {
                flags[question] = true;
            }
            reader.last_answer = Some(AnswerOutcome { question, correct });
            true
        }
    }
}
