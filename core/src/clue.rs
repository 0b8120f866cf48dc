use alloc::string::String;

use crate::*;

/// Per-clue reveal progress. Only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Answer as shown to players: the catalog escapes quotes with literal
    /// backslashes.
    pub fn display_answer(&self) -> String {
        self.answer.replace('\\', "")
    }

    /// What the cell currently shows, `None` while the clue is still hidden.
    pub fn display(&self) -> Option<(String, StyleHint)> {
        use RevealState::*;
        match self.state {
            Hidden => None,
            Question => Some((self.question.clone(), StyleHint::Default)),
            Answer => Some((self.display_answer(), StyleHint::Emphasized)),
        }
    }

    pub(crate) fn reveal(&mut self) -> RevealOutcome {
        use RevealState::*;
        match self.state {
            Hidden => {
                self.state = Question;
                RevealOutcome::ShowQuestion(self.question.clone())
            }
            Question => {
                self.state = Answer;
                RevealOutcome::ShowAnswer(self.display_answer())
            }
            Answer => RevealOutcome::NoChange,
        }
    }
}

impl From<cluegrid_protocol::ClueRecord> for Clue {
    fn from(record: cluegrid_protocol::ClueRecord) -> Self {
        Self::new(record.question, record.answer)
    }
}
