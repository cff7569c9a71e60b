use serde::{Deserialize, Serialize};

use crate::quiz::{toggle::toggle, AnswerSet, Answers, QuestionId, Quiz};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    MainMenu,
    Question1,
    Question2,
    Question3,
    Results,
}

impl Screen {
    pub fn question_id(self) -> Option<QuestionId> {
        match self {
            Screen::Question1 => Some(1),
            Screen::Question2 => Some(2),
            Screen::Question3 => Some(3),
            Screen::MainMenu | Screen::Results => None,
        }
    }

    pub fn is_question(self) -> bool {
        self.question_id().is_some()
    }

    fn after_submit(self) -> Option<Screen> {
        match self {
            Screen::Question1 => Some(Screen::Question2),
            Screen::Question2 => Some(Screen::Question3),
            Screen::Question3 => Some(Screen::Results),
            Screen::MainMenu | Screen::Results => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Screen, to: Screen },
    Selected,
    // nothing changed
    Ignored,
}

/// One user's pass through the quiz, stored as the dialogue state of a chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    screen: Screen,
    answers: Answers,
    // not yet submitted
    selection: AnswerSet,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn selection(&self) -> &AnswerSet {
        &self.selection
    }

    pub fn can_submit(&self) -> bool {
        self.screen.is_question() && !self.selection.is_empty()
    }

    pub fn on_start(&mut self) -> Transition {
        if self.screen != Screen::MainMenu {
            return Transition::Ignored;
        }
        self.move_to(Screen::Question1)
    }

    pub fn on_toggle(
        &mut self,
        quiz: &Quiz,
        question_id: QuestionId,
        option_index: usize,
        included: bool,
    ) -> Transition {
        if self.screen.question_id() != Some(question_id) {
            return Transition::Ignored;
        }
        let Some(question) = quiz.question(question_id) else {
            return Transition::Ignored;
        };
        if !question.has_option(option_index) {
            return Transition::Ignored;
        }

        self.selection = toggle(&self.selection, option_index, included, question.mode);
        Transition::Selected
    }

    pub fn on_submit(&mut self) -> Transition {
        let (Some(id), Some(next)) = (self.screen.question_id(), self.screen.after_submit()) else {
            return Transition::Ignored;
        };
        if self.selection.is_empty() {
            return Transition::Ignored;
        }

        let selection = std::mem::take(&mut self.selection);
        self.answers.insert(id, selection);
        self.move_to(next)
    }

    pub fn on_restart(&mut self) -> Transition {
        if self.screen != Screen::Results {
            return Transition::Ignored;
        }
        self.answers.clear();
        self.selection.clear();
        self.move_to(Screen::MainMenu)
    }

    pub fn score(&self, quiz: &Quiz) -> usize {
        quiz.score(&self.answers)
    }

    fn move_to(&mut self, to: Screen) -> Transition {
        let from = self.screen;
        self.screen = to;
        Transition::Moved { from, to }
    }
}
