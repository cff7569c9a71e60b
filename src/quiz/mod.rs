pub mod history;
pub mod score;
pub mod toggle;

use std::collections::{BTreeMap, BTreeSet};

pub type QuestionId = u32;
pub type AnswerSet = BTreeSet<usize>;
pub type Answers = BTreeMap<QuestionId, AnswerSet>;
pub type AnswerKey = BTreeMap<QuestionId, AnswerSet>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(pub &'static str);

impl ImageRef {
    pub fn name(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOption {
    Text(&'static str),
    Image(ImageRef),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMode {
    Single,
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
    pub mode: ChoiceMode,
}

impl Question {
    pub const fn new(
        id: QuestionId,
        prompt: &'static str,
        options: &'static [AnswerOption],
        mode: ChoiceMode,
    ) -> Self {
        Self {
            id,
            prompt,
            options,
            mode,
        }
    }

    pub fn is_single_choice(&self) -> bool {
        self.mode == ChoiceMode::Single
    }

    pub fn has_option(&self, index: usize) -> bool {
        index < self.options.len()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Quiz {
    pub title: &'static str,
    pub questions: &'static [Question],
    key: &'static [(QuestionId, &'static [usize])],
}

impl Quiz {
    pub const fn new(
        title: &'static str,
        questions: &'static [Question],
        key: &'static [(QuestionId, &'static [usize])],
    ) -> Self {
        Self {
            title,
            questions,
            key,
        }
    }

    pub fn question(&self, id: QuestionId) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn answer_key(&self) -> AnswerKey {
        self.key
            .iter()
            .map(|(id, correct)| (*id, correct.iter().copied().collect()))
            .collect()
    }

    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    pub fn score(&self, answers: &Answers) -> usize {
        self.key
            .iter()
            .filter(|(id, correct)| score::matches(answers.get(id), correct))
            .count()
    }
}
