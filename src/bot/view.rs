use crate::quiz::{AnswerOption, ImageRef, Question, Quiz};
use crate::session::{QuizSession, Screen};

pub const START_BUTTON: &str = "Начать";
pub const SUBMIT_BUTTON: &str = "Ответить";
pub const RESTART_BUTTON: &str = "В главное меню";

const RADIO_ON: &str = "🔘";
const RADIO_OFF: &str = "⚪";
const CHECKBOX_ON: &str = "✅";
const CHECKBOX_OFF: &str = "⬜";

/// What a button press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    /// Flip the selection state of the option with this (zero-based) index.
    Toggle(usize),
    Submit,
    Restart,
}

impl Action {
    /// Option labels are only recognised against `question`, the one on screen.
    pub fn parse(text: &str, question: Option<&Question>) -> Option<Self> {
        match text.trim() {
            START_BUTTON => Some(Action::Start),
            SUBMIT_BUTTON => Some(Action::Submit),
            RESTART_BUTTON => Some(Action::Restart),
            other => parse_option_label(other, question?).map(Action::Toggle),
        }
    }
}

// "✅ 2. США" -> 1, as long as option 2 of the question really is "США"
fn parse_option_label(label: &str, question: &Question) -> Option<usize> {
    let (marker, rest) = label.split_once(' ')?;
    if ![RADIO_ON, RADIO_OFF, CHECKBOX_ON, CHECKBOX_OFF].contains(&marker) {
        return None;
    }
    let (number, _) = rest.split_once('.')?;
    let index = number.trim().parse::<usize>().ok()?.checked_sub(1)?;
    let option = question.options.get(index)?;
    (rest.trim() == option_caption(index, option)).then_some(index)
}

/// A screen ready to be sent: message text, keyboard rows and the pictures
/// that go along with the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub text: String,
    pub buttons: Vec<Vec<String>>,
    pub images: Vec<(String, ImageRef)>,
}

pub fn render(quiz: &Quiz, session: &QuizSession) -> View {
    match session.screen() {
        Screen::MainMenu => View {
            text: quiz.title.to_string(),
            buttons: vec![vec![START_BUTTON.to_string()]],
            images: Vec::new(),
        },
        Screen::Results => View {
            text: format!(
                "Ваш результат: {} из {}",
                session.score(quiz),
                quiz.key_len()
            ),
            buttons: vec![vec![RESTART_BUTTON.to_string()]],
            images: Vec::new(),
        },
        screen => match screen.question_id().and_then(|id| quiz.question(id)) {
            Some(question) => render_question(quiz, question, session),
            None => View {
                text: quiz.title.to_string(),
                buttons: Vec::new(),
                images: Vec::new(),
            },
        },
    }
}

fn render_question(quiz: &Quiz, question: &Question, session: &QuizSession) -> View {
    let hint = if question.is_single_choice() {
        "Выберите один вариант"
    } else {
        "Можно выбрать несколько вариантов"
    };
    let text = format!(
        "Вопрос {} из {}\n\n{}\n\n{}",
        question.id,
        quiz.questions.len(),
        question.prompt,
        hint
    );

    let mut buttons: Vec<Vec<String>> = question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let selected = session.selection().contains(&index);
            vec![option_label(question, index, option, selected)]
        })
        .collect();
    // submitting is only possible with something selected
    if session.can_submit() {
        buttons.push(vec![SUBMIT_BUTTON.to_string()]);
    }

    let images = question
        .options
        .iter()
        .enumerate()
        .filter_map(|(index, option)| match option {
            AnswerOption::Image(image) => Some((option_caption(index, option), *image)),
            AnswerOption::Text(_) => None,
        })
        .collect();

    View {
        text,
        buttons,
        images,
    }
}

fn option_label(question: &Question, index: usize, option: &AnswerOption, selected: bool) -> String {
    let marker = match (question.is_single_choice(), selected) {
        (true, true) => RADIO_ON,
        (true, false) => RADIO_OFF,
        (false, true) => CHECKBOX_ON,
        (false, false) => CHECKBOX_OFF,
    };
    format!("{} {}", marker, option_caption(index, option))
}

fn option_caption(index: usize, option: &AnswerOption) -> String {
    match option {
        AnswerOption::Text(text) => format!("{}. {}", index + 1, text),
        AnswerOption::Image(_) => format!("{}. Вариант {}", index + 1, index + 1),
    }
}
