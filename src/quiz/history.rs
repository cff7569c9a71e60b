use super::{AnswerOption, ChoiceMode, ImageRef, Question, QuestionId, Quiz};

const EVENTS_OF_1492: [AnswerOption; 3] = [
    AnswerOption::Text("Открытие Америки Христофором Колумбом"),
    AnswerOption::Text("Завершение Реконкисты в Испании"),
    AnswerOption::Text("Начало Французской революции"),
];

const ALLIES: [AnswerOption; 3] = [
    AnswerOption::Text("СССР"),
    AnswerOption::Text("Германия"),
    AnswerOption::Text("США"),
];

const PORTRAITS: [AnswerOption; 3] = [
    AnswerOption::Image(ImageRef("alex_makedon")),
    AnswerOption::Image(ImageRef("petr1")),
    AnswerOption::Image(ImageRef("rasputin")),
];

static QUESTIONS: [Question; 3] = [
    Question::new(
        1,
        "Какие два события произошли в 1492 году?",
        &EVENTS_OF_1492,
        ChoiceMode::Multi,
    ),
    Question::new(
        2,
        "Какие из перечисленных стран входили в антигитлеровскую коалицию во время Второй мировой войны?",
        &ALLIES,
        ChoiceMode::Multi,
    ),
    Question::new(3, "Выберите изображение Петра 1", &PORTRAITS, ChoiceMode::Single),
];

static ANSWER_KEY: [(QuestionId, &[usize]); 3] = [(1, &[0, 1]), (2, &[0, 2]), (3, &[1])];

/// The history test.
pub static HISTORY_QUIZ: Quiz = Quiz::new("Тест по истории", &QUESTIONS, &ANSWER_KEY);
