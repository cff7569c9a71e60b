use super::{AnswerKey, AnswerSet, Answers};

/// Number of questions in `key` answered exactly right.
///
/// A question missing from `answers` counts as answered with the empty set.
pub fn score(answers: &Answers, key: &AnswerKey) -> usize {
    let empty = AnswerSet::new();
    key.iter()
        .filter(|(id, correct)| answers.get(*id).unwrap_or(&empty) == *correct)
        .count()
}

/// Exact set match of `given` against a key entry without duplicates.
pub fn matches(given: Option<&AnswerSet>, correct: &[usize]) -> bool {
    match given {
        Some(set) => set.len() == correct.len() && correct.iter().all(|i| set.contains(i)),
        None => correct.is_empty(),
    }
}
