use super::{AnswerSet, ChoiceMode};

/// Computes the selection that results from toggling `index`.
///
/// In single-choice mode any toggle replaces the previous selection, so the
/// `included` flag is ignored. The caller guarantees that `index` is within
/// the question's options.
pub fn toggle(current: &AnswerSet, index: usize, included: bool, mode: ChoiceMode) -> AnswerSet {
    match mode {
        ChoiceMode::Single => AnswerSet::from([index]),
        ChoiceMode::Multi => {
            let mut next = current.clone();
            if included {
                next.insert(index);
            } else {
                next.remove(&index);
            }
            next
        }
    }
}
