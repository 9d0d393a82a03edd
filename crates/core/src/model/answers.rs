use std::collections::BTreeMap;

use crate::model::ids::QuestionId;

/// A learner's current selections, keyed by question.
///
/// A question with no entry is unanswered. Selecting again for the same
/// question replaces the earlier choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    selections: BTreeMap<QuestionId, usize>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `option` for `question`, returning the previous choice if any.
    pub fn select(&mut self, question: QuestionId, option: usize) -> Option<usize> {
        self.selections.insert(question, option)
    }

    #[must_use]
    pub fn get(&self, question: QuestionId) -> Option<usize> {
        self.selections.get(&question).copied()
    }

    #[must_use]
    pub fn is_answered(&self, question: QuestionId) -> bool {
        self.selections.contains_key(&question)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, usize)> + '_ {
        self.selections.iter().map(|(id, option)| (*id, *option))
    }
}

impl FromIterator<(QuestionId, usize)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, usize)>>(iter: I) -> Self {
        Self {
            selections: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_replaces_previous_choice() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.select(QuestionId::new(1), 0), None);
        assert_eq!(answers.select(QuestionId::new(1), 2), Some(0));
        assert_eq!(answers.get(QuestionId::new(1)), Some(2));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn unanswered_questions_are_absent() {
        let answers: AnswerSet = [(QuestionId::new(1), 1)].into_iter().collect();
        assert!(answers.is_answered(QuestionId::new(1)));
        assert!(!answers.is_answered(QuestionId::new(2)));
        assert_eq!(answers.get(QuestionId::new(2)), None);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut answers: AnswerSet = [(QuestionId::new(1), 1), (QuestionId::new(2), 0)]
            .into_iter()
            .collect();
        assert_eq!(answers.len(), 2);
        answers.clear();
        assert!(answers.is_empty());
    }
}
