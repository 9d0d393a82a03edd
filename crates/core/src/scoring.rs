use crate::model::{AnswerSet, PassThreshold, Question, ScoreResult};

//
// ─── EVALUATOR ─────────────────────────────────────────────────────────────────
//

/// Scores answer sets against a fixed answer key.
///
/// Evaluation is a pure function of the questions and the answers: the
/// evaluator holds nothing but its pass threshold, so repeated calls with
/// the same inputs always produce the same `ScoreResult`.
///
/// # Examples
///
/// ```
/// # use academy_core::model::{AnswerSet, Question, QuestionId};
/// # use academy_core::scoring::QuizEvaluator;
/// let options = || vec!["yes".to_string(), "no".to_string()];
/// let questions = vec![
///     Question::new(QuestionId::new(1), "First?", options(), 0).unwrap(),
///     Question::new(QuestionId::new(2), "Second?", options(), 1).unwrap(),
/// ];
/// let answers: AnswerSet = [(QuestionId::new(1), 0), (QuestionId::new(2), 1)]
///     .into_iter()
///     .collect();
///
/// let result = QuizEvaluator::default().evaluate(&questions, &answers);
/// assert_eq!(result.percentage(), 100);
/// assert!(result.passed());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizEvaluator {
    threshold: PassThreshold,
}

impl QuizEvaluator {
    #[must_use]
    pub fn new(threshold: PassThreshold) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> PassThreshold {
        self.threshold
    }

    /// Score `answers` against `questions`.
    ///
    /// A question with no entry in `answers` counts as incorrect, as does an
    /// entry that names an option the question does not have.
    #[must_use]
    pub fn evaluate(&self, questions: &[Question], answers: &AnswerSet) -> ScoreResult {
        evaluate_with_threshold(questions, answers, self.threshold)
    }
}

/// Score with the default 70% threshold.
#[must_use]
pub fn evaluate(questions: &[Question], answers: &AnswerSet) -> ScoreResult {
    evaluate_with_threshold(questions, answers, PassThreshold::default())
}

#[must_use]
pub fn evaluate_with_threshold(
    questions: &[Question],
    answers: &AnswerSet,
    threshold: PassThreshold,
) -> ScoreResult {
    let correct = questions
        .iter()
        .filter(|q| answers.get(q.id()).is_some_and(|choice| q.is_correct(choice)))
        .count();

    let total = u32::try_from(questions.len()).unwrap_or(u32::MAX);
    let correct = u32::try_from(correct).unwrap_or(total);
    ScoreResult::from_counts(correct, total, threshold)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;

    fn question(id: u64, correct: usize) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Question {id}"),
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
        )
        .unwrap()
    }

    fn sales_quiz() -> Vec<Question> {
        vec![question(1, 1), question(2, 1), question(3, 2)]
    }

    fn answers(pairs: &[(u64, usize)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(id, option)| (QuestionId::new(*id), *option))
            .collect()
    }

    #[test]
    fn all_correct_scores_hundred_and_passes() {
        let result = evaluate(&sales_quiz(), &answers(&[(1, 1), (2, 1), (3, 2)]));
        assert_eq!(result.percentage(), 100);
        assert!(result.passed());
        assert_eq!(result.correct(), 3);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn two_of_three_rounds_to_sixty_seven_and_fails() {
        let result = evaluate(&sales_quiz(), &answers(&[(1, 0), (2, 1), (3, 2)]));
        assert_eq!(result.percentage(), 67);
        assert!(!result.passed());
    }

    #[test]
    fn none_correct_scores_zero() {
        let result = evaluate(&sales_quiz(), &answers(&[(1, 0), (2, 0), (3, 0)]));
        assert_eq!(result.percentage(), 0);
        assert!(!result.passed());
    }

    #[test]
    fn missing_answers_count_as_incorrect() {
        let result = evaluate(&sales_quiz(), &answers(&[(1, 1)]));
        assert_eq!(result.correct(), 1);
        assert_eq!(result.percentage(), 33);
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let result = evaluate(&sales_quiz(), &answers(&[(1, 1), (2, 1), (3, 2), (99, 0)]));
        assert_eq!(result.correct(), 3);
        assert_eq!(result.percentage(), 100);
    }

    #[test]
    fn empty_question_list_scores_zero() {
        let result = evaluate(&[], &AnswerSet::new());
        assert_eq!(result.percentage(), 0);
        assert_eq!(result.total(), 0);
        assert!(!result.passed());
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let questions = vec![question(1, 0), question(2, 0), question(3, 0), question(4, 0)];
        let given = answers(&[(1, 0), (2, 0), (3, 0), (4, 1)]);

        let at_75 = QuizEvaluator::new(PassThreshold::new(75).unwrap());
        let result = at_75.evaluate(&questions, &given);
        assert_eq!(result.percentage(), 75);
        assert!(result.passed());

        let at_76 = QuizEvaluator::new(PassThreshold::new(76).unwrap());
        assert!(!at_76.evaluate(&questions, &given).passed());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let evaluator = QuizEvaluator::default();
        let questions = sales_quiz();
        let given = answers(&[(1, 0), (2, 1), (3, 2)]);
        let first = evaluator.evaluate(&questions, &given);
        let second = evaluator.evaluate(&questions, &given);
        assert_eq!(first, second);
    }

    #[test]
    fn percentage_stays_in_range_across_sizes() {
        for total in 1..=25_u64 {
            let questions: Vec<Question> = (1..=total).map(|id| question(id, 0)).collect();
            for correct in 0..=total {
                let given: AnswerSet = (1..=total)
                    .map(|id| (QuestionId::new(id), usize::from(id > correct)))
                    .collect();
                let result = evaluate(&questions, &given);
                assert!(result.percentage() <= 100);
                assert_eq!(u64::from(result.correct()), correct);
                assert_eq!(result.passed(), result.percentage() >= 70);
            }
        }
    }
}
