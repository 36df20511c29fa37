//! The fixed self-report questionnaire.
//!
//! Ten questions, each answered on the never/sometimes/always scale.
//! Scoring is pure; prompting and input validation are the decision
//! provider's job.

use serde::{Deserialize, Serialize};

use hoardscan_core::{DecisionProvider, QuizAnswer};

/// Number of questions in the quiz.
pub const QUESTION_COUNT: usize = 10;

/// The fixed, ordered question set.
pub const QUIZ_QUESTIONS: [&str; QUESTION_COUNT] = [
    "Do you feel anxious deleting old files?",
    "Do you often save things 'just in case' you might need them later?",
    "Do you have multiple copies of the same document or picture?",
    "Is your desktop cluttered with many files and shortcuts?",
    "Do you find it hard to organize your folders?",
    "Have you ever bought extra storage because you ran out of space?",
    "Do you rarely clean or sort your Downloads folder?",
    "Do you keep old versions of files you don't use anymore?",
    "Do you feel overwhelmed when trying to clean your computer?",
    "Do you avoid deleting things even if you know they're not important?",
];

/// Completed quiz with per-question answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizScore {
    /// Answers in question order.
    pub answers: Vec<QuizAnswer>,
}

impl QuizScore {
    /// Sum of all answer points, in `0..=20`.
    pub fn total(&self) -> u8 {
        self.answers.iter().map(QuizAnswer::points).sum()
    }
}

/// Ask all ten questions through the provider and collect the score.
pub fn run_quiz(provider: &mut dyn DecisionProvider) -> QuizScore {
    let answers = QUIZ_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, question)| provider.quiz_answer(i + 1, question))
        .collect();
    QuizScore { answers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoardscan_core::ScriptedDecisions;

    #[test]
    fn test_all_never_scores_zero() {
        let mut provider = ScriptedDecisions::new();
        let score = run_quiz(&mut provider);
        assert_eq!(score.answers.len(), QUESTION_COUNT);
        assert_eq!(score.total(), 0);
    }

    #[test]
    fn test_all_always_scores_twenty() {
        let mut provider =
            ScriptedDecisions::new().with_answers([QuizAnswer::Always; QUESTION_COUNT]);
        let score = run_quiz(&mut provider);
        assert_eq!(score.total(), 20);
    }

    #[test]
    fn test_mixed_answers_sum() {
        let mut provider = ScriptedDecisions::new().with_answers([
            QuizAnswer::Never,
            QuizAnswer::Sometimes,
            QuizAnswer::Always,
            QuizAnswer::Sometimes,
            QuizAnswer::Never,
            QuizAnswer::Always,
            QuizAnswer::Sometimes,
            QuizAnswer::Never,
            QuizAnswer::Sometimes,
            QuizAnswer::Always,
        ]);
        let score = run_quiz(&mut provider);
        assert_eq!(score.total(), 10);
    }
}
