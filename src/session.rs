use std::io;

use log::debug;

use crate::quiz::Question;
use crate::ui::LineInput;

/// One interactive run through a selection of questions.
#[derive(Debug, Default)]
pub struct QuizSession {
    score: usize,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks every question in order and reports the final score, which
    /// is also returned.
    pub fn run(
        mut self,
        input: &mut impl LineInput,
        questions: &[Question],
    ) -> io::Result<usize> {
        for (index, question) in questions.iter().enumerate() {
            if self.ask(input, question, index + 1)? {
                self.score += 1;
            }
        }
        println!("Achieved score: {}/{}", self.score, questions.len());
        debug!("session finished: {}/{}", self.score, questions.len());
        Ok(self.score)
    }

    fn ask(
        &mut self,
        input: &mut impl LineInput,
        question: &Question,
        number: usize,
    ) -> io::Result<bool> {
        println!("{}. {}", number, question.text);
        for (index, option) in question.options.iter().enumerate() {
            println!("{}) {}", (b'a' + index as u8) as char, option.label);
        }

        let chosen = loop {
            let answer = input.prompt_line("Write a, b or c and press enter:")?;
            match answer.to_lowercase().as_str() {
                "a" => break 0,
                "b" => break 1,
                "c" => break 2,
                _ => {}
            }
        };

        let correct = question.options[chosen].correct;
        println!("{}", if correct { "Correct Answer" } else { "Incorrect Answer" });
        Ok(correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{AnswerOption, Question};
    use crate::ui::ScriptedInput;

    // A question whose correct option sits at the given letter slot.
    fn question(text: &str, correct_at: usize) -> Question {
        let options = [0, 1, 2].map(|i| AnswerOption {
            label: format!("option {}", i),
            correct: i == correct_at,
        });
        Question {
            text: text.to_string(),
            options,
        }
    }

    fn five_questions() -> Vec<Question> {
        (0..5).map(|i| question(&format!("q{}", i), i % 3)).collect()
    }

    #[test]
    fn all_correct_answers_score_full() {
        let questions = five_questions();
        // correct slots cycle a, b, c, a, b
        let mut input = ScriptedInput::new(["a", "b", "c", "a", "b"]);
        let score = QuizSession::new().run(&mut input, &questions).unwrap();
        assert_eq!(score, 5);
        assert!(input.is_empty());
    }

    #[test]
    fn all_wrong_answers_score_zero() {
        let questions = five_questions();
        let mut input = ScriptedInput::new(["b", "c", "a", "b", "c"]);
        let score = QuizSession::new().run(&mut input, &questions).unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn mixed_answers_score_the_correct_ones() {
        let questions = five_questions();
        // first three right, last two wrong
        let mut input = ScriptedInput::new(["a", "b", "c", "b", "c"]);
        let score = QuizSession::new().run(&mut input, &questions).unwrap();
        assert_eq!(score, 3);
    }

    #[test]
    fn answer_letters_are_case_insensitive() {
        let questions = vec![question("q", 1)];
        let mut input = ScriptedInput::new(["B"]);
        assert_eq!(QuizSession::new().run(&mut input, &questions).unwrap(), 1);
    }

    #[test]
    fn invalid_input_reprompts_without_advancing() {
        let questions = vec![question("q", 0)];
        let mut input = ScriptedInput::new(["d", "", "ab", "1", "a"]);
        let score = QuizSession::new().run(&mut input, &questions).unwrap();
        assert_eq!(score, 1);
        // every invalid line was consumed by the retry loop
        assert!(input.is_empty());
    }

    #[test]
    fn empty_selection_scores_zero() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        assert_eq!(QuizSession::new().run(&mut input, &[]).unwrap(), 0);
    }

    #[test]
    fn judgement_follows_the_chosen_option_only() {
        // Permissive format: several options may be marked correct.
        let options = [true, true, false].map(|correct| AnswerOption {
            label: String::from("x"),
            correct,
        });
        let questions = vec![Question {
            text: String::from("q"),
            options,
        }];
        let mut input = ScriptedInput::new(["b"]);
        assert_eq!(QuizSession::new().run(&mut input, &questions).unwrap(), 1);
    }
}
