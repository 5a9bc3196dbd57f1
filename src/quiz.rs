use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use log::info;
use regex::Regex;

use crate::error::QuizError;
use crate::ui::LineInput;

const CORRECT_MARKER: &str = "-YES";
const WRONG_MARKER: &str = "-NO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: String,
    pub correct: bool,
}

/// One quiz question. The fixed-size options array maps positionally to
/// the presentation letters a, b and c.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: [AnswerOption; 3],
}

fn record_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^;]+(;[^;]*-(YES|NO)){3}$").expect("record pattern is well-formed")
    })
}

/// Structural check for the record line format:
/// `<question>;<answer1>-(YES|NO);<answer2>-(YES|NO);<answer3>-(YES|NO)`.
///
/// Exactly three answer segments, case-sensitive markers, no escaping
/// for `;`. Does not look at the values.
pub fn is_valid_record(line: &str) -> bool {
    record_pattern().is_match(line)
}

/// Splits a record line into a `Question`. Returns `None` when the line
/// does not have the record shape; callers are expected to run
/// [`is_valid_record`] first.
pub fn parse_record(line: &str) -> Option<Question> {
    let mut segments = line.split(';');
    let text = segments.next()?.to_string();

    let mut options = Vec::with_capacity(3);
    for segment in segments {
        let correct = segment.ends_with(CORRECT_MARKER);
        let marker = if correct { CORRECT_MARKER } else { WRONG_MARKER };
        let label = segment.strip_suffix(marker)?.to_string();
        options.push(AnswerOption { label, correct });
    }

    let options: [AnswerOption; 3] = options.try_into().ok()?;
    Some(Question { text, options })
}

/// Anything that can produce a pool of validated questions for a session.
pub trait QuestionSource {
    fn load(&mut self) -> Result<Vec<Question>, QuizError>;
}

/// Loads a whole category file. Every line must be a valid record or the
/// load fails without returning a partial pool.
pub struct FileSource {
    path: PathBuf,
    display_name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, display_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            display_name: display_name.into(),
        }
    }
}

impl QuestionSource for FileSource {
    fn load(&mut self) -> Result<Vec<Question>, QuizError> {
        let contents = fs::read_to_string(&self.path)?;

        let mut pool = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let question = if is_valid_record(line) {
                parse_record(line)
            } else {
                None
            };
            match question {
                Some(question) => pool.push(question),
                None => {
                    return Err(QuizError::InvalidLine {
                        source_name: self.display_name.clone(),
                        line: index + 1,
                    })
                }
            }
        }

        info!("loaded {} questions from {}", pool.len(), self.display_name);
        Ok(pool)
    }
}

/// Collects a fixed number of record lines typed in by the user, asking
/// again for the same line as long as it fails validation.
pub struct InteractiveSource<'a, I: LineInput> {
    count: usize,
    input: &'a mut I,
}

impl<'a, I: LineInput> InteractiveSource<'a, I> {
    pub fn new(count: usize, input: &'a mut I) -> Self {
        Self { count, input }
    }
}

impl<I: LineInput> QuestionSource for InteractiveSource<'_, I> {
    fn load(&mut self) -> Result<Vec<Question>, QuizError> {
        if self.count == 0 {
            return Err(QuizError::invalid_argument(
                "number of questions must be positive",
            ));
        }

        let mut pool = Vec::with_capacity(self.count);
        for number in 1..=self.count {
            loop {
                let line = self
                    .input
                    .prompt_line(&format!("Enter question no. {}", number))?;
                if is_valid_record(&line) {
                    if let Some(question) = parse_record(&line) {
                        pool.push(question);
                        break;
                    }
                }
            }
        }
        Ok(pool)
    }
}
