use std::path::PathBuf;

use log::{info, warn};
use rand::thread_rng;

use crate::config::UserConfig;
use crate::error::QuizError;
use crate::quiz::{FileSource, QuestionSource};
use crate::sampler::sample;
use crate::session::QuizSession;
use crate::ui::{category_menu_choice, main_menu_choice, LineInput, MenuChoice};

/// Menu loop around the quiz core: main menu, category menu, one quiz
/// round per start, back to the main menu until the user quits.
pub struct QuizApp<I: LineInput> {
    config: UserConfig,
    config_path: PathBuf,
    input: I,
}

impl<I: LineInput> QuizApp<I> {
    pub fn new(config: UserConfig, config_path: PathBuf, input: I) -> Self {
        Self {
            config,
            config_path,
            input,
        }
    }

    /// Runs until the user quits. A malformed or unreadable category
    /// file aborts the whole run; interactive input mistakes never do.
    pub fn run(&mut self) -> Result<(), QuizError> {
        loop {
            match main_menu_choice(&mut self.input)? {
                MenuChoice::Start => self.play_round()?,
                MenuChoice::Quit => return Ok(()),
            }
        }
    }

    fn play_round(&mut self) -> Result<(), QuizError> {
        let category = category_menu_choice(&mut self.input, &self.config.categories)?.clone();
        let path = self.config.question_dir.join(&category.file);

        let pool = FileSource::new(path, category.name.clone()).load()?;
        let selection = sample(&pool, self.config.questions_per_quiz, &mut thread_rng())?;
        let score = QuizSession::new().run(&mut self.input, &selection)?;
        info!(
            "{} quiz finished with score {}/{}",
            category.name,
            score,
            selection.len()
        );

        self.config.update_history(&category.name);
        if let Err(err) = self.config.save_to(&self.config_path) {
            warn!("could not save config: {}", err);
        }
        Ok(())
    }
}
