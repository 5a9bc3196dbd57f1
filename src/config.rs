use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Letter the category menu accepts for this entry.
    pub key: String,
    pub name: String,
    /// File name under `question_dir`.
    pub file: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserConfig {
    pub question_dir: PathBuf,
    #[serde(default = "default_questions_per_quiz")]
    pub questions_per_quiz: usize,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub history: Vec<(String, i64)>,
}

fn default_questions_per_quiz() -> usize {
    5
}

fn default_categories() -> Vec<Category> {
    ["film", "geography", "history", "science"]
        .iter()
        .enumerate()
        .map(|(index, name)| Category {
            key: ((b'a' + index as u8) as char).to_string(),
            name: (*name).to_string(),
            file: (*name).to_string(),
        })
        .collect()
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            question_dir: PathBuf::from("files"),
            questions_per_quiz: default_questions_per_quiz(),
            categories: default_categories(),
            history: Vec::new(),
        }
    }
}

impl UserConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("quizmaster").join("config.json"))
            .unwrap_or_else(|| PathBuf::from("quizmaster.json"))
    }

    /// Missing or unreadable config falls back to the defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), QuizError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents =
            serde_json::to_string_pretty(self).map_err(|e| QuizError::Config(e.to_string()))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Moves `category` to the front of the played-category history,
    /// keeping at most the 10 most recent entries.
    pub fn update_history(&mut self, category: &str) {
        let timestamp = chrono::Utc::now().timestamp();
        self.history.retain(|(name, _)| name != category);
        self.history.insert(0, (category.to_string(), timestamp));
        if self.history.len() > 10 {
            self.history.truncate(10);
        }
    }
}
