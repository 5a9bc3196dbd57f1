use std::io::{self, Write};

use crate::config::Category;

/// Source of single lines of user input. The interactive program reads
/// from stdin; tests script the lines instead.
pub trait LineInput {
    /// Prints `message`, then blocks for exactly one line of input.
    fn prompt_line(&mut self, message: &str) -> io::Result<String>;
}

pub struct ConsoleInput;

impl LineInput for ConsoleInput {
    fn prompt_line(&mut self, message: &str) -> io::Result<String> {
        println!("{}", message);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Quit,
}

/// Shows the main menu and prompts until the user picks `s` or `q`.
pub fn main_menu_choice(input: &mut impl LineInput) -> io::Result<MenuChoice> {
    println!("s) start");
    println!("q) quit");
    loop {
        match input.prompt_line("Write s or q and press enter:")?.as_str() {
            "s" => return Ok(MenuChoice::Start),
            "q" => return Ok(MenuChoice::Quit),
            _ => {}
        }
    }
}

/// Shows the category menu and prompts until the user picks one of the
/// configured category keys.
pub fn category_menu_choice<'a>(
    input: &mut impl LineInput,
    categories: &'a [Category],
) -> io::Result<&'a Category> {
    println!("Categories:");
    for category in categories {
        println!("{}) {}", category.key, category.name);
    }

    let message = format!("Write {} and press enter:", key_list(categories));
    loop {
        let choice = input.prompt_line(&message)?;
        if let Some(category) = categories.iter().find(|c| c.key == choice) {
            return Ok(category);
        }
    }
}

// "a, b, c or d" for the prompt message.
fn key_list(categories: &[Category]) -> String {
    let keys: Vec<&str> = categories.iter().map(|c| c.key.as_str()).collect();
    match keys.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
impl LineInput for ScriptedInput {
    fn prompt_line(&mut self, _message: &str) -> io::Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }
}
