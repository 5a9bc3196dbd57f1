use std::process::ExitCode;

use log::error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use quizmaster::app::QuizApp;
use quizmaster::config::UserConfig;
use quizmaster::ui::ConsoleInput;

fn main() -> ExitCode {
    // Warn level keeps the interactive console clean.
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let config_path = UserConfig::default_path();
    let config = UserConfig::load_from(&config_path);

    let mut app = QuizApp::new(config, config_path, ConsoleInput);
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
