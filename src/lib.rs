pub mod app;
pub mod config;
pub mod error;
pub mod quiz;
pub mod sampler;
pub mod session;
pub mod ui;

pub use error::QuizError;
