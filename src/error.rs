use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// A caller bug: empty pools, out-of-range sample sizes and the like.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A file-backed source contained a line that does not match the
    /// record format. Loading stops at the first offender.
    #[error("Incorrect line in the file: {source_name} Line number: {line}")]
    InvalidLine { source_name: String, line: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QuizError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        QuizError::InvalidArgument(message.into())
    }
}
