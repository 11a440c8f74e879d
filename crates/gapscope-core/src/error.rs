/// Errors that can occur in gapscope operations.
#[derive(Debug, thiserror::Error)]
pub enum GapError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid keyword stats: {0}")]
    InvalidStats(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("render error: {0}")]
    Render(String),
}

impl From<std::io::Error> for GapError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
