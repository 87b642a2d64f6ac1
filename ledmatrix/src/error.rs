use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("pixel ({row}, {col}) is outside the 8x16 grid")]
    OutOfRange { row: usize, col: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Parse(String),

    #[error("'{0}' is not a valid C identifier")]
    InvalidName(String),
}
