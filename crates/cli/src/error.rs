// crates/cli/src/error.rs
use thiserror::Error;

/// Failures of the interactive session. Engine failures reach `main` directly.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_error_message() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "Console error: pipe closed");
    }
}
