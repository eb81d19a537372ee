use thiserror::Error;

/// Custom error types for hovertip
#[derive(Debug, Error)]
pub enum HovertipError {
    #[error("Invalid ref target: cannot assign {value} to {target}")]
    InvalidRefTarget { target: String, value: String },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
