use miette::Diagnostic;
use thiserror::Error;

/// Main error type for blocks operations
#[derive(Error, Diagnostic, Debug)]
pub enum BlocksError {
    #[error("IO error: {0}")]
    #[diagnostic(code(blocks::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(blocks::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(blocks::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(blocks::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(blocks::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Check failed: {message}")]
    #[diagnostic(code(blocks::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BlocksError>;
