use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid base '{base}' in motif {motif}")]
    InvalidBase { base: char, motif: String },

    #[error("Motif must contain at least one base")]
    EmptyMotif,

    #[error("Failed to compile motif pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Malformed sequence {id}: {reason}")]
    MalformedSequence { id: String, reason: String },

    #[error("File does not exist or is unreadable: {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to render image: {0}")]
    Render(String),

    #[error("Failed to initialize thread pool: {0}")]
    ThreadPool(String),
}

pub fn handle_error_and_exit(err: Error) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
