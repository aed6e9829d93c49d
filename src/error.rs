use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreelineError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a repository")]
    NotARepository,

    #[error("Invalid revision: {0}")]
    InvalidRevision(String),

    #[error("No changes to show")]
    NoChanges,
}

pub type Result<T> = std::result::Result<T, TreelineError>;
