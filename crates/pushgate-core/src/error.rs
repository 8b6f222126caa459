use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushgateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not inside a git repository: {0}")]
    NotARepository(String),

    #[error("failed to run {program}: {source}")]
    ToolSpawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}
