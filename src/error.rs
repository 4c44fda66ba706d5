#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed reading '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
