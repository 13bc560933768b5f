use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON parse error at line {line} column {column}")]
    Parse { line: usize, column: usize },

    #[error("Invalid manifest: {0}")]
    Schema(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Parse { .. } => "PARSE_ERROR",
            Error::Schema(_) => "SCHEMA_ERROR",
            Error::NotFound(_) => "FILE_NOT_FOUND",
            Error::Write(_) => "WRITE_ERROR",
            Error::Json(_) => "JSON_ERROR",
            Error::Io(_) => "IO_ERROR",
        }
    }
}
