use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed line {line}: expected at least two tab-separated fields, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Invalid document frequency on line {line}: {value:?}")]
    InvalidFrequency { line: usize, value: String },
}
