use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Similarity should be in [0,1]: {0}")]
    SimilarityOutOfRange(f64),

    #[error("Number of levels should be greater than one: {0}")]
    TooFewLevels(usize),

    #[error("Cannot normalize an empty vector")]
    EmptyVector,

    #[error("Relevance vector must not be empty")]
    EmptyRelevance,
}
