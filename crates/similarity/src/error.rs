use thiserror::Error;

/// Errors raised while building or querying a vector space
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorSpaceError {
    #[error("Corpus has no tokens")]
    EmptyCorpus,

    #[error("max_features must be at least 1")]
    InvalidMaxFeatures,

    #[error("Row {index} out of range for {len} rows")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, VectorSpaceError>;
