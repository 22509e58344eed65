use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("weighted draw failed: {0}")]
    WeightedDraw(#[from] rand::distr::weighted::Error),
}
