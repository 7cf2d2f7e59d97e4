use thiserror::Error;

pub type VizResult<T> = Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("invalid scale: {0}")]
    InvalidScale(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
