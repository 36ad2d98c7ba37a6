
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaybillError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Data corruption: {message}")]
    DataCorruption { message: String },
}

pub type Result<T> = std::result::Result<T, PlaybillError>;
