use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashKeyError {
    #[error("Missing identifier argument")]
    MissingIdentifier,

    #[error("Output error: {0}")]
    Output(String),
}

impl From<std::io::Error> for HashKeyError {
    fn from(err: std::io::Error) -> Self {
        HashKeyError::Output(err.to_string())
    }
}

pub type HashResult<T> = Result<T, HashKeyError>;
