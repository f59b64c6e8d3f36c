use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub type NavigatorResult<T> = Result<T, NavigatorError>;

impl NavigatorError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, NavigatorError::InvalidInput(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, NavigatorError::IO(_))
    }
}
