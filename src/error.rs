use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    #[error("\"{0}\" is not a valid number")]
    InvalidNumber(String),
    #[error("missing input")]
    MissingInput,
    #[error("division by zero")]
    DivisionByZero,
}
