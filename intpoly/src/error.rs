use num_bigint::ParseBigIntError;
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseEvaluationError {
    #[error("expected a non-negative integer, but got an empty string")]
    Empty,

    #[error("expected a non-negative integer, but got `{0}`")]
    Negative(String),

    #[error("unexpected character `{0}` in integer")]
    UnexpectedCharacter(char),

    #[error("invalid integer")]
    Invalid(#[source] ParseBigIntError),
}
