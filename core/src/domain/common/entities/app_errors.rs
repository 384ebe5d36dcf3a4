use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Not allowed for this household")]
    Forbidden,

    #[error("Household not found")]
    InvalidHousehold,

    #[error("Stock changed while it was being reconciled")]
    StaleStock,

    #[error("Internal server error")]
    InternalServerError,
}
