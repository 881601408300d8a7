/// Failures reported by the checked [`BigInt`](crate::BigInt) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::debug!(%msg, "rejecting argument");
        Error::InvalidArgument(msg)
    }

    pub(crate) fn overflow(target: &'static str) -> Self {
        tracing::debug!(target_type = target, "narrowing conversion overflowed");
        Error::Overflow { target }
    }

    pub(crate) fn division_by_zero() -> Self {
        tracing::debug!("rejecting zero divisor");
        Error::DivisionByZero
    }
}
