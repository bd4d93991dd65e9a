use thiserror::Error;

/// Failures raised by the arithmetic layer. Every variant aborts the current
/// operation; no partial enclosure is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("empty interval: infimum exceeds supremum")]
    EmptyInterval,
    #[error("division by an interval containing zero")]
    DivByZero,
    #[error("argument outside the domain of {op}")]
    OutOfDomain { op: &'static str },
    #[error("series degree search in {op} exceeded the factorial bound")]
    SeriesOverflow { op: &'static str },
}

impl ArithmeticError {
    pub(crate) fn domain(op: &'static str) -> Self {
        Self::OutOfDomain { op }
    }

    pub(crate) fn series(op: &'static str) -> Self {
        Self::SeriesOverflow { op }
    }
}

pub type ArithResult<T> = Result<T, ArithmeticError>;
