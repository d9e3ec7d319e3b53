use thiserror::Error;

pub type PoeResult<T> = Result<T, PoeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoeError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Out of range: {what} = {value} (expected {expected})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        expected: &'static str,
    },
}
