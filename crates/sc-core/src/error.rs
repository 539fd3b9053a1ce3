use thiserror::Error;

pub type ScResult<T> = Result<T, ScError>;

#[derive(Error, Debug)]
pub enum ScError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}
