//! Construction-time validation errors

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("simulation needs at least one country")]
    EmptyWorld,

    #[error("country {0} is listed more than once")]
    DuplicateCountry(String),

    #[error("country {code} has coordinates out of range ({lat}, {lng})")]
    InvalidCoordinates { code: String, lat: f64, lng: f64 },
}
