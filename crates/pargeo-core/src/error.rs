use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeomError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid method on empty object: {0}")]
    EmptyObject(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, GeomError>;
