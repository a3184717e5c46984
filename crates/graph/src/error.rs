use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while loading a graph. Queries themselves never fail.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid person id on line {line}: {value:?}")]
    InvalidPersonId { line: usize, value: String },
}

impl GraphError {
    pub fn invalid_person_id(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidPersonId {
            line,
            value: value.into(),
        }
    }
}
