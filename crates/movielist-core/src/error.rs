use thiserror::Error;

pub type Result<T> = std::result::Result<T, MovieError>;

#[derive(Debug, Error)]
pub enum MovieError {
    /// Negative or out-of-range year/id passed to an operation
    #[error("{0}")]
    Validation(String),

    #[error("Movie already exists: {title} ({year})")]
    Duplicate { title: String, year: u32 },

    #[error("Movie with ID {0} not found")]
    NotFound(u64),

    #[error("No free movie ID left after {0}")]
    IdsExhausted(u64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MovieError {
    pub fn validation(message: impl Into<String>) -> Self {
        MovieError::Validation(message.into())
    }

    /// Short machine-readable name, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            MovieError::Validation(_) => "validation",
            MovieError::Duplicate { .. } => "duplicate",
            MovieError::NotFound(_) => "not_found",
            MovieError::IdsExhausted(_) => "ids_exhausted",
            MovieError::Io(_) => "io",
            MovieError::Json(_) => "json",
        }
    }
}
