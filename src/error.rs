pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Failures the fallback orchestrator is allowed to absorb: anything that
    /// went wrong between us and the backend. Local signals like `NotFound`
    /// or `Validation` must keep propagating.
    pub fn is_fallback_eligible(&self) -> bool {
        matches!(
            self,
            Error::Http { .. } | Error::Transport(_) | Error::Json(_)
        )
    }
}
