use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineageError {
    #[error("no cronjob path found in request")]
    MissingScope,

    #[error("Failed to convert {name} to a job: {source}")]
    Conversion {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to render {name}: {message}")]
    Render { name: String, message: String },

    #[error("List error: {0}")]
    List(String),

    #[error("Listing cancelled")]
    Cancelled,

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LineageError>;
