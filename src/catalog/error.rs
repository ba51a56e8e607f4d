use std::path::PathBuf;

/// Errors that can occur while building the catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("country data could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("country data contained no sovereign countries")]
    Empty,
}
