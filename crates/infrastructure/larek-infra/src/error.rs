#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("shop api returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("order draft incomplete: {0}")]
    IncompleteOrder(&'static str),
}
