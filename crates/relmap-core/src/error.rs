pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("service response JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("relationship service error: {message}")]
    Service { message: String },

    #[error("unknown model `{name}` (expected 80Bmodel, 7Bmodel or DeepSeek)")]
    UnknownModel { name: String },
}
