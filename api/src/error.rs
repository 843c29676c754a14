#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode last.fm response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("last.fm returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
