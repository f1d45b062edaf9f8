use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum CgpaError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("unsupported transcript format: {0}")]
    UnsupportedFormat(String),

    #[error("transcript parse error: {0}")]
    TranscriptParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("refusing to overwrite existing file: {0}")]
    AlreadyExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CgpaError>;
