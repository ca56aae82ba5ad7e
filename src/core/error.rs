use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("movement catalog error: {0}")]
    Catalog(#[from] crate::actions::loader::CatalogError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
