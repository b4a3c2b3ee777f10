use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkshopError {
    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error("business owner not found: {0}")]
    OwnerNotFound(String),

    #[error("invalid product name '{0}': must contain at least one letter or digit")]
    InvalidProductName(String),

    #[error("invalid backup: {0}")]
    InvalidBackup(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, WorkshopError>;
