use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("MySQL error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
