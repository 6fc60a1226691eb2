use crate::catalog::CatalogError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid type catalog: {}", .0)]
    Catalog(#[from] CatalogError),
    #[error("Failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Generated artifacts are out of date: {}", .0.join(", "))]
    Stale(Vec<String>),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
