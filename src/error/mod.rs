use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read or write ledger data")]
    IoError(#[from] std::io::Error),
    #[error("could not convert CSV rows to expenses")]
    CsvError(#[from] csv::Error),
    #[error(transparent)]
    BusinessError(#[from] crate::domain::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
