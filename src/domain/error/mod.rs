use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("amount {input:?} is not a numeric value")]
    InvalidAmount { input: String },
    #[error("amount {input:?} is beyond the largest accepted amount")]
    AmountTooLarge { input: String },
    #[error("total for {group:?} does not fit in a decimal")]
    TotalOverflow { group: String },
}

impl Error {
    /// Message shown to the user when an operation is abandoned.
    pub fn warning(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "Invalid amount. Please enter a numeric value.",
            Self::AmountTooLarge { .. } => "Amount is too large. Please enter a smaller value.",
            Self::TotalOverflow { .. } => "Totals are too large to summarize.",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
