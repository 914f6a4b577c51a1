use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::ItemId;

/// Failures raised while validating operator input against the stock.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid price!!")]
    NegativePrice,
    #[error("Invalid quantity!!")]
    NegativeQuantity,
    #[error("Invalid Item ID")]
    InvalidItemId(usize),
    #[error("'{0}' already exists in stock!")]
    DuplicateName(String),
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Item {0} is not in stock")]
    UnknownItem(ItemId),
}

/// Unified error type for the domain and service layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StockError {
    #[error("Invalid input!!")]
    InputFormat(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = StdResult<T, StockError>;

/// Fatal shell error; anything else is reported and the shell keeps going.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_operator_wording() {
        assert_eq!(
            StockError::InputFormat("abc".into()).to_string(),
            "Invalid input!!"
        );
        assert_eq!(
            StockError::from(ValidationError::InvalidItemId(9)).to_string(),
            "Invalid Item ID"
        );
        assert_eq!(
            ValidationError::DuplicateName("Rice".into()).to_string(),
            "'Rice' already exists in stock!"
        );
    }
}
