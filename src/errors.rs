use std::fmt;

use crate::ingredient::{Drink, Ingredient};

#[derive(Debug, PartialEq)]
pub enum VendingMachineError {
    InsufficientMaterial {
        drink: Drink,
        ingredient: Ingredient,
        remaining: f64,
    },
    LockError,
    FileReaderError,
    UnknownDrink,
    InvalidQuantity,
}

impl fmt::Display for VendingMachineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VendingMachineError::InsufficientMaterial {
                drink,
                ingredient,
                remaining,
            } => write!(
                f,
                "not enough {} for {}, {} would remain",
                ingredient, drink, remaining
            ),
            VendingMachineError::LockError => write!(f, "error while taking a lock"),
            VendingMachineError::FileReaderError => write!(f, "error while reading a file"),
            VendingMachineError::UnknownDrink => write!(f, "drink not in the catalog"),
            VendingMachineError::InvalidQuantity => write!(f, "invalid quantity"),
        }
    }
}

impl std::error::Error for VendingMachineError {}

impl<T> From<std::sync::PoisonError<T>> for VendingMachineError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        VendingMachineError::LockError
    }
}
