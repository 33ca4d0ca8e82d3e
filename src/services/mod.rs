//! Service layer for the expense tracker
//!
//! Services wrap a mutable borrow of the [`Ledger`](crate::storage::Ledger)
//! and perform validated edits on it. A rejected operation leaves the ledger
//! exactly as it was.

pub mod category;
pub mod expense;
pub mod merchant;
pub mod upload;

pub use category::CategoryService;
pub use expense::ExpenseService;
pub use merchant::MerchantService;
pub use upload::{Acknowledgement, UploadService};

use crate::error::ExpenseError;
use crate::models::NameListError;

/// Translate a registry rejection into the crate error
pub(crate) fn registry_error(entity_type: &'static str, err: NameListError) -> ExpenseError {
    match err {
        NameListError::Empty => {
            ExpenseError::Validation(format!("{} name cannot be empty", entity_type))
        }
        NameListError::Duplicate(identifier) => ExpenseError::Duplicate {
            entity_type,
            identifier,
        },
        NameListError::Missing(identifier) => ExpenseError::NotFound {
            entity_type,
            identifier,
        },
        NameListError::OutOfRange(index) => ExpenseError::NotFound {
            entity_type,
            identifier: format!("#{}", index),
        },
    }
}
