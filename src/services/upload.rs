//! Statement upload service
//!
//! Statement parsing is not implemented. Uploads and card registrations are
//! logged and acknowledged so the calling flow can complete. Deletion works
//! on the statements already held by the ledger.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::models::Statement;
use crate::storage::Ledger;

/// Acknowledgement returned by the upload operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub accepted: bool,
    pub message: String,
}

impl Acknowledgement {
    fn accepted(message: impl Into<String>) -> Self {
        Self {
            accepted: true,
            message: message.into(),
        }
    }
}

/// Service for statements and card registration
pub struct UploadService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> UploadService<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Statements on file, in upload order
    pub fn list_statements(&self) -> &[Statement] {
        &self.ledger.statements
    }

    /// Accept a statement file for a card without reading it
    pub fn upload_statement(&self, card_name: &str, file: &Path) -> Acknowledgement {
        info!(card = card_name, file = %file.display(), "statement upload requested");
        Acknowledgement::accepted(format!(
            "Statement {} queued for {}",
            file.display(),
            card_name
        ))
    }

    /// Accept a new card registration
    pub fn add_card(&self, name: &str) -> Acknowledgement {
        info!(card = name, "card registration requested");
        Acknowledgement::accepted(format!("Card {} added", name.trim()))
    }

    /// Remove the statements with the given ids
    ///
    /// Ids with no matching statement are reported in the message and
    /// otherwise ignored.
    pub fn delete_statements(&mut self, ids: &[String]) -> Acknowledgement {
        let selected: HashSet<&str> = ids.iter().map(|id| id.trim()).collect();
        let mut missing: Vec<&str> = selected
            .iter()
            .copied()
            .filter(|id| !self.ledger.statements.iter().any(|s| s.id == *id))
            .collect();
        missing.sort_unstable();

        let before = self.ledger.statements.len();
        self.ledger
            .statements
            .retain(|s| !selected.contains(s.id.as_str()));
        let removed = before - self.ledger.statements.len();

        info!(removed, requested = selected.len(), "statements deleted");
        if missing.is_empty() {
            return Acknowledgement::accepted(format!("{} statement(s) deleted", removed));
        }

        warn!(missing = ?missing, "delete of unknown statements");
        Acknowledgement::accepted(format!(
            "{} statement(s) deleted; not found: {}",
            removed,
            missing.join(", ")
        ))
    }
}
