// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Payment '{id}' not found")]
    NotFound { id: String },

    #[error("Payment '{id}' is inconsistent: {reason}")]
    Inconsistent { id: String, reason: String },

    #[error("Duplicate payment id '{id}'")]
    DuplicateId { id: String },

    #[error("Reference '{reference}' on payment '{id}' is already used by '{holder}'")]
    DuplicateReference {
        id: String,
        reference: String,
        holder: String,
    },

    #[error("Could not generate a unique reference after {attempts} attempts")]
    ReferenceExhausted { attempts: usize },
}

impl LedgerError {
    pub fn not_found(id: &str) -> Self {
        LedgerError::NotFound { id: id.to_string() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No payment is being edited")]
    NotEditing,

    #[error("No payment detail is open")]
    DetailClosed,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid date format '{0}'")]
    DateFormat(String),
}
