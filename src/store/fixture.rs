// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{PaymentStore, PersistOutcome};
use crate::models::PaymentRecord;

const SEED: &str = include_str!("../../fixtures/payments.json");

enum Source {
    Seed,
    File(PathBuf),
}

/// Seeded working set. Mutations are acknowledged and kept in memory only.
pub struct FixtureStore {
    source: Source,
}

impl FixtureStore {
    pub fn seed() -> Self {
        Self {
            source: Source::Seed,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            source: Source::File(path.as_ref().to_path_buf()),
        }
    }
}

pub fn seed_payments() -> Result<Vec<PaymentRecord>> {
    serde_json::from_str(SEED).context("Built-in payment fixture is invalid")
}

impl PaymentStore for FixtureStore {
    fn load(&self) -> Result<Vec<PaymentRecord>> {
        match &self.source {
            Source::Seed => seed_payments(),
            Source::File(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Read fixture {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid payment fixture {}", path.display()))
            }
        }
    }

    fn persist_mark_paid(&mut self, record: &PaymentRecord) -> Result<PersistOutcome> {
        tracing::debug!(id = %record.id, "fixture store: mark-paid kept in memory");
        Ok(PersistOutcome::Applied)
    }

    fn persist_update(&mut self, record: &PaymentRecord) -> Result<PersistOutcome> {
        tracing::debug!(id = %record.id, "fixture store: update kept in memory");
        Ok(PersistOutcome::Applied)
    }

    fn describe(&self) -> String {
        match &self.source {
            Source::Seed => "built-in fixture".to_string(),
            Source::File(path) => format!("fixture {}", path.display()),
        }
    }
}
