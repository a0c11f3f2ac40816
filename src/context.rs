// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::PaymentRecord;
use crate::store::{FixtureStore, HttpStore, PaymentStore, PersistOutcome};

/// Loaded working set plus the store that receives its mutations.
pub struct AppContext {
    pub ledger: Ledger,
    pub store: Box<dyn PaymentStore>,
    pub settings: Settings,
}

impl AppContext {
    /// Remote URL wins over a fixture path; with neither, the built-in seed.
    pub fn open(settings: Settings) -> Result<Self> {
        let store: Box<dyn PaymentStore> = if let Some(url) = settings.remote_url.as_deref() {
            Box::new(HttpStore::new(url)?)
        } else if let Some(path) = settings.fixture_path.as_ref() {
            Box::new(FixtureStore::from_path(path))
        } else {
            Box::new(FixtureStore::seed())
        };
        Self::with_store(settings, store)
    }

    pub fn with_store(settings: Settings, store: Box<dyn PaymentStore>) -> Result<Self> {
        let records = store.load()?;
        let ledger = Ledger::from_records(records)
            .with_context(|| format!("Load payments from {}", store.describe()))?;
        tracing::debug!(count = ledger.len(), source = %store.describe(), "ledger ready");
        Ok(Self {
            ledger,
            store,
            settings,
        })
    }

    /// Undoes a local change after the store failed to take it.
    pub fn restore(&mut self, previous: PaymentRecord) -> Result<()> {
        let id = previous.id.clone();
        self.ledger
            .restore(previous)
            .with_context(|| format!("Restore payment '{}'", id))?;
        tracing::warn!(
            id = %id,
            store = %self.store.describe(),
            "store call failed; change rolled back"
        );
        Ok(())
    }

    /// Store refusals become warnings; the in-memory change stands.
    pub fn report_persist(&self, id: &str, outcome: PersistOutcome) {
        match outcome {
            PersistOutcome::Applied => {}
            PersistOutcome::Missing => tracing::warn!(
                id,
                store = %self.store.describe(),
                "store has no such payment; change kept locally"
            ),
            PersistOutcome::Conflict => tracing::warn!(
                id,
                store = %self.store.describe(),
                "store rejected the change as conflicting; change kept locally"
            ),
        }
    }
}
