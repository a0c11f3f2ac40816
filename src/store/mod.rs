// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Where the ledger's records come from and where its mutations go.

pub mod fixture;
pub mod http;

use anyhow::Result;
use serde::Serialize;

use crate::models::PaymentRecord;

pub use fixture::FixtureStore;
pub use http::HttpStore;

/// What the backing store did with a persisted mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersistOutcome {
    Applied,
    /// The store has no record with that id.
    Missing,
    /// The store refused the change, e.g. the record was already paid there.
    Conflict,
}

pub trait PaymentStore {
    /// Initial collection, in display order.
    fn load(&self) -> Result<Vec<PaymentRecord>>;

    fn persist_mark_paid(&mut self, record: &PaymentRecord) -> Result<PersistOutcome>;

    fn persist_update(&mut self, record: &PaymentRecord) -> Result<PersistOutcome>;

    fn describe(&self) -> String;
}
