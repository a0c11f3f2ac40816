// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod filter;
pub mod session;
pub mod stats;
pub mod transition;

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fmt;

use crate::error::LedgerError;
use crate::models::PaymentRecord;
use filter::{ViewFilter, filter_payments};
use stats::LedgerStats;
use transition::{PaidStamp, RandomReferences, ReferenceSource, StampPolicy, transition_to_paid};

pub const MAX_REFERENCE_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkPaid {
    Transitioned(PaymentRecord),
    /// Record was already paid; nothing changed.
    AlreadyPaid(PaymentRecord),
}

impl MarkPaid {
    pub fn record(&self) -> &PaymentRecord {
        match self {
            MarkPaid::Transitioned(r) | MarkPaid::AlreadyPaid(r) => r,
        }
    }

    pub fn changed(&self) -> bool {
        matches!(self, MarkPaid::Transitioned(_))
    }
}

/// The authoritative in-memory collection of payment records.
pub struct Ledger {
    records: Vec<PaymentRecord>,
    references: Box<dyn ReferenceSource>,
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

impl Ledger {
    pub fn from_records(records: Vec<PaymentRecord>) -> Result<Self, LedgerError> {
        Self::with_references(records, Box::new(RandomReferences))
    }

    pub fn with_references(
        records: Vec<PaymentRecord>,
        references: Box<dyn ReferenceSource>,
    ) -> Result<Self, LedgerError> {
        let mut seen = HashSet::new();
        for r in &records {
            if !seen.insert(r.id.as_str()) {
                return Err(LedgerError::DuplicateId { id: r.id.clone() });
            }
        }
        Ok(Self {
            records,
            references,
        })
    }

    pub fn list(&self) -> &[PaymentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PaymentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn position(&self, id: &str) -> Result<usize, LedgerError> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| LedgerError::not_found(id))
    }

    pub fn stats(&self) -> LedgerStats {
        LedgerStats::compute(&self.records)
    }

    pub fn view(&self, filter: &ViewFilter) -> Vec<&PaymentRecord> {
        filter_payments(&self.records, filter)
    }

    pub fn mark_paid(&mut self, id: &str) -> Result<MarkPaid, LedgerError> {
        self.mark_paid_on(id, Local::now().date_naive())
    }

    pub fn mark_paid_on(&mut self, id: &str, today: NaiveDate) -> Result<MarkPaid, LedgerError> {
        let idx = self.position(id).inspect_err(|_| {
            tracing::warn!(id, "mark-paid ignored: unknown payment");
        })?;
        if self.records[idx].is_paid() {
            tracing::warn!(id, "mark-paid ignored: payment already paid");
            return Ok(MarkPaid::AlreadyPaid(self.records[idx].clone()));
        }
        let stamp = self.paid_stamp(today)?;
        let updated = transition_to_paid(self.records[idx].clone(), stamp, StampPolicy::Replace);
        tracing::info!(
            id,
            reference = updated.reference.as_deref().unwrap_or_default(),
            "payment marked as paid"
        );
        self.records[idx] = updated.clone();
        Ok(MarkPaid::Transitioned(updated))
    }

    /// Replaces the stored record with the same id, verbatim.
    pub fn update(&mut self, record: PaymentRecord) -> Result<(), LedgerError> {
        validate_record(&record)?;
        let idx = self.position(&record.id).inspect_err(|_| {
            tracing::warn!(id = %record.id, "update ignored: unknown payment");
        })?;
        if let Some(holder) = self.reference_holder(&record) {
            let err = LedgerError::DuplicateReference {
                id: record.id.clone(),
                reference: record.reference.clone().unwrap_or_default(),
                holder: holder.to_string(),
            };
            tracing::warn!(id = %record.id, %err, "update rejected");
            return Err(err);
        }
        tracing::debug!(id = %record.id, status = %record.status, "payment updated");
        self.records[idx] = record;
        Ok(())
    }

    /// Puts back a record exactly as it was read from the collection,
    /// undoing a mutation the store refused to take.
    pub fn restore(&mut self, previous: PaymentRecord) -> Result<(), LedgerError> {
        let idx = self.position(&previous.id)?;
        tracing::debug!(id = %previous.id, "payment restored");
        self.records[idx] = previous;
        Ok(())
    }

    /// Id of another record already carrying `record`'s reference.
    fn reference_holder(&self, record: &PaymentRecord) -> Option<&str> {
        let reference = record.reference.as_deref().map(str::trim)?;
        if reference.is_empty() {
            return None;
        }
        self.records
            .iter()
            .filter(|r| r.id != record.id)
            .find(|r| r.reference.as_deref().map(str::trim) == Some(reference))
            .map(|r| r.id.as_str())
    }

    pub fn paid_stamp(&self, today: NaiveDate) -> Result<PaidStamp, LedgerError> {
        Ok(PaidStamp {
            payment_date: today,
            reference: self.fresh_reference(today.year())?,
        })
    }

    /// A reference number not carried by any record in the collection.
    pub fn fresh_reference(&self, year: i32) -> Result<String, LedgerError> {
        for _ in 0..MAX_REFERENCE_ATTEMPTS {
            let candidate = self.references.next_reference(year);
            let taken = self
                .records
                .iter()
                .any(|r| r.reference.as_deref() == Some(candidate.as_str()));
            if !taken {
                return Ok(candidate);
            }
            tracing::debug!(reference = %candidate, "reference collision, retrying");
        }
        Err(LedgerError::ReferenceExhausted {
            attempts: MAX_REFERENCE_ATTEMPTS,
        })
    }
}

/// Checks the paid ⇒ (payment date, reference) rule and the amount sign.
pub fn validate_record(record: &PaymentRecord) -> Result<(), LedgerError> {
    let inconsistent = |reason: &str| LedgerError::Inconsistent {
        id: record.id.clone(),
        reason: reason.to_string(),
    };
    if record.amount <= Decimal::ZERO {
        return Err(inconsistent("amount must be positive"));
    }
    if record.is_paid() {
        if record.payment_date.is_none() {
            return Err(inconsistent("paid without a payment date"));
        }
        if !record.has_reference() {
            return Err(inconsistent("paid without a reference"));
        }
    }
    Ok(())
}
