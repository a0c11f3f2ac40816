// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Edit-form and detail-view state machines.
//!
//! An [`EditSession`] holds a working copy of one record. Changes touch only
//! the buffer; `save` writes it back through [`Ledger::update`] and `cancel`
//! drops it. Setting the status to paid stamps a missing payment date and
//! reference through the same transition the quick action uses.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use super::Ledger;
use super::transition::{StampPolicy, transition_to_paid};
use crate::error::SessionError;
use crate::models::{PaymentMethod, PaymentRecord, PaymentStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    ReservationId(String),
    UnitName(String),
    PropertyName(String),
    ClientName(String),
    ClientEmail(String),
    ClientPhone(String),
    Amount(Decimal),
    Method(PaymentMethod),
    Status(PaymentStatus),
    ReservationDate(NaiveDate),
    PaymentDate(Option<NaiveDate>),
    Note(Option<String>),
    Reference(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Closed,
    Editing {
        original: PaymentRecord,
        buffer: PaymentRecord,
    },
}

impl EditSession {
    pub fn open(record: &PaymentRecord) -> Self {
        EditSession::Editing {
            original: record.clone(),
            buffer: record.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&PaymentRecord> {
        match self {
            EditSession::Editing { buffer, .. } => Some(buffer),
            EditSession::Closed => None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        match self {
            EditSession::Editing { original, buffer } => original != buffer,
            EditSession::Closed => false,
        }
    }

    pub fn apply(&mut self, change: FieldChange, ledger: &Ledger) -> Result<(), SessionError> {
        self.apply_on(change, ledger, Local::now().date_naive())
    }

    /// The ledger is only consulted for a collision-free reference.
    pub fn apply_on(
        &mut self,
        change: FieldChange,
        ledger: &Ledger,
        today: NaiveDate,
    ) -> Result<(), SessionError> {
        let EditSession::Editing { buffer, .. } = self else {
            return Err(SessionError::NotEditing);
        };
        match change {
            FieldChange::ReservationId(v) => buffer.reservation_id = v,
            FieldChange::UnitName(v) => buffer.unit_name = v,
            FieldChange::PropertyName(v) => buffer.property_name = v,
            FieldChange::ClientName(v) => buffer.client_name = v,
            FieldChange::ClientEmail(v) => buffer.client_email = v,
            FieldChange::ClientPhone(v) => buffer.client_phone = v,
            FieldChange::Amount(v) => buffer.amount = v,
            FieldChange::Method(v) => buffer.method = v,
            FieldChange::ReservationDate(v) => buffer.reservation_date = v,
            FieldChange::PaymentDate(v) => buffer.payment_date = v,
            FieldChange::Note(v) => buffer.note = v,
            FieldChange::Reference(v) => buffer.reference = v,
            FieldChange::Status(PaymentStatus::Pending) => {
                buffer.status = PaymentStatus::Pending;
            }
            FieldChange::Status(PaymentStatus::Paid) => {
                if buffer.payment_date.is_some() && buffer.has_reference() {
                    buffer.status = PaymentStatus::Paid;
                } else {
                    let stamp = ledger.paid_stamp(today)?;
                    *buffer = transition_to_paid(buffer.clone(), stamp, StampPolicy::KeepExisting);
                }
            }
        }
        Ok(())
    }

    /// Drops the buffer and returns it.
    pub fn cancel(&mut self) -> Option<PaymentRecord> {
        match std::mem::take(self) {
            EditSession::Editing { buffer, .. } => Some(buffer),
            EditSession::Closed => None,
        }
    }

    /// Writes the buffer back. On error the session stays open.
    pub fn save(&mut self, ledger: &mut Ledger) -> Result<PaymentRecord, SessionError> {
        let buffer = self.buffer().ok_or(SessionError::NotEditing)?.clone();
        ledger.update(buffer.clone())?;
        *self = EditSession::Closed;
        Ok(buffer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailView {
    #[default]
    Closed,
    Open(PaymentRecord),
}

impl DetailView {
    pub fn open(&mut self, ledger: &Ledger, id: &str) -> Result<&PaymentRecord, SessionError> {
        let record = ledger
            .get(id)
            .ok_or_else(|| crate::error::LedgerError::not_found(id))?;
        *self = DetailView::Open(record.clone());
        match self {
            DetailView::Open(r) => Ok(r),
            DetailView::Closed => Err(SessionError::DetailClosed),
        }
    }

    pub fn record(&self) -> Option<&PaymentRecord> {
        match self {
            DetailView::Open(r) => Some(r),
            DetailView::Closed => None,
        }
    }

    pub fn close(&mut self) {
        *self = DetailView::Closed;
    }

    /// Closes the detail and opens an edit buffer holding the viewed values.
    pub fn open_edit(&mut self) -> Result<EditSession, SessionError> {
        match std::mem::take(self) {
            DetailView::Open(record) => Ok(EditSession::open(&record)),
            DetailView::Closed => Err(SessionError::DetailClosed),
        }
    }
}
