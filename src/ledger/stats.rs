// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{PaymentRecord, PaymentStatus};

/// Summary-card figures. Always computed over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LedgerStats {
    pub total_all: Decimal,
    pub total_paid: Decimal,
    pub total_pending: Decimal,
    pub pending_count: usize,
    pub paid_count: usize,
    pub record_count: usize,
}

impl LedgerStats {
    pub fn compute(records: &[PaymentRecord]) -> Self {
        let mut stats = LedgerStats {
            record_count: records.len(),
            ..Default::default()
        };
        for r in records {
            stats.total_all += r.amount;
            match r.status {
                PaymentStatus::Paid => {
                    stats.total_paid += r.amount;
                    stats.paid_count += 1;
                }
                PaymentStatus::Pending => {
                    stats.total_pending += r.amount;
                    stats.pending_count += 1;
                }
            }
        }
        stats
    }
}
