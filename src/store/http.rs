// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::json;

use super::{PaymentStore, PersistOutcome};
use crate::models::PaymentRecord;
use crate::utils::http_client;

/// Remote payments API.
///
/// `GET {base}/payments` loads, `PATCH {base}/payments/{id}` records a
/// mark-paid, `PUT {base}/payments/{id}` replaces a full record. A 404 or
/// 409 comes back as an outcome, not an error.
pub struct HttpStore {
    base: String,
    client: Client,
}

impl HttpStore {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/').to_string();
        if base.is_empty() {
            return Err(anyhow!("Remote payments URL is empty"));
        }
        Ok(Self {
            base,
            client: http_client()?,
        })
    }

    fn payment_url(&self, id: &str) -> String {
        format!("{}/payments/{}", self.base, id)
    }
}

pub fn outcome_for_status(status: StatusCode) -> Result<PersistOutcome> {
    if status.is_success() {
        return Ok(PersistOutcome::Applied);
    }
    match status {
        StatusCode::NOT_FOUND => Ok(PersistOutcome::Missing),
        StatusCode::CONFLICT => Ok(PersistOutcome::Conflict),
        other => Err(anyhow!("Payments API answered {}", other)),
    }
}

impl PaymentStore for HttpStore {
    fn load(&self) -> Result<Vec<PaymentRecord>> {
        let url = format!("{}/payments", self.base);
        let resp = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("GET {}", url))?
            .error_for_status()
            .with_context(|| format!("GET {}", url))?;
        let records: Vec<PaymentRecord> = resp
            .json()
            .with_context(|| format!("Invalid payments payload from {}", url))?;
        tracing::info!(count = records.len(), url = %url, "loaded payments");
        Ok(records)
    }

    fn persist_mark_paid(&mut self, record: &PaymentRecord) -> Result<PersistOutcome> {
        let url = self.payment_url(&record.id);
        let body = json!({
            "status": record.status,
            "payment_date": record.payment_date,
            "reference": record.reference,
        });
        let resp = self
            .client
            .patch(&url)
            .json(&body)
            .send()
            .with_context(|| format!("PATCH {}", url))?;
        outcome_for_status(resp.status())
    }

    fn persist_update(&mut self, record: &PaymentRecord) -> Result<PersistOutcome> {
        let url = self.payment_url(&record.id);
        let resp = self
            .client
            .put(&url)
            .json(record)
            .send()
            .with_context(|| format!("PUT {}", url))?;
        outcome_for_status(resp.status())
    }

    fn describe(&self) -> String {
        format!("remote {}", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            outcome_for_status(StatusCode::OK).unwrap(),
            PersistOutcome::Applied
        );
        assert_eq!(
            outcome_for_status(StatusCode::NO_CONTENT).unwrap(),
            PersistOutcome::Applied
        );
        assert_eq!(
            outcome_for_status(StatusCode::NOT_FOUND).unwrap(),
            PersistOutcome::Missing
        );
        assert_eq!(
            outcome_for_status(StatusCode::CONFLICT).unwrap(),
            PersistOutcome::Conflict
        );
        assert!(outcome_for_status(StatusCode::INTERNAL_SERVER_ERROR).is_err());
    }

    #[test]
    fn base_url_is_normalised() {
        let store = HttpStore::new(" http://localhost:8080/api/ ").unwrap();
        assert_eq!(
            store.payment_url("PAG-001"),
            "http://localhost:8080/api/payments/PAG-001"
        );
        assert!(HttpStore::new("   ").is_err());
    }
}
