// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use std::str::FromStr;

use crate::models::{PaymentMethod, PaymentRecord, PaymentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    All,
    Pending,
    Paid,
}

impl Tab {
    fn admits(&self, status: PaymentStatus) -> bool {
        match self {
            Tab::All => true,
            Tab::Pending => status == PaymentStatus::Pending,
            Tab::Paid => status == PaymentStatus::Paid,
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Tab::All),
            "pending" => Ok(Tab::Pending),
            "paid" => Ok(Tab::Paid),
            other => Err(format!("Unknown tab '{}' (use all|pending|paid)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodFilter {
    #[default]
    All,
    Only(PaymentMethod),
}

impl FromStr for MethodFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(MethodFilter::All);
        }
        s.parse::<PaymentMethod>().map(MethodFilter::Only)
    }
}

/// Inputs of the visible list: tab, free-text search and method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub tab: Tab,
    pub search: String,
    pub method: MethodFilter,
}

impl ViewFilter {
    pub fn new(tab: Tab, search: impl Into<String>, method: MethodFilter) -> Self {
        Self {
            tab,
            search: search.into(),
            method,
        }
    }

    pub fn matches(&self, record: &PaymentRecord) -> bool {
        self.tab.admits(record.status)
            && matches_search(record, &self.search)
            && match self.method {
                MethodFilter::All => true,
                MethodFilter::Only(m) => record.method == m,
            }
    }
}

fn matches_search(record: &PaymentRecord, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [&record.client_name, &record.unit_name, &record.id]
        .iter()
        .any(|hay| hay.to_lowercase().contains(&needle))
}

/// Visible subset in collection order.
pub fn filter_payments<'a>(
    records: &'a [PaymentRecord],
    filter: &ViewFilter,
) -> Vec<&'a PaymentRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}
