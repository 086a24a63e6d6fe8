//! Dashboard totals over an optional date window

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::transaction::Transaction;

/// Income/expense totals plus the per-category expense breakdown.
/// `by_category` keys on the category label and stays sorted for stable
/// serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub by_category: BTreeMap<String, f64>,
}

/// Sum a transaction snapshot, optionally windowed to [start, end]
/// inclusive on either side.
pub fn summarize(
    transactions: &[Transaction],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Summary {
    let mut summary = Summary::default();

    for txn in transactions {
        if start.is_some_and(|s| txn.date < s) || end.is_some_and(|e| txn.date > e) {
            continue;
        }
        if txn.is_income() {
            summary.total_income += txn.amount;
        } else {
            summary.total_expense += txn.amount;
            *summary
                .by_category
                .entry(txn.category.to_string())
                .or_insert(0.0) += txn.amount;
        }
    }

    summary.balance = summary.total_income - summary.total_expense;
    summary
}
