//! Data-completeness confidence score over the current month to date

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::category::Category;
use crate::transaction::Transaction;

const LOGGING_WEIGHT: f64 = 0.5;
const DESCRIPTION_WEIGHT: f64 = 0.3;
const QUALITY_WEIGHT: f64 = 0.2;

/// 0-100 score plus the three human-readable notes behind it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceReport {
    pub score: u32,
    pub notes: Vec<String>,
}

/// Score how complete the current month's data entry looks:
/// days logged (50%), descriptions filled in (30%), and how little expense
/// is left in the Other bucket (20%). An empty month is not penalized on
/// the description or quality axes.
pub fn confidence(transactions: &[Transaction], today: NaiveDate) -> ConfidenceReport {
    let current: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.date.year() == today.year() && t.date.month() == today.month() && t.date <= today)
        .collect();

    let days_elapsed = today.day();
    let logged_days: HashSet<NaiveDate> = current.iter().map(|t| t.date).collect();
    let logging_rate = if days_elapsed > 0 {
        logged_days.len() as f64 / days_elapsed as f64
    } else {
        0.0
    };

    let description_rate = if current.is_empty() {
        1.0
    } else {
        let described = current
            .iter()
            .filter(|t| !t.description.trim().is_empty())
            .count();
        described as f64 / current.len() as f64
    };

    let total_expense: f64 = current.iter().filter(|t| t.is_expense()).map(|t| t.amount).sum();
    let other_expense: f64 = current
        .iter()
        .filter(|t| t.is_expense() && t.category == Category::Other)
        .map(|t| t.amount)
        .sum();
    let categorization_quality = if total_expense > 0.0 {
        (1.0 - other_expense / total_expense).max(0.0)
    } else {
        1.0
    };

    let score = ((logging_rate * LOGGING_WEIGHT
        + description_rate * DESCRIPTION_WEIGHT
        + categorization_quality * QUALITY_WEIGHT)
        * 100.0)
        .round() as u32;

    let notes = vec![
        format!("{}/{} days logged this month", logged_days.len(), days_elapsed),
        format!(
            "{}% transactions have descriptions",
            (description_rate * 100.0).round() as u32
        ),
        format!(
            "{}% categorization quality",
            (categorization_quality * 100.0).round() as u32
        ),
    ];

    ConfidenceReport { score, notes }
}
