//! Transaction and daily-preset records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::categorizer::resolve_category;
use crate::category::{Category, TransactionType};

/// A single income or expense entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Positive amount; the type carries the direction
    pub amount: f64,
    pub category: Category,
    /// Calendar day, timezone-naive
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// Why the stored category was chosen, set by the resolver
    #[serde(default)]
    pub categorization_reason: String,
}

impl Transaction {
    /// Build a transaction, running category resolution on the way in.
    pub fn new(
        kind: TransactionType,
        amount: f64,
        selected: Category,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let description = description.into();
        let decision = resolve_category(selected, &description, kind);
        Self {
            kind,
            amount,
            category: decision.category,
            date,
            description,
            categorization_reason: decision.reason,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Re-run resolution after edits touching category/description/type.
    pub fn recategorize(&mut self, selected: Category) {
        let decision = resolve_category(selected, &self.description, self.kind);
        self.category = decision.category;
        self.categorization_reason = decision.reason;
    }
}

/// A reusable template for recurring daily entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyPreset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl DailyPreset {
    /// Materialize a transaction for the given day. The preset name becomes
    /// the description, and the write goes through the resolver like any
    /// other write.
    pub fn materialize(&self, date: NaiveDate) -> Transaction {
        Transaction::new(self.kind, self.amount, self.category, date, &self.name)
    }
}
