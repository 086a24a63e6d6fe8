//! Budget records and rolling budget status

use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::period::{BudgetPeriod, resolve_range};
use crate::transaction::Transaction;

/// At most one budget exists per user; it is upserted as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    /// Positive spending cap for the period
    pub amount: f64,
    pub period: BudgetPeriod,
    /// Captured at creation time; only `now` budgets read it back when
    /// resolving their window
    pub start_date: NaiveDate,
}

impl Budget {
    /// Create (or replace) a budget. The start date is the period window
    /// start as of today, which anchors `now` budgets permanently.
    pub fn new(amount: f64, period: BudgetPeriod, today: NaiveDate) -> Result<Self> {
        if amount <= 0.0 {
            bail!("budget amount must be greater than 0");
        }
        let start_date = resolve_range(period, today, None).start_day();
        Ok(Self {
            amount,
            period,
            start_date,
        })
    }
}

/// Derived view of a budget against the transaction history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetStatus {
    pub amount: f64,
    pub period: BudgetPeriod,
    /// ISO-8601 window bounds
    pub start_date: String,
    pub end_date: String,
    pub spent: f64,
    /// May be negative when the budget is blown
    pub remaining: f64,
    /// Capped at 999 so runaway overspend stays displayable
    pub utilization_pct: f64,
}

/// Compute budget status as of `today`. Week/month windows roll with the
/// date; `now` windows start at the budget's stored start date.
pub fn budget_status(budget: &Budget, transactions: &[Transaction], today: NaiveDate) -> BudgetStatus {
    let range = resolve_range(budget.period, today, Some(budget.start_date));

    let spent: f64 = transactions
        .iter()
        .filter(|t| t.is_expense() && range.contains_day(t.date))
        .map(|t| t.amount)
        .sum();

    let remaining = budget.amount - spent;
    let utilization_pct = if budget.amount > 0.0 {
        (spent / budget.amount * 100.0).min(999.0)
    } else {
        0.0
    };

    BudgetStatus {
        amount: budget.amount,
        period: budget.period,
        start_date: range.start_iso(),
        end_date: range.end_iso(),
        spent,
        remaining,
        utilization_pct,
    }
}
