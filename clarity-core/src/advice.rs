//! Deterministic daily spending advice composed from one day's entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::category::Category;
use crate::transaction::Transaction;

/// One day's money recap plus short do/avoid lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyAdvice {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub brief_summary: String,
    pub do_list: Vec<String>,
    pub avoid_list: Vec<String>,
}

/// Expense categories for the day, largest first, scan order on ties
fn top_categories(transactions: &[&Transaction]) -> Vec<(Category, f64)> {
    let mut by_category: HashMap<Category, f64> = HashMap::new();
    for txn in transactions {
        if txn.is_expense() {
            *by_category.entry(txn.category).or_insert(0.0) += txn.amount;
        }
    }
    let mut entries: Vec<(Category, f64)> = by_category.into_iter().collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.scan_index().cmp(&b.0.scan_index()))
    });
    entries.truncate(3);
    entries
}

/// Build advice for a single day. This is the deterministic text the app
/// serves when no language model is configured.
pub fn daily_advice(transactions: &[Transaction], date: NaiveDate) -> DailyAdvice {
    let day_txns: Vec<&Transaction> = transactions.iter().filter(|t| t.date == date).collect();

    let income: f64 = day_txns.iter().filter(|t| t.is_income()).map(|t| t.amount).sum();
    let expense: f64 = day_txns.iter().filter(|t| t.is_expense()).map(|t| t.amount).sum();
    let balance = income - expense;

    let top = top_categories(&day_txns);
    let top_category_text = top
        .first()
        .map(|(category, amount)| format!("{} ({:.2})", category, amount))
        .unwrap_or_else(|| "no dominant category".to_string());

    let brief_summary = if balance >= 0.0 {
        format!(
            "On {date}, you stayed positive. Income was {income:.2} and expenses were {expense:.2}."
        )
    } else {
        format!(
            "On {date}, spending was higher than income by {:.2}.",
            balance.abs()
        )
    };

    let do_list = vec![
        "Keep tracking daily so patterns stay visible.".to_string(),
        format!("Review {top_category_text} and set a small daily cap for tomorrow."),
        if balance >= 0.0 {
            "Move some surplus into savings.".to_string()
        } else {
            "Trim one non-essential spend tomorrow.".to_string()
        },
    ];

    let avoid_list = vec![
        "Avoid impulse purchases late in the day.".to_string(),
        "Do not ignore recurring small expenses.".to_string(),
        if balance < 0.0 {
            "Avoid new discretionary spending until balance improves.".to_string()
        } else {
            "Avoid overconfidence spending.".to_string()
        },
    ];

    DailyAdvice {
        date,
        income,
        expense,
        balance,
        brief_summary,
        do_list,
        avoid_list,
    }
}
