//! Calendar-month bucketing and the income/expense trend

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::category::Category;
use crate::transaction::Transaction;

/// How many months the dashboard trend covers
pub const TREND_MONTHS: usize = 6;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Aggregates for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthPoint {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expense: f64,
    pub expense_by_category: HashMap<Category, f64>,
}

impl MonthPoint {
    fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            income: 0.0,
            expense: 0.0,
            expense_by_category: HashMap::new(),
        }
    }

    /// Chart label, e.g. "Aug 2026"
    pub fn label(&self) -> String {
        let name = MONTH_NAMES
            .get(self.month as usize - 1)
            .copied()
            .unwrap_or("???");
        format!("{} {}", name, self.year)
    }

    pub fn category_expense(&self, category: Category) -> f64 {
        self.expense_by_category.get(&category).copied().unwrap_or(0.0)
    }
}

/// One entry of the charted trend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

/// (year, month) shifted back by `back` calendar months
fn month_back(year: i32, month: u32, back: u32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 - back as i32;
    (index.div_euclid(12), (index.rem_euclid(12) + 1) as u32)
}

/// Build `months` consecutive calendar-month buckets ending at today's
/// month, oldest first. Transactions outside the window are ignored;
/// months with no activity stay all-zero.
pub fn monthly_points(transactions: &[Transaction], today: NaiveDate, months: usize) -> Vec<MonthPoint> {
    let months = months.max(1);
    let mut points: Vec<MonthPoint> = (0..months)
        .rev()
        .map(|back| {
            let (year, month) = month_back(today.year(), today.month(), back as u32);
            MonthPoint::empty(year, month)
        })
        .collect();

    let mut index: HashMap<(i32, u32), usize> = HashMap::new();
    for (i, point) in points.iter().enumerate() {
        index.insert((point.year, point.month), i);
    }

    for txn in transactions {
        let key = (txn.date.year(), txn.date.month());
        let Some(&i) = index.get(&key) else { continue };
        let point = &mut points[i];
        if txn.is_income() {
            point.income += txn.amount;
        } else {
            point.expense += txn.amount;
            *point.expense_by_category.entry(txn.category).or_insert(0.0) += txn.amount;
        }
    }

    points
}

/// Flatten month buckets into chartable {label, income, expense} entries.
pub fn monthly_trend(points: &[MonthPoint]) -> Vec<TrendPoint> {
    points
        .iter()
        .map(|p| TrendPoint {
            month: p.label(),
            income: p.income,
            expense: p.expense,
        })
        .collect()
}
