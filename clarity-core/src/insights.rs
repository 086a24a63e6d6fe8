//! Dashboard intelligence: the explanation summary plus the assembled view

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::{ALL_CATEGORIES, Category};
use crate::confidence::confidence;
use crate::health::{CategoryHealth, category_health};
use crate::transaction::Transaction;
use crate::trend::{MonthPoint, TREND_MONTHS, TrendPoint, monthly_points, monthly_trend};

/// Everything the dashboard's intelligence panel renders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardIntelligence {
    pub explain_summary: String,
    pub confidence_score: u32,
    pub confidence_notes: Vec<String>,
    pub monthly_trend: Vec<TrendPoint>,
    pub category_health: Vec<CategoryHealth>,
}

/// Category with the highest expense in a month bucket, scan order on ties
fn top_expense_category(point: &MonthPoint) -> Option<Category> {
    let mut best: Option<(Category, f64)> = None;
    for category in ALL_CATEGORIES {
        let value = point.category_expense(category);
        if value <= 0.0 {
            continue;
        }
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((category, value)),
        }
    }
    best.map(|(category, _)| category)
}

/// Compose the three-sentence spending explanation from the last two month
/// buckets: how the dominant category moved, how overall expense moved,
/// and whether income still covers spending.
pub fn explain_summary(points: &[MonthPoint]) -> String {
    let (Some(current), Some(previous)) = (
        points.last(),
        points.len().checked_sub(2).and_then(|i| points.get(i)),
    ) else {
        return "No spending activity in the current or previous month.".to_string();
    };

    let Some(focus) = top_expense_category(current).or_else(|| top_expense_category(previous))
    else {
        return "No spending activity in the current or previous month.".to_string();
    };

    let current_value = current.category_expense(focus);
    let previous_value = previous.category_expense(focus);

    let category_sentence = if previous_value == 0.0 {
        format!(
            "You started spending on {} this month with {:.2}.",
            focus, current_value
        )
    } else {
        let pct = ((current_value - previous_value).abs() / previous_value * 100.0).round();
        let direction = if current_value - previous_value >= 0.0 {
            "more"
        } else {
            "less"
        };
        format!(
            "You spent {pct:.0}% {direction} on {focus} compared to last month."
        )
    };

    let overall_sentence = if current.expense > previous.expense {
        format!(
            "Overall expenses increased from {:.2} to {:.2}.",
            previous.expense, current.expense
        )
    } else {
        format!(
            "Overall expenses improved from {:.2} to {:.2}.",
            previous.expense, current.expense
        )
    };

    let balance = current.income - current.expense;
    let balance_sentence = if balance >= 0.0 {
        "Your income covers your spending this month."
    } else {
        "Your spending exceeds your income this month."
    };

    format!("{category_sentence} {overall_sentence} {balance_sentence}")
}

/// Compute the full intelligence view from one consistent transaction
/// snapshot. Pure; calling it twice on the same snapshot yields identical
/// output.
pub fn dashboard_intelligence(transactions: &[Transaction], today: NaiveDate) -> DashboardIntelligence {
    let points = monthly_points(transactions, today, TREND_MONTHS);
    let report = confidence(transactions, today);

    DashboardIntelligence {
        explain_summary: explain_summary(&points),
        confidence_score: report.score,
        confidence_notes: report.notes,
        monthly_trend: monthly_trend(&points),
        category_health: category_health(&points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::TransactionType;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: f64, category: Category, date: NaiveDate) -> Transaction {
        Transaction::new(TransactionType::Expense, amount, category, date, "x")
    }

    fn income(amount: f64, date: NaiveDate) -> Transaction {
        Transaction::new(TransactionType::Income, amount, Category::Salary, date, "x")
    }

    fn points(txns: &[Transaction]) -> Vec<MonthPoint> {
        monthly_points(txns, day(2026, 8, 20), TREND_MONTHS)
    }

    #[test]
    fn test_no_activity_sentence() {
        assert_eq!(
            explain_summary(&points(&[])),
            "No spending activity in the current or previous month."
        );
    }

    #[test]
    fn test_percentage_change_more() {
        let txns = vec![
            expense(100.0, Category::Food, day(2026, 7, 10)),
            expense(150.0, Category::Food, day(2026, 8, 10)),
            income(500.0, day(2026, 8, 1)),
        ];
        let summary = explain_summary(&points(&txns));
        assert!(
            summary.starts_with("You spent 50% more on Food compared to last month."),
            "got: {summary}"
        );
        assert!(summary.contains("Overall expenses increased from 100.00 to 150.00."));
        assert!(summary.ends_with("Your income covers your spending this month."));
    }

    #[test]
    fn test_percentage_change_less_and_negative_balance() {
        let txns = vec![
            expense(200.0, Category::Housing, day(2026, 7, 2)),
            expense(150.0, Category::Housing, day(2026, 8, 2)),
        ];
        let summary = explain_summary(&points(&txns));
        assert!(summary.contains("25% less on Housing"), "got: {summary}");
        assert!(summary.contains("Overall expenses improved from 200.00 to 150.00."));
        assert!(summary.ends_with("Your spending exceeds your income this month."));
    }

    #[test]
    fn test_started_spending_branch() {
        let txns = vec![expense(80.0, Category::Shopping, day(2026, 8, 4))];
        let summary = explain_summary(&points(&txns));
        assert!(
            summary.starts_with("You started spending on Shopping this month with 80.00."),
            "got: {summary}"
        );
    }

    #[test]
    fn test_falls_back_to_previous_month_top_category() {
        // Nothing this month; last month's top category anchors the summary.
        let txns = vec![
            expense(90.0, Category::Utilities, day(2026, 7, 4)),
            expense(30.0, Category::Food, day(2026, 7, 6)),
        ];
        let summary = explain_summary(&points(&txns));
        assert!(summary.contains("Utilities"), "got: {summary}");
        assert!(summary.contains("100% less on Utilities"), "got: {summary}");
    }

    #[test]
    fn test_intelligence_shape_and_idempotence() {
        let txns = vec![
            income(1200.0, day(2026, 8, 1)),
            expense(300.0, Category::Food, day(2026, 8, 3)),
            expense(120.0, Category::Transportation, day(2026, 7, 14)),
        ];
        let first = dashboard_intelligence(&txns, day(2026, 8, 20));
        assert_eq!(first.monthly_trend.len(), 6);
        assert_eq!(first.confidence_notes.len(), 3);
        assert!(first.confidence_score <= 100);
        assert!(first.category_health.len() <= 6);

        let second = dashboard_intelligence(&txns, day(2026, 8, 20));
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }
}
