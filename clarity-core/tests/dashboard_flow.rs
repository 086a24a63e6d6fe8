//! End-to-end checks over a synthetic ledger: a few months of activity fed
//! through categorization, budget status, and the dashboard intelligence.

use chrono::NaiveDate;
use clarity_core::{
    Budget, BudgetPeriod, Category, HealthStatus, Transaction, TransactionType, budget_status,
    dashboard_intelligence, resolve_category,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const TODAY: (i32, u32, u32) = (2026, 8, 20);

fn sample_ledger() -> Vec<Transaction> {
    let mut txns = Vec::new();

    // Salary lands on the 1st of every month from April through August.
    for month in 4..=8 {
        txns.push(Transaction::new(
            TransactionType::Income,
            2400.0,
            Category::Other,
            day(2026, month, 1),
            "monthly salary credit",
        ));
    }

    // Rent on the 2nd, auto-categorized from "rent".
    for month in 4..=8 {
        txns.push(Transaction::new(
            TransactionType::Expense,
            900.0,
            Category::Other,
            day(2026, month, 2),
            "rent to landlord",
        ));
    }

    // Food spend grows over the summer.
    for (month, amount) in [(5, 180.0), (6, 200.0), (7, 220.0), (8, 340.0)] {
        txns.push(Transaction::new(
            TransactionType::Expense,
            amount,
            Category::Other,
            day(2026, month, 10),
            "swiggy order",
        ));
    }

    // A manually categorized one-off with no keyword.
    txns.push(Transaction::new(
        TransactionType::Expense,
        60.0,
        Category::Healthcare,
        day(2026, 8, 12),
        "annual check-up copay",
    ));

    txns
}

#[test]
fn test_auto_categorization_applies_on_write() {
    let txns = sample_ledger();
    let salary = &txns[0];
    assert_eq!(salary.category, Category::Salary);
    assert_eq!(
        salary.categorization_reason,
        "Matched keyword \"salary\" in description"
    );

    let rent = txns.iter().find(|t| t.description.contains("landlord")).unwrap();
    assert_eq!(rent.category, Category::Housing);

    let copay = txns.iter().find(|t| t.description.contains("copay")).unwrap();
    assert_eq!(copay.category, Category::Healthcare);
    assert_eq!(copay.categorization_reason, "Selected manually");
}

#[test]
fn test_reresolution_is_stable_for_stored_rows() {
    for txn in sample_ledger() {
        let again = resolve_category(txn.category, &txn.description, txn.kind);
        assert_eq!(again.category, txn.category, "desc: {}", txn.description);
        assert_eq!(again.reason, txn.categorization_reason);
    }
}

#[test]
fn test_month_budget_over_ledger() {
    let (y, m, d) = TODAY;
    let today = day(y, m, d);
    let budget = Budget::new(1500.0, BudgetPeriod::Month, today).unwrap();
    let status = budget_status(&budget, &sample_ledger(), today);

    // August expenses: 900 rent + 340 food + 60 copay.
    assert_eq!(status.spent, 1300.0);
    assert_eq!(status.remaining, 200.0);
    assert!((status.utilization_pct - 86.666).abs() < 0.01);
    assert!(status.utilization_pct <= 999.0);
    assert_eq!(status.start_date, "2026-08-01T00:00:00.000Z");
}

#[test]
fn test_intelligence_over_ledger() {
    let (y, m, d) = TODAY;
    let today = day(y, m, d);
    let txns = sample_ledger();
    let view = dashboard_intelligence(&txns, today);

    assert_eq!(view.monthly_trend.len(), 6);
    assert_eq!(view.monthly_trend[5].month, "Aug 2026");
    assert_eq!(view.monthly_trend[5].income, 2400.0);
    assert_eq!(view.monthly_trend[5].expense, 1300.0);
    assert_eq!(view.monthly_trend[0].month, "Mar 2026");
    assert_eq!(view.monthly_trend[0].expense, 0.0);

    // Food jumped from a 200 trailing average to 340: red flag.
    let food = view
        .category_health
        .iter()
        .find(|h| h.category == Category::Food)
        .unwrap();
    assert_eq!(food.trailing_avg, 200.0);
    assert_eq!(food.status, HealthStatus::Red);

    // Rent is flat: green.
    let housing = view
        .category_health
        .iter()
        .find(|h| h.category == Category::Housing)
        .unwrap();
    assert_eq!(housing.status, HealthStatus::Green);

    assert!(view.category_health.len() <= 6);
    for h in &view.category_health {
        assert!(h.current != 0.0 || h.trailing_avg != 0.0);
    }

    assert!(view.confidence_score <= 100);
    assert_eq!(view.confidence_notes.len(), 3);

    assert!(
        view.explain_summary.contains("Housing") || view.explain_summary.contains("Food"),
        "summary should anchor on a dominant category: {}",
        view.explain_summary
    );
    assert!(view.explain_summary.contains("Your income covers your spending this month."));
}

#[test]
fn test_intelligence_is_idempotent() {
    let (y, m, d) = TODAY;
    let today = day(y, m, d);
    let txns = sample_ledger();
    let a = serde_json::to_string(&dashboard_intelligence(&txns, today)).unwrap();
    let b = serde_json::to_string(&dashboard_intelligence(&txns, today)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_ledger_still_fully_populates() {
    let (y, m, d) = TODAY;
    let view = dashboard_intelligence(&[], day(y, m, d));
    assert_eq!(view.monthly_trend.len(), 6);
    assert!(view.monthly_trend.iter().all(|p| p.income == 0.0 && p.expense == 0.0));
    assert!(view.category_health.is_empty());
    assert_eq!(view.confidence_notes.len(), 3);
    assert_eq!(
        view.explain_summary,
        "No spending activity in the current or previous month."
    );
}
