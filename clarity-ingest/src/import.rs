//! Turn statement rows into ledger transactions.
//!
//! The sign decides the type (negative = expense), the stored amount is
//! absolute, and every row goes through the category resolver starting
//! from Other so the keyword table gets first shot at the bank's
//! description text.

use clarity_core::{Category, Transaction, TransactionType};

use crate::types::StatementRow;

/// Map rows to transactions. Zero-amount rows are dropped; they carry no
/// ledger meaning and would violate the positive-amount invariant.
pub fn to_transactions(rows: &[StatementRow]) -> Vec<Transaction> {
    rows.iter()
        .filter(|row| row.amount != 0.0)
        .map(|row| {
            let kind = if row.amount < 0.0 {
                TransactionType::Expense
            } else {
                TransactionType::Income
            };
            Transaction::new(
                kind,
                row.amount.abs(),
                Category::Other,
                row.date,
                &row.description,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(date: (i32, u32, u32), description: &str, amount: f64) -> StatementRow {
        StatementRow {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: description.to_string(),
            amount,
        }
    }

    #[test]
    fn test_sign_sets_type_and_amount_goes_absolute() {
        let txns = to_transactions(&[
            row((2026, 8, 2), "RENT TO LANDLORD", -900.0),
            row((2026, 8, 1), "ACME PAYROLL", 2400.0),
        ]);
        assert_eq!(txns.len(), 2);
        assert!(txns[0].is_expense());
        assert_eq!(txns[0].amount, 900.0);
        assert!(txns[1].is_income());
        assert_eq!(txns[1].amount, 2400.0);
    }

    #[test]
    fn test_resolver_categorizes_bank_descriptions() {
        let txns = to_transactions(&[
            row((2026, 8, 2), "RENT TO LANDLORD", -900.0),
            row((2026, 8, 1), "ACME PAYROLL", 2400.0),
            row((2026, 8, 3), "POS 8812 CORNER SHOP", -12.0),
        ]);
        assert_eq!(txns[0].category, Category::Housing);
        assert_eq!(txns[1].category, Category::Salary);
        // No keyword: stays Other, flagged as manual.
        assert_eq!(txns[2].category, Category::Other);
        assert_eq!(txns[2].categorization_reason, "Selected manually");
    }

    #[test]
    fn test_income_only_keyword_respected_for_charges() {
        // A charge whose text mentions salary must not land in Salary.
        let txns = to_transactions(&[row((2026, 8, 4), "SALARY ADVANCE REPAY", -200.0)]);
        assert_eq!(txns[0].category, Category::Other);
    }

    #[test]
    fn test_zero_amount_rows_dropped() {
        let txns = to_transactions(&[row((2026, 8, 4), "BALANCE NOTICE", 0.0)]);
        assert!(txns.is_empty());
    }
}
