//! Decides the category to persist for a transaction and records why.
//!
//! The user's explicit choice always wins once it is not "Other"; keyword
//! detection only overrides an "Other" selection, and only when the detected
//! category is valid for the transaction type.

use crate::category::{Category, TransactionType};
use crate::keywords::detect_category;

/// Outcome of category resolution
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDecision {
    pub category: Category,
    pub reason: String,
}

const MANUAL_REASON: &str = "Selected manually";

fn keyword_reason(keyword: &str) -> String {
    format!("Matched keyword \"{keyword}\" in description")
}

/// Resolve the stored category for a write. Pure and deterministic; callers
/// must have already rejected unparseable type/category input.
pub fn resolve_category(
    selected: Category,
    description: &str,
    ty: TransactionType,
) -> CategoryDecision {
    let Some(detected) = detect_category(description) else {
        return CategoryDecision {
            category: selected,
            reason: MANUAL_REASON.to_string(),
        };
    };

    if selected == Category::Other && detected.category.valid_for(ty) {
        return CategoryDecision {
            category: detected.category,
            reason: keyword_reason(detected.keyword),
        };
    }

    if detected.category == selected {
        return CategoryDecision {
            category: selected,
            reason: keyword_reason(detected.keyword),
        };
    }

    CategoryDecision {
        category: selected,
        reason: MANUAL_REASON.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keyword_is_manual() {
        let decision = resolve_category(Category::Food, "weekly shop", TransactionType::Expense);
        assert_eq!(decision.category, Category::Food);
        assert_eq!(decision.reason, "Selected manually");
    }

    #[test]
    fn test_other_upgraded_by_keyword() {
        let decision =
            resolve_category(Category::Other, "I paid rent today", TransactionType::Expense);
        assert_eq!(decision.category, Category::Housing);
        assert_eq!(decision.reason, "Matched keyword \"rent\" in description");
    }

    #[test]
    fn test_income_category_rejected_for_expense() {
        // "salary" detects Salary, but Salary is income-only; the Other
        // selection stands and the reason stays manual.
        let decision = resolve_category(
            Category::Other,
            "received salary payment",
            TransactionType::Expense,
        );
        assert_eq!(decision.category, Category::Other);
        assert_eq!(decision.reason, "Selected manually");
    }

    #[test]
    fn test_expense_category_rejected_for_income() {
        let decision =
            resolve_category(Category::Other, "restaurant refund", TransactionType::Income);
        assert_eq!(decision.category, Category::Other);
        assert_eq!(decision.reason, "Selected manually");
    }

    #[test]
    fn test_explicit_selection_wins_over_keyword() {
        // Keyword says Entertainment, user said Shopping; user wins.
        let decision = resolve_category(
            Category::Shopping,
            "netflix gift card",
            TransactionType::Expense,
        );
        assert_eq!(decision.category, Category::Shopping);
        assert_eq!(decision.reason, "Selected manually");
    }

    #[test]
    fn test_matching_selection_gets_keyword_reason() {
        let decision = resolve_category(
            Category::Housing,
            "march rent transfer",
            TransactionType::Expense,
        );
        assert_eq!(decision.category, Category::Housing);
        assert_eq!(decision.reason, "Matched keyword \"rent\" in description");
    }

    #[test]
    fn test_other_to_other_income_keyword() {
        let decision = resolve_category(
            Category::Other,
            "quarterly dividend credited",
            TransactionType::Income,
        );
        assert_eq!(decision.category, Category::Investment);
        assert_eq!(
            decision.reason,
            "Matched keyword \"dividend\" in description"
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = resolve_category(Category::Other, "uber to airport", TransactionType::Expense);
        assert_eq!(first.category, Category::Transportation);

        // Re-resolving with the stored category selected must not move it.
        let second =
            resolve_category(first.category, "uber to airport", TransactionType::Expense);
        assert_eq!(second.category, first.category);
        assert_eq!(second.reason, first.reason);
    }

    #[test]
    fn test_empty_description_is_manual() {
        let decision = resolve_category(Category::Other, "", TransactionType::Expense);
        assert_eq!(decision.category, Category::Other);
        assert_eq!(decision.reason, "Selected manually");
    }
}
