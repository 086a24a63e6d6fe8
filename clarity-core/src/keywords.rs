//! Keyword vocabulary for description-based auto-categorization.
//!
//! The table is a static, ordered list: categories in scan order, keywords
//! in declared order. The first substring hit wins, so reordering entries
//! changes behavior, so treat the order as part of the contract.

use crate::category::Category;

/// Category to lowercase keyword list, in scan order
pub const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &["zomato", "swiggy", "restaurant", "dining", "snack", "coffee", "food"],
    ),
    (
        Category::Transportation,
        &["uber", "ola", "bus", "metro", "taxi", "fuel", "petrol", "train"],
    ),
    (
        Category::Housing,
        &["rent", "landlord", "maintenance", "mortgage"],
    ),
    (
        Category::Entertainment,
        &["movie", "netflix", "spotify", "concert", "game"],
    ),
    (
        Category::Utilities,
        &["electricity", "water bill", "internet", "wifi", "gas bill", "phone bill"],
    ),
    (
        Category::Healthcare,
        &["doctor", "clinic", "medicine", "pharmacy", "hospital"],
    ),
    (
        Category::Shopping,
        &["amazon", "flipkart", "store", "mall", "shopping"],
    ),
    (
        Category::Education,
        &["course", "tuition", "book", "college", "exam fee"],
    ),
    (Category::Salary, &["salary", "payroll", "paycheck"]),
    (Category::Freelance, &["freelance", "client payment", "project fee"]),
    (
        Category::Investment,
        &["dividend", "interest", "mutual fund", "stocks", "sip"],
    ),
    (Category::Other, &[]),
];

/// A keyword hit: which category fired and on which keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    pub category: Category,
    pub keyword: &'static str,
}

/// Scan the table in order and return the first keyword contained in the
/// lowercased description, or None if nothing matches.
pub fn detect_category(description: &str) -> Option<KeywordMatch> {
    let normalized = description.to_lowercase();
    for (category, keywords) in KEYWORD_TABLE {
        for keyword in *keywords {
            if normalized.contains(keyword) {
                return Some(KeywordMatch {
                    category: *category,
                    keyword,
                });
            }
        }
    }
    None
}
