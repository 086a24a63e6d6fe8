//! Transaction categories and the income/expense type split

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => bail!("invalid transaction type: {other} (expected income|expense)"),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed transaction categories. Declaration order is the keyword-scan
/// order used by auto-categorization, so it is part of the contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Entertainment,
    Utilities,
    Healthcare,
    Shopping,
    Education,
    Salary,
    Freelance,
    Investment,
    Other,
}

/// Every category, in scan order
pub const ALL_CATEGORIES: [Category; 12] = [
    Category::Food,
    Category::Transportation,
    Category::Housing,
    Category::Entertainment,
    Category::Utilities,
    Category::Healthcare,
    Category::Shopping,
    Category::Education,
    Category::Salary,
    Category::Freelance,
    Category::Investment,
    Category::Other,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Shopping => "Shopping",
            Category::Education => "Education",
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investment => "Investment",
            Category::Other => "Other",
        }
    }

    /// Salary/Freelance/Investment only make sense for income rows
    pub fn is_income_only(&self) -> bool {
        matches!(
            self,
            Category::Salary | Category::Freelance | Category::Investment
        )
    }

    /// Whether this category is semantically valid for the given type.
    /// Income is restricted to the three income categories plus Other;
    /// expense gets everything except those three.
    pub fn valid_for(&self, ty: TransactionType) -> bool {
        match ty {
            TransactionType::Income => self.is_income_only() || *self == Category::Other,
            TransactionType::Expense => !self.is_income_only(),
        }
    }

    /// Position in scan order, used as a deterministic tie-break
    pub fn scan_index(&self) -> usize {
        ALL_CATEGORIES
            .iter()
            .position(|c| c == self)
            .unwrap_or(ALL_CATEGORIES.len())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for category in ALL_CATEGORIES {
            if category.as_str().eq_ignore_ascii_case(s) {
                return Ok(category);
            }
        }
        bail!("invalid category: {s}");
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
