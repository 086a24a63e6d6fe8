use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized output of the statement reader (bank-agnostic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    pub date: NaiveDate,
    pub description: String,
    /// Signed: negative means spend/charge, positive means credit.
    pub amount: f64,
}
