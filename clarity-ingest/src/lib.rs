//! clarity-ingest: bank statement CSV import for Clarity

pub mod import;
pub mod statement;
pub mod types;

pub use import::to_transactions;
pub use statement::{parse_statement_csv, parse_statement_text};
pub use types::StatementRow;
