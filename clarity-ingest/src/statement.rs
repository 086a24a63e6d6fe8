//! Parse bank statement CSV exports into typed rows.
//!
//! Expected columns: Date,Description,Amount. Dates may be YYYY-MM-DD,
//! MM/DD/YYYY, or DD-MM-YYYY; amounts tolerate currency symbols, thousands
//! separators, and accountant parentheses. Rows that fail to parse are
//! skipped, not fatal: real exports carry blank trailing rows and section
//! headers.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;

use crate::types::StatementRow;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];

fn parse_row_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Pull a signed decimal out of an amount cell like "₹1,234.56" or "(12.00)".
fn parse_row_amount(re: &Regex, s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let number: f64 = re.find(trimmed)?.as_str().replace(',', "").parse().ok()?;
    // Accountant-style parentheses mean negative
    if trimmed.starts_with('(') && trimmed.ends_with(')') {
        Some(-number.abs())
    } else {
        Some(number)
    }
}

fn parse_records<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<StatementRow>> {
    let amount_re = Regex::new(r"-?\d[\d,]*(?:\.\d+)?")?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;

        // Header and junk rows fail the date parse and drop out here.
        let Some(date) = record.get(0).and_then(parse_row_date) else {
            continue;
        };
        let Some(amount) = record.get(2).and_then(|s| parse_row_amount(&amount_re, s)) else {
            continue;
        };

        rows.push(StatementRow {
            date,
            description: record.get(1).unwrap_or("").trim().to_string(),
            amount,
        });
    }

    Ok(rows)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true).has_headers(false);
    builder
}

/// Read a statement CSV file, skipping malformed rows.
pub fn parse_statement_csv(path: impl AsRef<Path>) -> Result<Vec<StatementRow>> {
    let rdr = reader_builder()
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_records(rdr)
}

/// Same parsing over in-memory CSV text, for callers that already read the
/// file (and for tests).
pub fn parse_statement_text(text: &str) -> Result<Vec<StatementRow>> {
    parse_records(reader_builder().from_reader(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_statement() {
        let text = "\
Date,Description,Amount
2026-08-02,RENT TO LANDLORD,-900.00
2026-08-05,SWIGGY ORDER 4411,-23.40
2026-08-01,ACME PAYROLL,2400.00
";
        let rows = parse_statement_text(text).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].description, "RENT TO LANDLORD");
        assert_eq!(rows[0].amount, -900.0);
        assert_eq!(rows[2].amount, 2400.0);
    }

    #[test]
    fn test_tolerant_dates_and_amounts() {
        let text = "\
08/05/2026,COFFEE BAR,\"-1,250.75\"
05-08-2026,METRO CARD,(40.00)
2026-08-05,WIRE IN,₹2500
";
        let rows = parse_statement_text(text).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
        assert_eq!(rows[0].amount, -1250.75);
        assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
        assert_eq!(rows[1].amount, -40.0);
        assert_eq!(rows[2].amount, 2500.0);
    }

    #[test]
    fn test_junk_rows_skipped() {
        let text = "\
STATEMENT FOR AUGUST,,
Date,Description,Amount
2026-08-02,OK ROW,-10.00
,,
not-a-date,BAD ROW,-5.00
2026-08-03,NO AMOUNT,none
";
        let rows = parse_statement_text(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "OK ROW");
    }
}
