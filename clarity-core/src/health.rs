//! Category health: current-month spend vs the trailing 3-month average

use serde::{Deserialize, Serialize};

use crate::category::{ALL_CATEGORIES, Category};
use crate::trend::MonthPoint;

/// How many of the health entries survive the cut
pub const HEALTH_TOP_N: usize = 6;

/// Months averaged immediately before the current one
const TRAILING_MONTHS: usize = 3;

const RED_RATIO: f64 = 1.4;
const YELLOW_RATIO: f64 = 1.1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Green,
    Yellow,
    Red,
}

impl HealthStatus {
    fn from_ratio(ratio: f64) -> Self {
        if ratio > RED_RATIO {
            HealthStatus::Red
        } else if ratio > YELLOW_RATIO {
            HealthStatus::Yellow
        } else {
            HealthStatus::Green
        }
    }
}

/// Health flag for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryHealth {
    pub category: Category,
    /// Current-month expense for the category
    pub current: f64,
    /// Mean over the trailing window
    pub trailing_avg: f64,
    pub status: HealthStatus,
}

/// Flag categories whose current-month spend runs hot against their
/// trailing average. Expects buckets oldest-first with the current month
/// last (as produced by `monthly_points`). Categories with no activity in
/// either window are dropped; the rest are sorted by current spend
/// descending and cut to the top 6.
pub fn category_health(points: &[MonthPoint]) -> Vec<CategoryHealth> {
    let Some((current_month, rest)) = points.split_last() else {
        return Vec::new();
    };
    let trailing: &[MonthPoint] = if rest.len() > TRAILING_MONTHS {
        &rest[rest.len() - TRAILING_MONTHS..]
    } else {
        rest
    };
    let denominator = trailing.len().max(1) as f64;

    let mut entries: Vec<CategoryHealth> = Vec::new();
    for category in ALL_CATEGORIES {
        let current = current_month.category_expense(category);
        let trailing_sum: f64 = trailing.iter().map(|p| p.category_expense(category)).sum();
        let trailing_avg = trailing_sum / denominator;

        if current == 0.0 && trailing_avg == 0.0 {
            continue;
        }

        let ratio = if trailing_avg > 0.0 {
            current / trailing_avg
        } else if current > 0.0 {
            // Spending with no history: flag as elevated
            2.0
        } else {
            1.0
        };

        entries.push(CategoryHealth {
            category,
            current,
            trailing_avg,
            status: HealthStatus::from_ratio(ratio),
        });
    }

    // Ties broken by scan order so repeated runs are byte-identical
    entries.sort_by(|a, b| {
        b.current
            .partial_cmp(&a.current)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.scan_index().cmp(&b.category.scan_index()))
    });
    entries.truncate(HEALTH_TOP_N);
    entries
}
