//! clarity-core: categorization and period-analytics engine for the
//! Clarity finance tracker. Pure functions over already-fetched data; the
//! caller owns storage, transport, and what "today" means.

pub mod advice;
pub mod budget;
pub mod categorizer;
pub mod category;
pub mod confidence;
pub mod health;
pub mod insights;
pub mod keywords;
pub mod period;
pub mod summary;
pub mod transaction;
pub mod trend;

pub use advice::{DailyAdvice, daily_advice};
pub use budget::{Budget, BudgetStatus, budget_status};
pub use categorizer::{CategoryDecision, resolve_category};
pub use category::{ALL_CATEGORIES, Category, TransactionType};
pub use confidence::{ConfidenceReport, confidence};
pub use health::{CategoryHealth, HealthStatus, category_health};
pub use insights::{DashboardIntelligence, dashboard_intelligence, explain_summary};
pub use keywords::{KEYWORD_TABLE, KeywordMatch, detect_category};
pub use period::{BudgetPeriod, PeriodRange, resolve_range};
pub use summary::{Summary, summarize};
pub use transaction::{DailyPreset, Transaction};
pub use trend::{MonthPoint, TREND_MONTHS, TrendPoint, monthly_points, monthly_trend};
