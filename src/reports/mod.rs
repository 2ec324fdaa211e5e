//! Reports module for Finboard
//!
//! Dashboard summary, spending by category, monthly trend and the report
//! periods they are computed over.

pub mod dashboard;
pub mod monthly;
pub mod period;
pub mod spending;

pub use dashboard::{greeting_for_hour, DashboardSummary, RecentTransaction};
pub use monthly::{MonthlyTotal, MonthlyTrend};
pub use period::{ReportMonth, ReportPeriod};
pub use spending::{SpendingByCategory, SpendingReport};
