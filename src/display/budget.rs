//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetSeverity, Currency};
use crate::services::{BudgetOverview, BudgetSummary};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Ten-cell usage bar, e.g. `[██████░░░░]`
pub fn progress_bar(percentage: u8) -> String {
    let filled = usize::from(percentage.min(100)) / 10;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(10 - filled))
}

fn severity_label(severity: BudgetSeverity) -> &'static str {
    match severity {
        BudgetSeverity::OnTrack => "On track",
        BudgetSeverity::Warning => "⚠ Warning",
        BudgetSeverity::Overspent => "✗ Overspent",
    }
}

fn row(summary: &BudgetSummary, currency: Currency) -> BudgetRow {
    let budget = &summary.budget;
    BudgetRow {
        category: format!("{} {}", summary.category.icon(), summary.category),
        spent: budget.spent().format_currency(currency),
        allocated: budget.allocated().format_currency(currency),
        remaining: summary.remaining.format_currency(currency),
        used: format!(
            "{} {}%",
            progress_bar(summary.percentage_used),
            summary.percentage_used
        ),
        status: severity_label(summary.severity).to_string(),
    }
}

/// Format budget rows as a table
pub fn format_budget_table(summaries: &[BudgetSummary], currency: Currency) -> String {
    if summaries.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let rows = summaries.iter().map(|s| row(s, currency));
    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Format the budget page: table plus totals
pub fn format_budget_overview(overview: &BudgetOverview, currency: Currency) -> String {
    let mut output = format_budget_table(&overview.budgets, currency);
    let totals = &overview.totals;

    output.push('\n');
    output.push_str(&format!(
        "Total Budget:     {}\n",
        totals.total_allocated.format_currency(currency)
    ));
    output.push_str(&format!(
        "Total Spent:      {}\n",
        totals.total_spent.format_currency(currency)
    ));
    output.push_str(&format!(
        "Remaining:        {}\n",
        totals.total_remaining.format_currency(currency)
    ));
    if let Some(pct) = overview.total_percentage_used {
        output.push_str(&format!(
            "Used:             {} {}%\n",
            progress_bar(pct),
            pct
        ));
    }

    output
}
