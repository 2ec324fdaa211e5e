//! CLI commands for reports

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::format_share;
use crate::error::FinboardResult;
use crate::reports::{MonthlyTrend, ReportMonth, ReportPeriod, SpendingReport};
use crate::session::Session;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending by category over a period
    Spending {
        /// last-7-days, last-30-days, this-month, last-month, last-3-months or this-year
        #[arg(short, long, default_value = "this-month")]
        period: ReportPeriod,

        /// Reference date the period is relative to (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },

    /// Spending per month with the monthly average
    Monthly,

    /// Spending for one month, with navigation
    Month {
        /// Month as YYYY-MM or "May 2025" (default: this month)
        #[arg(short, long)]
        month: Option<ReportMonth>,

        /// Show the month before --month
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Show the month after --month
        #[arg(long)]
        next: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(session: &mut Session, cmd: ReportCommands) -> FinboardResult<()> {
    let currency = session.settings().currency;
    let records = session.records()?;

    match cmd {
        ReportCommands::Spending { period, as_of, top } => {
            let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
            let (start, end) = period.date_range(as_of)?;
            let report = SpendingReport::generate(records, start, end);

            println!("{}", period.label());
            match top {
                Some(limit) => {
                    println!("Top {} categories:", limit);
                    for row in report.top_categories(limit) {
                        println!(
                            "  {} {:<17} {:>14} {:>8}",
                            row.category.icon(),
                            row.category.label(),
                            row.total_spending.format_currency(currency),
                            format_share(row.total_spending, report.total_spending)
                        );
                    }
                }
                None => print!("{}", report.format_terminal(currency)),
            }
        }

        ReportCommands::Monthly => {
            print!("{}", MonthlyTrend::generate(records).format_terminal(currency));
        }

        ReportCommands::Month { month, prev, next } => {
            let base = month.unwrap_or_else(|| ReportMonth::of(Local::now().date_naive()));
            let month = if prev {
                base.prev()
            } else if next {
                base.next()
            } else {
                base
            };

            let report = SpendingReport::generate(records, month.first_day()?, month.last_day()?);
            println!("{}", month);
            print!("{}", report.format_terminal(currency));
            println!();
            println!(
                "Previous: {}   Next: {}",
                month.prev().key(),
                month.next().key()
            );
        }
    }

    Ok(())
}
