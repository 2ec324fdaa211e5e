//! CSV Export functionality
//!
//! Transactions and budgets as spreadsheet-friendly CSV. Amounts are plain
//! decimals without symbols or grouping.

use std::io::Write;

use crate::error::{FinboardError, FinboardResult};
use crate::models::{Budget, Money, Transaction};

const TRANSACTION_HEADER: [&str; 8] = [
    "ID",
    "Date",
    "Description",
    "Category",
    "Amount",
    "Type",
    "Payment Method",
    "Payment Ref",
];

const BUDGET_HEADER: [&str; 6] = [
    "ID",
    "Category",
    "Allocated",
    "Spent",
    "Remaining",
    "Percent Used",
];

fn export_err(e: impl std::fmt::Display) -> FinboardError {
    FinboardError::Export(e.to_string())
}

/// `-12.34` style decimal
fn decimal(amount: Money) -> String {
    let magnitude = amount.cents().unsigned_abs();
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
}

/// Export transactions to CSV, in the order given
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinboardResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(TRANSACTION_HEADER).map_err(export_err)?;

    for txn in transactions {
        let id = txn.id.as_uuid().to_string();
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = decimal(txn.amount);
        let kind = if txn.is_income { "Income" } else { "Expense" };
        csv.write_record([
            id.as_str(),
            date.as_str(),
            txn.description.as_str(),
            txn.category.label(),
            amount.as_str(),
            kind,
            txn.payment_method.label(),
            txn.payment_ref.as_deref().unwrap_or(""),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)
}

/// Export budgets with their derived figures to CSV
pub fn export_budgets_csv<W: Write>(budgets: &[Budget], writer: W) -> FinboardResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(BUDGET_HEADER).map_err(export_err)?;

    for budget in budgets {
        csv.write_record([
            budget.id().as_uuid().to_string(),
            budget.category().label().to_string(),
            decimal(budget.allocated()),
            decimal(budget.spent()),
            decimal(budget.remaining()),
            budget.percentage_used()?.to_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RecordStore;

    fn to_string(f: impl FnOnce(&mut Vec<u8>) -> FinboardResult<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_decimal() {
        assert_eq!(decimal(Money::from_cents(6475)), "64.75");
        assert_eq!(decimal(Money::from_cents(-1000)), "-10.00");
        assert_eq!(decimal(Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_export_transactions() {
        let records = RecordStore::seeded().unwrap();
        let output = to_string(|w| export_transactions_csv(records.transactions(), w));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "ID,Date,Description,Category,Amount,Type,Payment Method,Payment Ref"
        );
        assert_eq!(lines.len(), records.len() + 1);
        assert!(lines[1]
            .ends_with(",2025-05-18,Grocery Store,Other,64.75,Expense,Mobile Payment,freshmart@upi"));
        assert!(lines[2].contains("Monthly Salary,Income,2500.00,Income,Bank Transfer,"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let records = RecordStore::seeded().unwrap();
        let mut txn = records.transactions()[0].clone();
        txn.description = "Bread, milk".into();

        let output = to_string(|w| export_transactions_csv(std::slice::from_ref(&txn), w));
        assert!(output.contains("\"Bread, milk\""));
    }

    #[test]
    fn test_export_budgets() {
        let records = RecordStore::seeded().unwrap();
        let output = to_string(|w| export_budgets_csv(records.budgets(), w));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "ID,Category,Allocated,Spent,Remaining,Percent Used");
        assert!(lines[1].ends_with(",Food,500.00,320.00,180.00,64"));
        assert!(lines[3].ends_with(",210.00,-10.00,100"));
    }
}
