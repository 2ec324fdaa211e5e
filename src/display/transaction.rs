//! Transaction display formatting

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Currency, Transaction};
use crate::services::{PendingSuggestion, SuggestionTracker};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

/// Render `date` with a strftime format, falling back to ISO dates when the
/// format is invalid
fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(date_format)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

/// Format transactions as a table, flagging pending suggestions with `*`
pub fn format_transaction_table(
    transactions: &[Transaction],
    tracker: &SuggestionTracker,
    currency: Currency,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| {
        let marker = if tracker.has_pending_suggestion(txn) { " *" } else { "" };
        let payment = match &txn.payment_ref {
            Some(r) => format!("{} ({})", txn.payment_method, r),
            None => txn.payment_method.to_string(),
        };
        TransactionRow {
            id: txn.id.to_string(),
            date: format_date(txn.date, date_format),
            description: truncate(&txn.description, 28),
            category: format!("{} {}{}", txn.category.icon(), txn.category, marker),
            payment,
            amount: txn.format_signed(currency),
        }
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Format one transaction in detail
pub fn format_transaction_details(
    txn: &Transaction,
    tracker: &SuggestionTracker,
    currency: Currency,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Amount:      {}\n", txn.format_signed(currency)));
    output.push_str(&format!(
        "Category:    {} {}\n",
        txn.category.icon(),
        txn.category
    ));
    output.push_str(&format!("Payment:     {}\n", txn.payment_method));
    if let Some(payment_ref) = &txn.payment_ref {
        output.push_str(&format!("Payment Ref: {}\n", payment_ref));
    }
    if let Some(suggestion) = &txn.suggested_category {
        output.push_str(&format!(
            "Suggestion:  {} ({} confidence, {})\n",
            suggestion.category,
            suggestion.confidence,
            tracker.state_of(txn)
        ));
    }

    output
}

#[derive(Tabled)]
struct SuggestionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Suggested")]
    suggested: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

/// Format pending suggestions as a table
pub fn format_suggestion_table(pending: &[PendingSuggestion]) -> String {
    if pending.is_empty() {
        return "No pending category suggestions.\n".to_string();
    }

    let rows = pending.iter().map(|p| SuggestionRow {
        id: p.transaction.id.to_string(),
        description: truncate(&p.transaction.description, 28),
        current: p.transaction.category.to_string(),
        suggested: format!("{} {}", p.suggestion.category.icon(), p.suggestion.category),
        confidence: p.suggestion.confidence.to_string(),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::services::SuggestionService;
    use crate::storage::RecordStore;

    #[test]
    fn test_table_marks_pending_suggestions() {
        let records = RecordStore::seeded().unwrap();
        let tracker = SuggestionTracker::new();
        let output =
            format_transaction_table(records.transactions(), &tracker, Currency::Usd, "%Y-%m-%d");

        assert!(output.contains("Grocery Store"));
        assert!(output.contains("Other *"));
        assert!(output.contains("-$64.75"));
        assert!(output.contains("+$2,500.00"));
        assert!(output.contains("Mobile Payment (freshmart@upi)"));
    }

    #[test]
    fn test_invalid_date_format_falls_back_to_iso() {
        let records = RecordStore::seeded().unwrap();
        let tracker = SuggestionTracker::new();
        let first = &records.transactions()[..1];

        let output = format_transaction_table(first, &tracker, Currency::Usd, "%Q");
        assert!(output.contains("2025-05-18"));

        let output = format_transaction_table(first, &tracker, Currency::Usd, "%d/%m/%Y");
        assert!(output.contains("18/05/2025"));
    }

    #[test]
    fn test_empty_table() {
        let output = format_transaction_table(&[], &SuggestionTracker::new(), Currency::Usd, "%Y-%m-%d");
        assert_eq!(output, "No transactions found.\n");
    }

    #[test]
    fn test_details_show_suggestion_state() {
        let records = RecordStore::seeded().unwrap();
        let tracker = SuggestionTracker::new();
        let details = format_transaction_details(&records.transactions()[0], &tracker, Currency::Eur);

        assert!(details.contains("Amount:      -€64.75"));
        assert!(details.contains("Suggestion:  Food (92% confidence, Pending)"));
    }

    #[test]
    fn test_suggestion_table() {
        let mut records = RecordStore::seeded().unwrap();
        let mut tracker = SuggestionTracker::new();
        let mut audit = AuditLogger::in_memory();
        let service = SuggestionService::new(&mut records, &mut tracker, &mut audit);

        let output = format_suggestion_table(&service.pending());
        assert!(output.contains("txn-00000001"));
        assert!(output.contains("92%"));
        assert_eq!(format_suggestion_table(&[]), "No pending category suggestions.\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 6), "a ver…");
    }
}
