//! Seed data loaded into every new session
//!
//! Seed records use fixed IDs whose short form is `txn-0000000N` /
//! `bud-0000000N`, so they can be referred to from the command line.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{FinboardError, FinboardResult};
use crate::models::{
    Budget, BudgetId, Category, CategorySuggestion, Money, PaymentMethod, Transaction,
    TransactionId,
};

/// UUID whose first eight hex digits spell `n`
fn seed_uuid(n: u32) -> Uuid {
    Uuid::from_u128((u128::from(n) << 96) | 0x0000_4000_8000_0000_0000_0000)
}

pub fn seed_transaction_id(n: u32) -> TransactionId {
    TransactionId::from_uuid(seed_uuid(n))
}

pub fn seed_budget_id(n: u32) -> BudgetId {
    BudgetId::from_uuid(seed_uuid(n))
}

fn day(year: i32, month: u32, day: u32) -> FinboardResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| FinboardError::InvalidArgument(format!("{year}-{month}-{day}")))
}

struct SeedTransaction {
    date: (i32, u32, u32),
    description: &'static str,
    category: Category,
    cents: i64,
    payment_method: PaymentMethod,
    payment_ref: Option<&'static str>,
    suggestion: Option<(Category, f64)>,
}

const fn expense(
    date: (i32, u32, u32),
    description: &'static str,
    category: Category,
    cents: i64,
    payment_method: PaymentMethod,
) -> SeedTransaction {
    SeedTransaction {
        date,
        description,
        category,
        cents,
        payment_method,
        payment_ref: None,
        suggestion: None,
    }
}

/// Seed ledger, most recent first
const TRANSACTIONS: &[SeedTransaction] = &[
    SeedTransaction {
        payment_ref: Some("freshmart@upi"),
        suggestion: Some((Category::Food, 0.92)),
        ..expense((2025, 5, 18), "Grocery Store", Category::Other, 6_475, PaymentMethod::MobilePayment)
    },
    expense((2025, 5, 17), "Monthly Salary", Category::Income, 250_000, PaymentMethod::BankTransfer),
    SeedTransaction {
        payment_ref: Some("chaiwala@okaxis"),
        suggestion: Some((Category::Dining, 0.64)),
        ..expense((2025, 5, 16), "Chai & Snacks", Category::Other, 350, PaymentMethod::MobilePayment)
    },
    expense((2025, 5, 15), "Electric Bill", Category::Utilities, 8_520, PaymentMethod::AutomaticPayment),
    expense((2025, 5, 15), "Grocery Shopping", Category::Food, 8_543, PaymentMethod::CreditCard),
    expense((2025, 5, 14), "Monthly Rent", Category::Housing, 120_000, PaymentMethod::BankTransfer),
    SeedTransaction {
        suggestion: Some((Category::Shopping, 0.78)),
        ..expense((2025, 5, 14), "Department Store", Category::Other, 12_999, PaymentMethod::CreditCard)
    },
    expense((2025, 5, 12), "Gasoline", Category::Transportation, 4_565, PaymentMethod::DebitCard),
    expense((2025, 5, 10), "Restaurant Dinner", Category::Dining, 7_890, PaymentMethod::CreditCard),
    expense((2025, 5, 8), "Internet Bill", Category::Utilities, 5_999, PaymentMethod::AutomaticPayment),
    expense((2025, 4, 30), "Monthly Salary", Category::Income, 250_000, PaymentMethod::BankTransfer),
    expense((2025, 4, 28), "Streaming Service", Category::Subscriptions, 1_599, PaymentMethod::CreditCard),
    expense((2025, 4, 15), "Monthly Rent", Category::Housing, 120_000, PaymentMethod::BankTransfer),
];

/// (category, allocated dollars, spent dollars), in display order
const BUDGETS: &[(Category, i64, i64)] = &[
    (Category::Food, 500, 320),
    (Category::Transportation, 300, 250),
    (Category::Entertainment, 200, 210),
    (Category::Shopping, 400, 150),
    (Category::Utilities, 250, 230),
];

/// Build the seed ledger, most recent first
pub fn seed_transactions() -> FinboardResult<Vec<Transaction>> {
    TRANSACTIONS
        .iter()
        .zip(1..)
        .map(|(seed, n)| {
            let (y, m, d) = seed.date;
            let mut txn = Transaction::new(
                day(y, m, d)?,
                seed.description,
                seed.category,
                Money::from_cents(seed.cents),
                seed.payment_method,
            )
            .with_id(seed_transaction_id(n));

            if seed.category.is_income() {
                txn = txn.as_income();
            }
            if let Some(payment_ref) = seed.payment_ref {
                txn = txn.with_payment_ref(payment_ref);
            }
            if let Some((category, confidence)) = seed.suggestion {
                txn = txn.with_suggestion(CategorySuggestion::new(category, confidence)?);
            }
            Ok(txn)
        })
        .collect()
}

/// Build the seed budgets
pub fn seed_budgets() -> FinboardResult<Vec<Budget>> {
    BUDGETS
        .iter()
        .zip(1..)
        .map(|(&(category, allocated, spent), n)| {
            Ok(Budget::new(
                category,
                Money::from_dollars_cents(allocated, 0),
                Money::from_dollars_cents(spent, 0),
            )?
            .with_id(seed_budget_id(n)))
        })
        .collect()
}
