//! Finboard - a personal finance dashboard core
//!
//! This library holds everything behind the `finboard` command: seeded
//! expense and budget records, budget aggregation, category suggestions,
//! reports and exports, all scoped to a [`session::Session`]. The only state
//! that survives a restart is the login flag.
//!
//! # Architecture
//!
//! - `models`: money, categories, transactions, budgets and suggestions
//! - `storage`: the in-memory record store, seed data and the login flag
//! - `services`: aggregation, expenses, budgets and suggestion acceptance
//! - `reports`: dashboard, spending, monthly trend and month navigation
//! - `display`: currency/percentage formatting and terminal tables
//! - `export`: CSV, JSON and YAML output
//! - `audit`: the activity log
//! - `config`: paths and settings
//! - `cli`: the clap command tree and interactive shell
//!
//! # Example
//!
//! ```rust,no_run
//! use finboard::config::{FinboardPaths, Settings};
//! use finboard::session::Session;
//!
//! # fn main() -> finboard::error::FinboardResult<()> {
//! let paths = FinboardPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut session = Session::start(paths, settings)?;
//! session.login()?;
//! let overview = session.budget_service()?.overview()?;
//! println!("{} remaining", overview.totals.total_remaining);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{FinboardError, FinboardResult};
pub use session::Session;
