//! View pipeline: derives the visible transaction list and totals from the
//! ledger and the current view state.
//!
//! Everything here is a pure function of its inputs and is simply re-run
//! after every change; nothing is cached. Note the deliberate asymmetry:
//! the visible list honours filter and search, the totals never do.

use crate::domain::models::{Totals, Transaction, TransactionType, ViewState};
use shared::FilterType;

/// The visible sequence, with "nothing to show" as its own state
#[derive(Debug, Clone, PartialEq)]
pub enum VisibleTransactions {
    Empty,
    Transactions(Vec<Transaction>),
}

impl VisibleTransactions {
    fn from_vec(transactions: Vec<Transaction>) -> Self {
        if transactions.is_empty() {
            VisibleTransactions::Empty
        } else {
            VisibleTransactions::Transactions(transactions)
        }
    }

    pub fn as_slice(&self) -> &[Transaction] {
        match self {
            VisibleTransactions::Empty => &[],
            VisibleTransactions::Transactions(transactions) => transactions,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, VisibleTransactions::Empty)
    }
}

/// A complete projection for one render
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerView {
    pub visible: VisibleTransactions,
    pub totals: Totals,
}

pub struct ViewPipeline;

impl ViewPipeline {
    /// Filter, search and sort a snapshot of the ledger.
    ///
    /// The sort is by date, most recent first, and stable: transactions on the
    /// same date keep their ledger order.
    pub fn visible_transactions(ledger: &[Transaction], view: &ViewState) -> Vec<Transaction> {
        let needle = view.search_needle();

        let mut visible: Vec<Transaction> = ledger
            .iter()
            .filter(|tx| Self::matches_filter(tx, view.filter_type()))
            .filter(|tx| match &needle {
                Some(needle) => Self::matches_search(tx, needle),
                None => true,
            })
            .cloned()
            .collect();

        visible.sort_by(|a, b| b.date().cmp(&a.date()));
        visible
    }

    /// Totals over the entire ledger
    pub fn totals(ledger: &[Transaction]) -> Totals {
        Totals::from_transactions(ledger)
    }

    pub fn project(ledger: &[Transaction], view: &ViewState) -> LedgerView {
        LedgerView {
            visible: VisibleTransactions::from_vec(Self::visible_transactions(ledger, view)),
            totals: Self::totals(ledger),
        }
    }

    fn matches_filter(transaction: &Transaction, filter_type: FilterType) -> bool {
        match filter_type {
            FilterType::All => true,
            FilterType::Income => transaction.transaction_type() == TransactionType::Income,
            FilterType::Expense => transaction.transaction_type() == TransactionType::Expense,
        }
    }

    /// `needle` is already trimmed and lower-cased
    fn matches_search(transaction: &Transaction, needle: &str) -> bool {
        transaction.title().to_lowercase().contains(needle)
            || transaction.category().to_lowercase().contains(needle)
    }
}
