//! Transaction table domain logic for the ledger.
//!
//! Turns the view pipeline's projection into display-ready strings: signed
//! currency amounts for rows, unsigned totals for the summary cards, and the
//! placeholder shown when nothing is visible.
//!
//! ## Formatting rules
//!
//! - Row amounts carry an explicit sign: `+₹5,000`, `-₹50.5`
//! - Balance is signed only when negative: `₹4,950`, `-₹120`
//! - Income and expense totals are shown as magnitudes: `₹5,000`, `₹50`
//! - Thousands are grouped with commas; fractions keep at most
//!   `max_fraction_digits` digits with trailing zeros dropped

use crate::domain::models::{Totals, Transaction, TransactionType};
use crate::domain::view_pipeline::VisibleTransactions;
use shared::{FormattedTotals, FormattedTransaction, TransactionListState, TransactionType as SharedTransactionType};

pub const EMPTY_LIST_MESSAGE: &str = "No transactions to show.";

/// Configuration for transaction table display
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionTableConfig {
    pub currency_symbol: String,
    /// Fraction digits kept before trailing zeros are trimmed. Defaults to 2
    /// for money display; the browser's `toLocaleString()` shows up to 3, so
    /// set 3 to reproduce that rendering.
    pub max_fraction_digits: usize,
}

impl Default for TransactionTableConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            max_fraction_digits: 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionTableService {
    config: TransactionTableConfig,
}

impl TransactionTableService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TransactionTableConfig) -> Self {
        Self { config }
    }

    /// Build the list state for the renderer
    pub fn list_state(&self, visible: &VisibleTransactions) -> TransactionListState {
        match visible {
            VisibleTransactions::Empty => TransactionListState::Empty {
                message: EMPTY_LIST_MESSAGE.to_string(),
            },
            VisibleTransactions::Transactions(transactions) => TransactionListState::Transactions {
                rows: self.format_transactions(transactions),
            },
        }
    }

    pub fn format_transactions(&self, transactions: &[Transaction]) -> Vec<FormattedTransaction> {
        transactions
            .iter()
            .map(|tx| self.format_single_transaction(tx))
            .collect()
    }

    pub fn format_single_transaction(&self, transaction: &Transaction) -> FormattedTransaction {
        FormattedTransaction {
            id: transaction.id().to_string(),
            title: transaction.title().to_string(),
            formatted_amount: self.format_amount(transaction.amount()),
            category: transaction.category().to_string(),
            date: transaction.date().format("%Y-%m-%d").to_string(),
            amount_class: match transaction.transaction_type() {
                TransactionType::Income => SharedTransactionType::Income,
                TransactionType::Expense => SharedTransactionType::Expense,
            },
            raw_amount: transaction.amount(),
        }
    }

    /// Signed row amount: `+₹1,200` or `-₹50`
    pub fn format_amount(&self, amount: f64) -> String {
        let sign = if amount > 0.0 { "+" } else { "-" };
        format!("{}{}{}", sign, self.config.currency_symbol, self.format_number(amount.abs()))
    }

    pub fn format_totals(&self, totals: &Totals) -> FormattedTotals {
        FormattedTotals {
            balance: self.format_balance(totals.balance),
            income: format!("{}{}", self.config.currency_symbol, self.format_number(totals.income.abs())),
            expense: format!("{}{}", self.config.currency_symbol, self.format_number(totals.expense.abs())),
        }
    }

    /// Balance keeps a minus sign when negative and has no sign otherwise
    pub fn format_balance(&self, balance: f64) -> String {
        let magnitude = self.format_number(balance.abs());
        if balance < 0.0 && magnitude != "0" {
            format!("-{}{}", self.config.currency_symbol, magnitude)
        } else {
            format!("{}{}", self.config.currency_symbol, magnitude)
        }
    }

    /// Group thousands and trim the fraction of a non-negative number
    pub fn format_number(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.config.max_fraction_digits, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };

        let digits: Vec<char> = int_part.chars().collect();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(*digit);
        }

        if frac_part.is_empty() {
            grouped
        } else {
            format!("{}.{}", grouped, frac_part)
        }
    }
}
