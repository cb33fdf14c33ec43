use serde::{Deserialize, Serialize};
use std::fmt;

/// A recorded transaction as seen by the presentation layer.
///
/// Field names match the persisted record shape: `id, title, amount, category, date, type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    /// Signed amount (positive for income, negative for expense)
    pub amount: f64,
    pub category: String,
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// Kind of transaction, serialized as `"income"` / `"expense"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter applied to the visible transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    All,
    Income,
    Expense,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::All => "all",
            FilterType::Income => "income",
            FilterType::Expense => "expense",
        }
    }

    /// Parse the value of a filter select box. Unknown values fall back to `All`.
    pub fn from_select_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "income" => FilterType::Income,
            "expense" => FilterType::Expense,
            _ => FilterType::All,
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw form fields submitted by the user when adding a transaction.
///
/// Everything is kept as entered; the backend validates and normalizes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubmitTransactionRequest {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
}

/// Aggregate totals over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub balance: f64,
    pub income: f64,
    /// Sum of expense amounts (zero or negative)
    pub expense: f64,
}

/// Totals rendered as display strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTotals {
    pub balance: String,
    pub income: String,
    /// Absolute value of the expense total
    pub expense: String,
}

/// A transaction row prepared for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTransaction {
    pub id: String,
    pub title: String,
    pub formatted_amount: String,
    pub category: String,
    pub date: String,
    /// Style class for the amount cell (`income` or `expense`)
    pub amount_class: TransactionType,
    pub raw_amount: f64,
}

/// Visible transaction list, with the empty list as its own state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TransactionListState {
    /// Nothing matches; the renderer shows `message` as a placeholder
    Empty { message: String },
    Transactions { rows: Vec<FormattedTransaction> },
}

impl TransactionListState {
    pub fn is_empty(&self) -> bool {
        matches!(self, TransactionListState::Empty { .. })
    }

    pub fn rows(&self) -> &[FormattedTransaction] {
        match self {
            TransactionListState::Empty { .. } => &[],
            TransactionListState::Transactions { rows } => rows,
        }
    }
}

/// Everything the renderer needs after a state change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerViewResponse {
    pub list: TransactionListState,
    pub totals: LedgerTotals,
    pub formatted_totals: FormattedTotals,
    pub filter_type: FilterType,
    pub search_text: String,
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    Success,
    Info,
    Error,
}

/// A transient message for the notification collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: NotificationSeverity,
}
