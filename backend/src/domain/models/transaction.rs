//! Domain model for a transaction.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse the form value of the type select. Matching is exact after trimming.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Apply the sign convention for this type to a raw amount
    pub fn signed_amount(&self, amount: f64) -> f64 {
        match self {
            TransactionType::Income => amount.abs(),
            TransactionType::Expense => -amount.abs(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense record.
///
/// Fields are read-only once constructed; the sign of `amount` always agrees with
/// `transaction_type` and the amount is never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    title: String,
    amount: f64,
    category: String,
    date: NaiveDate,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
}

impl Transaction {
    /// Build a transaction, normalizing the sign of `amount` to match `transaction_type`.
    pub fn new(
        id: String,
        title: String,
        amount: f64,
        category: String,
        date: NaiveDate,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id,
            title,
            amount: transaction_type.signed_amount(amount),
            category,
            date,
            transaction_type,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Check the record invariants. Used when records come from outside (deserialization).
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("transaction id is empty".to_string());
        }
        if self.title.trim().is_empty() {
            return Err(format!("transaction {} has an empty title", self.id));
        }
        if self.category.trim().is_empty() {
            return Err(format!("transaction {} has an empty category", self.id));
        }
        if !self.amount.is_finite() || self.amount == 0.0 {
            return Err(format!("transaction {} has invalid amount {}", self.id, self.amount));
        }
        let sign_matches = match self.transaction_type {
            TransactionType::Income => self.amount > 0.0,
            TransactionType::Expense => self.amount < 0.0,
        };
        if !sign_matches {
            return Err(format!(
                "transaction {} amount {} disagrees with type {}",
                self.id, self.amount, self.transaction_type
            ));
        }
        Ok(())
    }

    /// Generate a transaction ID from the current timestamp and a random component.
    /// Format: <base36 epoch millis><32 hex chars>
    /// Example: lr5q2x1c9f1b3c0e4a7d4b2e8c6f0a1d2e3f4a5b
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("{}{}", to_base36(timestamp_ms), Uuid::new_v4().simple())
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}
