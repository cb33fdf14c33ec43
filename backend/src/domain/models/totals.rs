//! Aggregate totals over a ledger.
use super::transaction::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    /// Sum of negative amounts, so always zero or below
    pub expense: f64,
    pub balance: f64,
}

impl Totals {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let income: f64 = transactions
            .iter()
            .filter(|t| t.amount() > 0.0)
            .map(Transaction::amount)
            .sum();
        let expense: f64 = transactions
            .iter()
            .filter(|t| t.amount() < 0.0)
            .map(Transaction::amount)
            .sum();
        Self {
            income,
            expense,
            balance: income + expense,
        }
    }
}
