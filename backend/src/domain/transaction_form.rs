//! Transaction form validation for the ledger.
//!
//! Turns the raw text fields of the "add transaction" form into a validated,
//! strongly typed input. The UI only collects strings; every rule about what
//! makes a submission acceptable lives here.

use crate::domain::commands::transactions::AddTransactionCommand;
use crate::domain::errors::ValidationError;
use crate::domain::models::TransactionType;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form input that passed validation. `amount` is still the raw parsed value;
/// the sign convention is applied when the transaction is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTransaction {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub transaction_type: TransactionType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFormConfig {
    /// Currency symbol users may type in the amount field
    pub currency_symbol: String,
    /// Largest accepted absolute amount; keeps ledger totals finite
    pub max_amount: f64,
}

impl Default for TransactionFormConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            max_amount: 1_000_000_000_000.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionFormService {
    config: TransactionFormConfig,
}

impl TransactionFormService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TransactionFormConfig) -> Self {
        Self { config }
    }

    /// Validate a submitted form. Fields are checked in form order and the first
    /// failure is reported.
    pub fn validate(&self, command: &AddTransactionCommand) -> Result<ValidatedTransaction, ValidationError> {
        let title = command.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let amount = self.clean_and_parse_amount(&command.amount)?;

        let category = command.category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let date_input = command.date.trim();
        if date_input.is_empty() {
            return Err(ValidationError::EmptyDate);
        }
        let date = NaiveDate::parse_from_str(date_input, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(date_input.to_string()))?;

        let type_input = command.transaction_type.trim();
        if type_input.is_empty() {
            return Err(ValidationError::EmptyType);
        }
        let transaction_type = TransactionType::parse(type_input)
            .ok_or_else(|| ValidationError::InvalidType(type_input.to_string()))?;

        Ok(ValidatedTransaction {
            title: title.to_string(),
            amount,
            category: category.to_string(),
            date,
            transaction_type,
        })
    }

    /// Parse an amount field, tolerating a currency symbol, thousands separators and spaces.
    pub fn clean_and_parse_amount(&self, amount_input: &str) -> Result<f64, ValidationError> {
        let cleaned = amount_input
            .trim()
            .replace(&self.config.currency_symbol, "")
            .replace(',', "")
            .replace(' ', "");

        if cleaned.is_empty() {
            return Err(ValidationError::InvalidAmount(amount_input.to_string()));
        }

        let amount = cleaned
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidAmount(amount_input.to_string()))?;

        // "inf" and "NaN" parse successfully but are not amounts
        if !amount.is_finite() {
            return Err(ValidationError::InvalidAmount(amount_input.to_string()));
        }
        if amount == 0.0 {
            return Err(ValidationError::ZeroAmount);
        }
        if amount.abs() > self.config.max_amount {
            return Err(ValidationError::AmountTooLarge(self.config.max_amount));
        }
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(title: &str, amount: &str, category: &str, date: &str, tx_type: &str) -> AddTransactionCommand {
        AddTransactionCommand {
            title: title.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            transaction_type: tx_type.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let service = TransactionFormService::new();
        let validated = service
            .validate(&command("  Salary ", "5000", " Job", "2024-01-01", "income"))
            .unwrap();
        assert_eq!(validated.title, "Salary");
        assert_eq!(validated.category, "Job");
        assert_eq!(validated.amount, 5000.0);
        assert_eq!(validated.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(validated.transaction_type, TransactionType::Income);
    }

    #[test]
    fn test_each_field_rejected() {
        let service = TransactionFormService::new();
        let cases = [
            (command("   ", "5", "Food", "2024-01-01", "expense"), ValidationError::EmptyTitle),
            (
                command("Tea", "abc", "Food", "2024-01-01", "expense"),
                ValidationError::InvalidAmount("abc".to_string()),
            ),
            (command("Tea", "0", "Food", "2024-01-01", "expense"), ValidationError::ZeroAmount),
            (command("Tea", "5", "", "2024-01-01", "expense"), ValidationError::EmptyCategory),
            (command("Tea", "5", "Food", "", "expense"), ValidationError::EmptyDate),
            (
                command("Tea", "5", "Food", "2024-02-30", "expense"),
                ValidationError::InvalidDate("2024-02-30".to_string()),
            ),
            (command("Tea", "5", "Food", "2024-01-01", ""), ValidationError::EmptyType),
            (
                command("Tea", "5", "Food", "2024-01-01", "transfer"),
                ValidationError::InvalidType("transfer".to_string()),
            ),
        ];
        for (cmd, expected) in cases {
            assert_eq!(service.validate(&cmd), Err(expected));
        }
    }

    #[test]
    fn test_amount_cleaning() {
        let service = TransactionFormService::new();
        assert_eq!(service.clean_and_parse_amount("₹1,250.50").unwrap(), 1250.5);
        assert_eq!(service.clean_and_parse_amount(" -42 ").unwrap(), -42.0);
        assert!(service.clean_and_parse_amount("inf").is_err());
        assert!(service.clean_and_parse_amount("NaN").is_err());
        assert!(service.clean_and_parse_amount("").is_err());
    }

    #[test]
    fn test_custom_currency_symbol() {
        let service = TransactionFormService::with_config(TransactionFormConfig {
            currency_symbol: "$".to_string(),
            ..TransactionFormConfig::default()
        });
        assert_eq!(service.clean_and_parse_amount("$12.00").unwrap(), 12.0);
    }

    #[test]
    fn test_amount_upper_bound() {
        let service = TransactionFormService::new();
        assert_eq!(
            service.clean_and_parse_amount("₹1,000,000,000,000").unwrap(),
            1_000_000_000_000.0
        );
        assert_eq!(
            service.clean_and_parse_amount("1e308"),
            Err(ValidationError::AmountTooLarge(1_000_000_000_000.0))
        );
        assert_eq!(
            service.clean_and_parse_amount("-1e308"),
            Err(ValidationError::AmountTooLarge(1_000_000_000_000.0))
        );

        let small = TransactionFormService::with_config(TransactionFormConfig {
            max_amount: 100.0,
            ..TransactionFormConfig::default()
        });
        assert!(small.clean_and_parse_amount("100").is_ok());
        assert_eq!(
            small.clean_and_parse_amount("100.01"),
            Err(ValidationError::AmountTooLarge(100.0))
        );
    }
}
