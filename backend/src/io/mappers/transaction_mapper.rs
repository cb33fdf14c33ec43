use crate::domain::commands::transactions::AddTransactionCommand;
use crate::domain::models::{
    Totals, Transaction as DomainTransaction, TransactionType as DomainTransactionType,
};
use shared::{
    LedgerTotals, SubmitTransactionRequest, Transaction as SharedTransaction,
    TransactionType as SharedTransactionType,
};

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(domain: &DomainTransaction) -> SharedTransaction {
        SharedTransaction {
            id: domain.id().to_string(),
            title: domain.title().to_string(),
            amount: domain.amount(),
            category: domain.category().to_string(),
            date: domain.date().format("%Y-%m-%d").to_string(),
            transaction_type: Self::to_dto_type(domain.transaction_type()),
        }
    }

    pub fn to_add_command(request: SubmitTransactionRequest) -> AddTransactionCommand {
        AddTransactionCommand {
            title: request.title,
            amount: request.amount,
            category: request.category,
            date: request.date,
            transaction_type: request.transaction_type,
        }
    }

    pub fn totals_to_dto(totals: &Totals) -> LedgerTotals {
        LedgerTotals {
            balance: totals.balance,
            income: totals.income,
            expense: totals.expense,
        }
    }

    fn to_dto_type(domain_type: DomainTransactionType) -> SharedTransactionType {
        match domain_type {
            DomainTransactionType::Income => SharedTransactionType::Income,
            DomainTransactionType::Expense => SharedTransactionType::Expense,
        }
    }
}
