pub mod totals;
pub mod transaction;
pub mod view_state;

pub use totals::Totals;
pub use transaction::{Transaction, TransactionType};
pub use view_state::ViewState;
