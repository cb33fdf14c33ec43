//! Single entry point for user intents.
//!
//! The presentation layer never touches the ledger or the view state
//! directly. It sends a [`LedgerIntent`]; the dispatcher runs it to
//! completion, notifies, and re-renders from a fresh projection. Renderer
//! and notifier are optional: when one is not attached, that step is
//! skipped.

use log::{debug, info, warn};
use shared::{LedgerViewResponse, Notification, Transaction as SharedTransaction};

use super::collaborators::{LedgerRenderer, Notifier};
use super::mappers::TransactionMapper;
use crate::domain::commands::intents::{DispatchOutcome, LedgerIntent};
use crate::domain::commands::transactions::RemoveTransactionCommand;
use crate::domain::models::ViewState;
use crate::domain::{notifications, LedgerService, TransactionTableService, ViewPipeline};

pub struct IntentDispatcher {
    ledger: LedgerService,
    view_state: ViewState,
    table_service: TransactionTableService,
    renderer: Option<Box<dyn LedgerRenderer>>,
    notifier: Option<Box<dyn Notifier>>,
}

impl IntentDispatcher {
    pub fn new(ledger: LedgerService, table_service: TransactionTableService) -> Self {
        Self {
            ledger,
            view_state: ViewState::new(),
            table_service,
            renderer: None,
            notifier: None,
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn LedgerRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn set_renderer(&mut self, renderer: Option<Box<dyn LedgerRenderer>>) {
        self.renderer = renderer;
    }

    pub fn set_notifier(&mut self, notifier: Option<Box<dyn Notifier>>) {
        self.notifier = notifier;
    }

    pub fn ledger(&self) -> &LedgerService {
        &self.ledger
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// The whole ledger as wire records, in insertion order
    pub fn transactions(&self) -> Vec<SharedTransaction> {
        self.ledger.transactions().iter().map(TransactionMapper::to_dto).collect()
    }

    /// Handle one intent. Never fails; problems are reported as notifications.
    pub fn dispatch(&mut self, intent: LedgerIntent) -> DispatchOutcome {
        debug!("Dispatching {:?}", intent);
        let notifications = match intent {
            LedgerIntent::SubmitNewTransaction(request) => {
                let command = TransactionMapper::to_add_command(request);
                match self.ledger.add_transaction(command) {
                    Ok(result) => {
                        let mut sent = vec![notifications::transaction_added()];
                        if let Some(e) = result.persistence_error {
                            warn!("Transaction {} not persisted: {}", result.transaction.id(), e);
                            sent.push(notifications::storage_unavailable());
                        }
                        sent
                    }
                    Err(e) => {
                        info!("Transaction form rejected: {}", e);
                        vec![notifications::invalid_form()]
                    }
                }
            }
            LedgerIntent::DeleteTransaction { id } => {
                let result = self.ledger.remove_transaction(RemoveTransactionCommand { transaction_id: id });
                let mut sent = Vec::new();
                if result.removed {
                    sent.push(notifications::transaction_deleted());
                }
                if let Some(e) = result.persistence_error {
                    warn!("Deletion not persisted: {}", e);
                    sent.push(notifications::storage_unavailable());
                }
                sent
            }
            LedgerIntent::SetFilterType(filter_type) => {
                self.view_state.set_filter_type(filter_type);
                Vec::new()
            }
            LedgerIntent::SetSearchText(search_text) => {
                self.view_state.set_search_text(search_text);
                Vec::new()
            }
        };

        self.send_notifications(&notifications);
        let view = self.render();
        DispatchOutcome { notifications, view }
    }

    /// Projection of the current ledger and view state
    pub fn current_view(&self) -> LedgerViewResponse {
        let projection = ViewPipeline::project(self.ledger.transactions(), &self.view_state);
        LedgerViewResponse {
            list: self.table_service.list_state(&projection.visible),
            totals: TransactionMapper::totals_to_dto(&projection.totals),
            formatted_totals: self.table_service.format_totals(&projection.totals),
            filter_type: self.view_state.filter_type(),
            search_text: self.view_state.search_text().to_string(),
        }
    }

    /// Recompute the projection and hand it to the renderer, if one is attached
    pub fn render(&mut self) -> LedgerViewResponse {
        let view = self.current_view();
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&view);
        }
        view
    }

    fn send_notifications(&mut self, notifications: &[Notification]) {
        if let Some(notifier) = self.notifier.as_mut() {
            for notification in notifications {
                notifier.notify(notification);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::FailingStore;
    use crate::storage::{MemoryStore, TransactionRepository};
    use shared::{FilterType, NotificationSeverity, SubmitTransactionRequest};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingRenderer {
        views: Arc<Mutex<Vec<LedgerViewResponse>>>,
    }

    impl LedgerRenderer for RecordingRenderer {
        fn render(&mut self, view: &LedgerViewResponse) {
            self.views.lock().unwrap().push(view.clone());
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        received: Arc<Mutex<Vec<Notification>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, notification: &Notification) {
            self.received.lock().unwrap().push(notification.clone());
        }
    }

    fn submit(title: &str, amount: &str, category: &str, date: &str, tx_type: &str) -> LedgerIntent {
        LedgerIntent::SubmitNewTransaction(SubmitTransactionRequest {
            title: title.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            transaction_type: tx_type.to_string(),
        })
    }

    fn dispatcher() -> (IntentDispatcher, RecordingRenderer, RecordingNotifier) {
        let ledger = LedgerService::load(TransactionRepository::new(Arc::new(MemoryStore::new())));
        let renderer = RecordingRenderer::default();
        let notifier = RecordingNotifier::default();
        let dispatcher = IntentDispatcher::new(ledger, TransactionTableService::new())
            .with_renderer(Box::new(renderer.clone()))
            .with_notifier(Box::new(notifier.clone()));
        (dispatcher, renderer, notifier)
    }

    fn visible_titles(view: &LedgerViewResponse) -> Vec<String> {
        view.list.rows().iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_submit_renders_and_notifies() {
        let (mut dispatcher, renderer, notifier) = dispatcher();
        dispatcher.dispatch(submit("Salary", "5000", "Job", "2024-01-01", "income"));
        let outcome = dispatcher.dispatch(submit("Coffee", "50", "Food", "2024-01-02", "expense"));

        assert_eq!(visible_titles(&outcome.view), vec!["Coffee", "Salary"]);
        assert_eq!(outcome.view.totals.income, 5000.0);
        assert_eq!(outcome.view.totals.expense, -50.0);
        assert_eq!(outcome.view.totals.balance, 4950.0);
        assert_eq!(outcome.view.formatted_totals.balance, "₹4,950");

        assert_eq!(renderer.views.lock().unwrap().len(), 2);
        let received = notifier.received.lock().unwrap();
        assert_eq!(received.len(), 2);
        assert!(received.iter().all(|n| n.severity == NotificationSeverity::Success));
    }

    #[test]
    fn test_invalid_submit_notifies_error_without_mutation() {
        let (mut dispatcher, renderer, notifier) = dispatcher();
        let outcome = dispatcher.dispatch(submit("", "50", "Food", "2024-01-02", "expense"));

        assert!(dispatcher.ledger().is_empty());
        assert!(outcome.view.list.is_empty());
        assert_eq!(outcome.notifications, vec![notifications::invalid_form()]);
        assert_eq!(notifier.received.lock().unwrap().as_slice(), &[notifications::invalid_form()]);
        // Still re-rendered
        assert_eq!(renderer.views.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_intent() {
        let (mut dispatcher, _renderer, notifier) = dispatcher();
        let outcome = dispatcher.dispatch(submit("Salary", "5000", "Job", "2024-01-01", "income"));
        let id = outcome.view.list.rows()[0].id.clone();

        let outcome = dispatcher.dispatch(LedgerIntent::DeleteTransaction { id });
        assert!(outcome.view.list.is_empty());
        assert_eq!(outcome.view.totals.balance, 0.0);
        assert_eq!(outcome.notifications, vec![notifications::transaction_deleted()]);
        assert_eq!(notifier.received.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_unknown_id_is_silent_noop() {
        let (mut dispatcher, renderer, _notifier) = dispatcher();
        dispatcher.dispatch(submit("Salary", "5000", "Job", "2024-01-01", "income"));
        let outcome = dispatcher.dispatch(LedgerIntent::DeleteTransaction {
            id: "nonexistent-id".to_string(),
        });
        assert!(outcome.notifications.is_empty());
        assert_eq!(dispatcher.ledger().len(), 1);
        assert_eq!(renderer.views.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_filter_and_search_intents() {
        let (mut dispatcher, _renderer, notifier) = dispatcher();
        dispatcher.dispatch(submit("Salary", "5000", "Job", "2024-01-01", "income"));
        dispatcher.dispatch(submit("Coffee", "50", "Food", "2024-01-02", "expense"));

        dispatcher.dispatch(LedgerIntent::SetFilterType(FilterType::Expense));
        let outcome = dispatcher.dispatch(LedgerIntent::SetSearchText("cof".to_string()));

        assert_eq!(visible_titles(&outcome.view), vec!["Coffee"]);
        assert_eq!(outcome.view.filter_type, FilterType::Expense);
        assert_eq!(outcome.view.search_text, "cof");
        // Totals still cover both transactions
        assert_eq!(outcome.view.totals.balance, 4950.0);
        assert!(outcome.notifications.is_empty());
        assert_eq!(notifier.received.lock().unwrap().len(), 2);

        let outcome = dispatcher.dispatch(LedgerIntent::SetSearchText("zzz".to_string()));
        assert!(outcome.view.list.is_empty());
    }

    #[test]
    fn test_absent_collaborators_are_noops() {
        let ledger = LedgerService::load(TransactionRepository::new(Arc::new(MemoryStore::new())));
        let mut dispatcher = IntentDispatcher::new(ledger, TransactionTableService::new());
        let outcome = dispatcher.dispatch(submit("Salary", "5000", "Job", "2024-01-01", "income"));
        assert_eq!(outcome.notifications, vec![notifications::transaction_added()]);
        assert_eq!(dispatcher.ledger().len(), 1);

        let (mut with_collaborators, renderer, _notifier) = self::dispatcher();
        with_collaborators.set_renderer(None);
        with_collaborators.dispatch(submit("Tea", "5", "Food", "2024-01-01", "expense"));
        assert!(renderer.views.lock().unwrap().is_empty());
    }

    #[test]
    fn test_storage_failure_warns_but_keeps_transaction() {
        let store = Arc::new(FailingStore::failing_writes());
        let ledger = LedgerService::load(TransactionRepository::new(store));
        let mut dispatcher = IntentDispatcher::new(ledger, TransactionTableService::new());

        let outcome = dispatcher.dispatch(submit("Salary", "5000", "Job", "2024-01-01", "income"));
        assert_eq!(
            outcome.notifications,
            vec![notifications::transaction_added(), notifications::storage_unavailable()]
        );
        assert_eq!(dispatcher.ledger().len(), 1);
        assert_eq!(outcome.view.totals.income, 5000.0);
    }

    #[test]
    fn test_delete_with_storage_failure_still_removes() {
        let store = Arc::new(FailingStore::failing_writes());
        store.set_fail_writes(false);
        let ledger = LedgerService::load(TransactionRepository::new(store.clone()));
        let mut dispatcher = IntentDispatcher::new(ledger, TransactionTableService::new());
        let outcome = dispatcher.dispatch(submit("Salary", "5000", "Job", "2024-01-01", "income"));
        let id = outcome.view.list.rows()[0].id.clone();

        store.set_fail_writes(true);
        let outcome = dispatcher.dispatch(LedgerIntent::DeleteTransaction { id });
        assert_eq!(
            outcome.notifications,
            vec![notifications::transaction_deleted(), notifications::storage_unavailable()]
        );
        assert!(dispatcher.ledger().is_empty());
        assert!(outcome.view.list.is_empty());
    }

    #[test]
    fn test_transactions_as_wire_records() {
        let (mut dispatcher, _renderer, _notifier) = dispatcher();
        dispatcher.dispatch(submit("Salary", "5000", "Job", "2024-01-02", "income"));
        dispatcher.dispatch(submit("Coffee", "50", "Food", "2024-01-01", "expense"));
        // Filters shape the view only
        dispatcher.dispatch(LedgerIntent::SetFilterType(FilterType::Income));

        let records = dispatcher.transactions();
        let titles: Vec<&str> = records.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Salary", "Coffee"]);
        assert_eq!(records[1].amount, -50.0);
        assert_eq!(records[1].date, "2024-01-01");
        assert_eq!(records[1].transaction_type, shared::TransactionType::Expense);
    }

    #[test]
    fn test_dispatcher_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<IntentDispatcher>();
    }
}
