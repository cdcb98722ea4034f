//! Wallet transaction history view model.
//!
//! [`TransactionHistory`] filters, sorts and partitions one fetch result;
//! [`HistoryView`] holds the view state across refreshes (loading flag,
//! last error, selected tab) behind explicit update functions.
//!
//! Partitions are always computed from the freshly built list, and
//! ordering uses parsed timestamps rather than string comparison.

use std::cmp::Reverse;
use std::future::Future;
use std::time::Duration;

use crate::error::{FetchError, FetchResult};
use crate::models::Transaction;
use crate::retry::{retry, RetryPolicy};
use crate::services::TransactionSource;
use crate::units::format_myria;

// =============================================================================
// Row Types
// =============================================================================

/// Direction of a transaction relative to the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::In => "In",
            Direction::Out => "Out",
        }
    }

    /// CSS class of the direction badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::In => "badge badge-in",
            Direction::Out => "badge badge-out",
        }
    }
}

/// Display status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Success,
    Pending,
    Failed,
}

impl TxStatus {
    /// Collapse the API `state` into a display status.
    pub fn from_state(state: &str) -> Self {
        match state {
            "success" | "verified" => TxStatus::Success,
            "pending" => TxStatus::Pending,
            _ => TxStatus::Failed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TxStatus::Success => "Success",
            TxStatus::Pending => "Pending",
            TxStatus::Failed => "Failed",
        }
    }
}

/// History tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryTab {
    #[default]
    All,
    In,
    Out,
}

impl HistoryTab {
    /// Tabs in display order.
    pub const ALL: [HistoryTab; 3] = [HistoryTab::All, HistoryTab::In, HistoryTab::Out];

    pub fn label(&self) -> &'static str {
        match self {
            HistoryTab::All => "All",
            HistoryTab::In => "In",
            HistoryTab::Out => "Out",
        }
    }

    /// Stable element id for tab/panel wiring.
    pub fn dom_id(&self) -> &'static str {
        match self {
            HistoryTab::All => "history-tab-0",
            HistoryTab::In => "history-tab-1",
            HistoryTab::Out => "history-tab-2",
        }
    }
}

/// One rendered line of the history list.
#[derive(Debug, Clone, PartialEq)]
pub struct TxRow {
    pub id: String,
    pub direction: Direction,
    /// "To: ..." or "From: ...".
    pub counterpart_label: &'static str,
    /// Full counterpart address (tooltip).
    pub counterpart: String,
    /// Full transaction hash (tooltip of "Tx: ...").
    pub hash: String,
    pub status: TxStatus,
    /// Amount in Myria, e.g. "0.5 Myria".
    pub amount: String,
}

impl TxRow {
    fn new(tx: &Transaction, direction: Direction) -> Self {
        let (counterpart_label, counterpart) = match direction {
            Direction::Out => ("To: ...", tx.to.clone()),
            Direction::In => ("From: ...", tx.from.clone()),
        };
        Self {
            id: tx.id.clone(),
            direction,
            counterpart_label,
            counterpart,
            hash: tx.trx_hash.clone(),
            status: TxStatus::from_state(&tx.state),
            amount: format_myria(tx.value),
        }
    }
}

// =============================================================================
// Transaction History
// =============================================================================

/// One fetch result, filtered to the current user and partitioned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionHistory {
    address: String,
    all: Vec<Transaction>,
    inbound: Vec<Transaction>,
    outbound: Vec<Transaction>,
}

impl TransactionHistory {
    /// Keep transactions involving `address`, newest first, and split them
    /// into inbound and outbound.
    pub fn build(records: Vec<Transaction>, address: &str) -> Self {
        let mut all: Vec<Transaction> = records
            .into_iter()
            .filter(|tx| tx.involves(address))
            .collect();

        // Unparseable timestamps sort last; id breaks ties.
        all.sort_by_cached_key(|tx| {
            let created = tx.created_at_time();
            (created.is_none(), Reverse(created), tx.id.clone())
        });

        let inbound = all.iter().filter(|tx| tx.to == address).cloned().collect();
        let outbound = all.iter().filter(|tx| tx.from == address).cloned().collect();

        Self {
            address: address.to_string(),
            all,
            inbound,
            outbound,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn all(&self) -> &[Transaction] {
        &self.all
    }

    pub fn inbound(&self) -> &[Transaction] {
        &self.inbound
    }

    pub fn outbound(&self) -> &[Transaction] {
        &self.outbound
    }

    /// Rows of `tab`.
    pub fn rows(&self, tab: HistoryTab) -> Vec<TxRow> {
        match tab {
            HistoryTab::All => self
                .all
                .iter()
                .map(|tx| {
                    let direction = if tx.from == self.address {
                        Direction::Out
                    } else {
                        Direction::In
                    };
                    TxRow::new(tx, direction)
                })
                .collect(),
            HistoryTab::In => self.inbound.iter().map(|tx| TxRow::new(tx, Direction::In)).collect(),
            HistoryTab::Out => self.outbound.iter().map(|tx| TxRow::new(tx, Direction::Out)).collect(),
        }
    }
}

// =============================================================================
// View State
// =============================================================================

/// What the history view should render.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryDisplay {
    /// First load in flight.
    Loading,
    /// Nothing involving the user ("Data not available").
    Empty,
    /// Rows of the selected tab.
    Rows(Vec<TxRow>),
}

/// State of the transaction history view.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    address: String,
    history: Option<TransactionHistory>,
    loading: bool,
    error: Option<FetchError>,
    tab: HistoryTab,
}

impl HistoryView {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            history: None,
            loading: false,
            error: None,
            tab: HistoryTab::All,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn tab(&self) -> HistoryTab {
        self.tab
    }

    pub fn history(&self) -> Option<&TransactionHistory> {
        self.history.as_ref()
    }

    /// Error of the last fetch, if it failed.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Mark a fetch as started. Returns `false` if one is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply a fetch result.
    ///
    /// On failure the previous rows stay visible and the error is kept for
    /// display. An [`FetchError::Empty`] response counts as an empty list.
    pub fn finish(&mut self, result: FetchResult<Vec<Transaction>>) {
        self.loading = false;
        match result {
            Ok(records) => {
                self.history = Some(TransactionHistory::build(records, &self.address));
                self.error = None;
            }
            Err(FetchError::Empty) => {
                self.history = Some(TransactionHistory::build(Vec::new(), &self.address));
                self.error = None;
            }
            Err(e) => {
                log::error!("Failed to fetch transaction history: {}", e);
                self.error = Some(e);
            }
        }
    }

    pub fn select_tab(&mut self, tab: HistoryTab) {
        self.tab = tab;
    }

    /// Rows of the selected tab (empty before the first successful fetch).
    pub fn rows(&self) -> Vec<TxRow> {
        self.history
            .as_ref()
            .map(|h| h.rows(self.tab))
            .unwrap_or_default()
    }

    pub fn display(&self) -> HistoryDisplay {
        match &self.history {
            None if self.loading => HistoryDisplay::Loading,
            None => HistoryDisplay::Empty,
            Some(h) if h.is_empty() => HistoryDisplay::Empty,
            Some(h) => HistoryDisplay::Rows(h.rows(self.tab)),
        }
    }
}

/// Fetch the full transaction list, retrying transient failures.
pub async fn fetch_history<S, Sleep, SleepFut>(
    source: &S,
    policy: &RetryPolicy,
    sleep: Sleep,
) -> FetchResult<Vec<Transaction>>
where
    S: TransactionSource,
    Sleep: FnMut(Duration) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    log::info!("Fetching transaction history...");
    let result = retry(policy, sleep, || source.fetch_transactions()).await;
    if let Ok(records) = &result {
        log::info!("Fetched {} transactions", records.len());
    }
    result
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const A: &str = "0xA";
    const B: &str = "0xB";
    const C: &str = "0xC";

    fn tx(id: &str, from: &str, to: &str, value: u128, state: &str, created_at: &str) -> Transaction {
        Transaction {
            id: id.into(),
            trx_hash: format!("0xhash{}", id),
            from: from.into(),
            to: to.into(),
            value,
            state: state.into(),
            created_at: created_at.into(),
        }
    }

    fn scenario() -> Vec<Transaction> {
        vec![
            tx("1", A, B, 1_000_000_000_000, "success", "2021-09-02T10:00:00Z"),
            tx("2", B, A, 500_000_000_000, "pending", "2021-09-01T10:00:00Z"),
        ]
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TxStatus::from_state("success").label(), "Success");
        assert_eq!(TxStatus::from_state("verified").label(), "Success");
        assert_eq!(TxStatus::from_state("pending").label(), "Pending");
        assert_eq!(TxStatus::from_state("failed").label(), "Failed");
        assert_eq!(TxStatus::from_state("").label(), "Failed");
    }

    #[test]
    fn test_two_transaction_scenario() {
        let history = TransactionHistory::build(scenario(), A);

        let all = history.rows(HistoryTab::All);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "1");
        assert_eq!(all[0].amount, "1 Myria");
        assert_eq!(all[0].status.label(), "Success");
        assert_eq!(all[0].direction, Direction::Out);
        assert_eq!(all[0].counterpart_label, "To: ...");
        assert_eq!(all[0].counterpart, B);
        assert_eq!(all[1].id, "2");
        assert_eq!(all[1].amount, "0.5 Myria");
        assert_eq!(all[1].status.label(), "Pending");
        assert_eq!(all[1].direction, Direction::In);
        assert_eq!(all[1].counterpart_label, "From: ...");

        let out = history.rows(HistoryTab::Out);
        assert_eq!(out.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["1"]);

        let inbound = history.rows(HistoryTab::In);
        assert_eq!(inbound.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["2"]);
    }

    #[test]
    fn test_all_is_exactly_records_involving_user() {
        let records = vec![
            tx("1", A, B, 1, "success", ""),
            tx("2", B, C, 1, "success", ""),
            tx("3", C, A, 1, "success", ""),
            tx("4", C, B, 1, "success", ""),
        ];
        let history = TransactionHistory::build(records.clone(), A);

        let mut ids: Vec<_> = history.all().iter().map(|t| t.id.clone()).collect();
        ids.sort();
        let mut expected: Vec<_> = records
            .iter()
            .filter(|t| t.from == A || t.to == A)
            .map(|t| t.id.clone())
            .collect();
        expected.sort();
        assert_eq!(ids, expected);

        assert!(history.inbound().iter().all(|t| t.to == A));
        assert!(history.outbound().iter().all(|t| t.from == A));
    }

    #[test]
    fn test_partition_uses_fresh_list() {
        let mut view = HistoryView::new(A);
        assert!(view.begin_refresh());
        view.finish(Ok(scenario()));

        let history = view.history().unwrap();
        assert_eq!(history.inbound().len(), 1);
        assert_eq!(history.outbound().len(), 1);
    }

    #[test]
    fn test_sort_is_chronological_not_lexicographic() {
        // Lexicographically "+05:00" sorts after "Z" at 06:00, chronologically it is older.
        let records = vec![
            tx("early", A, B, 1, "success", "2021-09-01T10:00:00+05:00"),
            tx("late", A, B, 1, "success", "2021-09-01T06:00:00Z"),
            tx("millis-old", A, B, 1, "success", "999"),
            tx("broken", A, B, 1, "success", "not a date"),
        ];
        let history = TransactionHistory::build(records, A);
        let ids: Vec<_> = history.all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early", "millis-old", "broken"]);
    }

    #[test]
    fn test_equal_timestamps_ordered_by_id() {
        let ids = |history: &TransactionHistory| {
            history.all().iter().map(|t| t.id.clone()).collect::<Vec<_>>()
        };

        let same = "2021-09-01T10:00:00Z";
        let records = vec![
            tx("3", A, B, 1, "success", same),
            tx("2", B, A, 1, "success", same),
            tx("1", A, C, 1, "success", same),
        ];
        assert_eq!(ids(&TransactionHistory::build(records, A)), vec!["1", "2", "3"]);

        let records = vec![
            tx("z", A, B, 1, "success", "not a date"),
            tx("y", B, A, 1, "success", ""),
            tx("x", A, B, 1, "success", "2021-09-01T10:00:00Z"),
        ];
        assert_eq!(ids(&TransactionHistory::build(records, A)), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_self_transfer_in_both_partitions() {
        let history = TransactionHistory::build(vec![tx("1", A, A, 5, "success", "")], A);
        assert_eq!(history.inbound().len(), 1);
        assert_eq!(history.outbound().len(), 1);
        assert_eq!(history.rows(HistoryTab::All)[0].direction, Direction::Out);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut view = HistoryView::new(A);
        view.begin_refresh();
        view.finish(Ok(scenario()));
        let first = view.display();

        view.begin_refresh();
        view.finish(Ok(scenario()));
        assert_eq!(view.display(), first);
    }

    #[test]
    fn test_display_states() {
        let mut view = HistoryView::new(A);
        assert_eq!(view.display(), HistoryDisplay::Empty);

        view.begin_refresh();
        assert_eq!(view.display(), HistoryDisplay::Loading);
        assert!(!view.begin_refresh(), "second refresh must be ignored while loading");

        view.finish(Ok(vec![tx("9", B, C, 1, "success", "")]));
        assert_eq!(view.display(), HistoryDisplay::Empty);

        view.begin_refresh();
        view.finish(Err(FetchError::Empty));
        assert_eq!(view.display(), HistoryDisplay::Empty);
        assert!(view.error().is_none());
    }

    #[test]
    fn test_failed_refresh_keeps_previous_rows() {
        let mut view = HistoryView::new(A);
        view.begin_refresh();
        view.finish(Ok(scenario()));

        view.begin_refresh();
        view.finish(Err(FetchError::Network("offline".into())));

        assert!(matches!(view.error(), Some(FetchError::Network(_))));
        assert_eq!(view.rows().len(), 2);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_tab_selection() {
        let mut view = HistoryView::new(A);
        view.begin_refresh();
        view.finish(Ok(scenario()));

        view.select_tab(HistoryTab::In);
        assert_eq!(view.tab(), HistoryTab::In);
        match view.display() {
            HistoryDisplay::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].direction, Direction::In);
            }
            other => panic!("unexpected display: {:?}", other),
        }
    }

    struct FlakySource {
        failures_left: Cell<u32>,
    }

    impl TransactionSource for FlakySource {
        async fn fetch_transactions(&self) -> FetchResult<Vec<Transaction>> {
            if self.failures_left.get() > 0 {
                self.failures_left.set(self.failures_left.get() - 1);
                return Err(FetchError::Network("connection reset".into()));
            }
            Ok(scenario())
        }
    }

    #[tokio::test]
    async fn test_fetch_history_retries_transient_failures() {
        let source = FlakySource {
            failures_left: Cell::new(2),
        };
        let records = fetch_history(&source, &RetryPolicy::default(), |_| std::future::ready(()))
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(source.failures_left.get(), 0);
    }
}
