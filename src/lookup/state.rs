// src/lookup/state.rs

use bevy::time::{Timer, TimerMode};
use std::time::Duration;

use crate::api::types::LookupRecord;

/// Delay between the last keystroke and the lookup actually being issued.
pub const DEBOUNCE_SECS: f32 = 0.3;

/// Most vertical space the floating result panel may occupy.
pub const PANEL_MAX_HEIGHT: f32 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    Below,
    Above,
}

/// Decides where the result panel goes relative to its anchor. The panel flips
/// above only when the space under the anchor cannot hold it AND there is more
/// room above than below.
pub fn panel_side(anchor_top: f32, anchor_bottom: f32, viewport_height: f32) -> PanelSide {
    let space_below = viewport_height - anchor_bottom;
    let space_above = anchor_top;
    if space_below < PANEL_MAX_HEIGHT && space_above > space_below {
        PanelSide::Above
    } else {
        PanelSide::Below
    }
}

/// Per-picker state: the committed selection, the transient result cache for
/// the panel, and the debounce/sequencing machinery for in-flight lookups.
///
/// Each picker instance owns one of these; nothing is shared between pickers.
#[derive(Debug)]
pub struct SelectorState {
    pub open: bool,
    pub query: String,
    pub selected_id: String,
    /// Snapshot of the selected record, either supplied by the caller ahead of
    /// any round trip or cached from the result set at selection time. Ignored
    /// whenever `selected_id` is empty.
    pub known_record: Option<LookupRecord>,
    pub results: Vec<LookupRecord>,
    /// True when the last response was truncated to its first page.
    pub more_available: bool,
    pub loading: bool,
    debounce: Timer,
    pending_query: Option<String>,
    issued_seq: u64,
    just_opened: bool,
}

impl Default for SelectorState {
    fn default() -> Self {
        let mut debounce = Timer::from_seconds(DEBOUNCE_SECS, TimerMode::Once);
        debounce.pause();
        Self {
            open: false,
            query: String::new(),
            selected_id: String::new(),
            known_record: None,
            results: Vec::new(),
            more_available: false,
            loading: false,
            debounce,
            pending_query: None,
            issued_seq: 0,
            just_opened: false,
        }
    }
}

impl SelectorState {
    /// Opens the panel. Issues an immediate lookup for the current query when
    /// nothing is cached yet, so the panel never opens permanently empty.
    pub fn open_panel(&mut self) {
        self.open = true;
        self.just_opened = true;
        if self.results.is_empty() && !self.loading && self.pending_query.is_none() {
            self.pending_query = Some(self.query.clone());
            // Pre-expire the debounce so the next poll dispatches right away.
            self.debounce.reset();
            self.debounce.unpause();
            let full = self.debounce.duration();
            self.debounce.tick(full);
        }
    }

    /// Records a keystroke and restarts the debounce window. The previous
    /// pending query (if any) is superseded, never queued.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.query = text.clone();
        self.pending_query = Some(text);
        self.debounce.reset();
        self.debounce.unpause();
    }

    /// Advances the debounce timer; when it expires, consumes the pending
    /// query and hands back `(sequence, query)` for dispatch.
    pub fn poll_due_query(&mut self, delta: Duration) -> Option<(u64, String)> {
        self.pending_query.as_ref()?;
        self.debounce.tick(delta);
        if !self.debounce.finished() {
            return None;
        }
        let query = self.pending_query.take().unwrap_or_default();
        self.debounce.pause();
        self.issued_seq += 1;
        self.loading = true;
        Some((self.issued_seq, query))
    }

    /// Applies a successful lookup response. Returns false (and changes
    /// nothing) when the response is stale, i.e. a newer query has been issued
    /// since `seq` went out.
    pub fn apply_results(&mut self, seq: u64, records: Vec<LookupRecord>, more: bool) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.results = records;
        self.more_available = more;
        self.loading = false;
        true
    }

    /// Marks a failed lookup as settled. The current result set is kept
    /// visible; only the loading indicator is cleared.
    pub fn fail_request(&mut self, seq: u64) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.loading = false;
        true
    }

    /// Commits a record, caches it as the selection snapshot, closes the panel
    /// and clears the query text.
    pub fn select(&mut self, record: &LookupRecord) {
        self.selected_id = record.id.clone();
        self.known_record = Some(record.clone());
        self.open = false;
        self.query.clear();
        self.pending_query = None;
        self.debounce.pause();
    }

    /// Commits an empty selection. Does not reopen the panel.
    pub fn clear(&mut self) {
        self.selected_id.clear();
    }

    /// Closes the panel without touching the committed selection.
    pub fn close(&mut self) {
        self.open = false;
        self.just_opened = false;
    }

    /// Seeds a selection the caller already knows (e.g. when editing an
    /// existing record), so the label renders without a lookup round trip.
    pub fn set_selection(&mut self, id: String, record: Option<LookupRecord>) {
        self.selected_id = id;
        self.known_record = record;
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_id.is_empty()
    }

    /// Label for the committed selection: a matching record from the current
    /// result set, else the known snapshot, else the placeholder.
    pub fn display_label(&self, placeholder: &str, render: fn(&LookupRecord) -> String) -> String {
        if self.selected_id.is_empty() {
            return placeholder.to_string();
        }
        if let Some(record) = self.results.iter().find(|r| r.id == self.selected_id) {
            return render(record);
        }
        if let Some(record) = self
            .known_record
            .as_ref()
            .filter(|r| r.id == self.selected_id)
        {
            return render(record);
        }
        placeholder.to_string()
    }

    /// One-shot flag the widget uses to focus the search box on open.
    pub fn take_just_opened(&mut self) -> bool {
        std::mem::take(&mut self.just_opened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> LookupRecord {
        LookupRecord {
            id: id.to_string(),
            name: name.to_string(),
            code: None,
            stock_on_hand: None,
        }
    }

    fn name_of(r: &LookupRecord) -> String {
        r.name.clone()
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn rapid_keystrokes_issue_a_single_lookup() {
        let mut state = SelectorState::default();
        state.set_query("a");
        assert!(state.poll_due_query(ms(100)).is_none());
        state.set_query("ab");
        assert!(state.poll_due_query(ms(100)).is_none());
        state.set_query("abc");
        assert!(state.poll_due_query(ms(100)).is_none());

        let issued = state.poll_due_query(ms(250));
        assert_eq!(issued, Some((1, "abc".to_string())));
        assert!(state.loading);

        // Nothing further is pending.
        assert!(state.poll_due_query(ms(500)).is_none());
    }

    #[test]
    fn stale_response_is_discarded_after_newer_one_applied() {
        let mut state = SelectorState::default();
        state.set_query("x");
        let (seq_x, _) = state.poll_due_query(ms(400)).unwrap();
        state.set_query("y");
        let (seq_y, _) = state.poll_due_query(ms(400)).unwrap();

        assert!(state.apply_results(seq_y, vec![record("1", "from y")], false));
        assert!(!state.apply_results(seq_x, vec![record("2", "from x")], false));

        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].name, "from y");
        assert!(!state.loading);
    }

    #[test]
    fn stale_response_is_discarded_even_before_newer_one_lands() {
        let mut state = SelectorState::default();
        state.set_query("x");
        let (seq_x, _) = state.poll_due_query(ms(400)).unwrap();
        state.set_query("y");
        let (_seq_y, _) = state.poll_due_query(ms(400)).unwrap();

        assert!(!state.apply_results(seq_x, vec![record("2", "from x")], false));
        assert!(state.results.is_empty());
        // The newer request is still outstanding.
        assert!(state.loading);
    }

    #[test]
    fn failed_lookup_keeps_current_results() {
        let mut state = SelectorState::default();
        state.set_query("acme");
        let (seq, _) = state.poll_due_query(ms(400)).unwrap();
        assert!(state.apply_results(seq, vec![record("v1", "Acme")], false));

        state.set_query("acme supply");
        let (seq2, _) = state.poll_due_query(ms(400)).unwrap();
        assert!(state.fail_request(seq2));
        assert_eq!(state.results[0].name, "Acme");
        assert!(!state.loading);
    }

    #[test]
    fn open_panel_issues_an_initial_fetch_once() {
        let mut state = SelectorState::default();
        state.open_panel();
        let issued = state.poll_due_query(ms(1));
        assert_eq!(issued, Some((1, String::new())));

        // With results cached, reopening does not fetch again.
        state.apply_results(1, vec![record("v1", "Acme")], false);
        state.close();
        state.open_panel();
        assert!(state.poll_due_query(ms(400)).is_none());
    }

    #[test]
    fn select_commits_and_resets_transients() {
        let mut state = SelectorState::default();
        state.set_query("ac");
        state.apply_results(0, vec![], false);
        let chosen = record("v1", "Acme");
        state.select(&chosen);
        assert_eq!(state.selected_id, "v1");
        assert!(!state.open);
        assert!(state.query.is_empty());
        // A pending debounce died with the selection.
        assert!(state.poll_due_query(ms(400)).is_none());
    }

    #[test]
    fn close_keeps_committed_selection() {
        let mut state = SelectorState::default();
        state.select(&record("v1", "Acme"));
        state.open_panel();
        state.close();
        assert_eq!(state.selected_id, "v1");
    }

    #[test]
    fn display_label_prefers_results_then_snapshot_then_placeholder() {
        let mut state = SelectorState::default();
        state.set_selection("v1".to_string(), Some(record("v1", "Snapshot Name")));
        state.results = vec![record("v1", "Fresh Name")];
        assert_eq!(state.display_label("--", name_of), "Fresh Name");

        state.results = vec![record("v2", "Other")];
        assert_eq!(state.display_label("--", name_of), "Snapshot Name");

        state.known_record = None;
        assert_eq!(state.display_label("--", name_of), "--");
    }

    #[test]
    fn empty_identifier_means_no_selection_despite_snapshot() {
        let mut state = SelectorState::default();
        state.select(&record("v1", "Acme"));
        state.clear();
        assert!(!state.has_selection());
        assert!(state.known_record.is_some());
        assert_eq!(state.display_label("--", name_of), "--");
    }

    #[test]
    fn panel_flips_above_only_when_cramped_below() {
        assert_eq!(panel_side(700.0, 750.0, 800.0), PanelSide::Above);
        assert_eq!(panel_side(250.0, 300.0, 800.0), PanelSide::Below);
        // Cramped below but even more cramped above: stay below.
        assert_eq!(panel_side(20.0, 70.0, 300.0), PanelSide::Below);
    }
}
