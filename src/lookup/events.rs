// src/lookup/events.rs

use bevy::prelude::Event;

use super::plugin::SelectorId;
use crate::api::types::{ApiError, LookupRecord, SearchResponse};

/// A background lookup finished. `seq` identifies the query that produced it
/// so stale responses can be dropped on arrival.
#[derive(Event, Debug, Clone)]
pub struct LookupCompleted {
    pub selector: SelectorId,
    pub seq: u64,
    pub result: Result<SearchResponse, ApiError>,
}

/// A picker committed or cleared its selection. `record` is present when the
/// selection came from a loaded result; host forms consume this.
#[derive(Event, Debug, Clone)]
pub struct SelectionChanged {
    pub selector: SelectorId,
    pub selected_id: String,
    pub record: Option<LookupRecord>,
}
