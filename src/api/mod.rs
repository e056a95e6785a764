// src/api/mod.rs

// Everything that talks to the procurement backend lives here; the rest of the
// crate consumes `ApiClient` and the wire types, never reqwest directly.
pub mod client;
pub mod plugin;
pub mod types;

pub use client::ApiClient;
pub use plugin::ApiPlugin;
pub use types::{
    ApiError, AssignmentDraft, EntityKind, LookupRecord, ReportData, SavedAssignmentDto,
    SearchResponse,
};
