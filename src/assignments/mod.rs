// src/assignments/mod.rs

pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::{AssignmentFormState, AssignmentsPlugin};
