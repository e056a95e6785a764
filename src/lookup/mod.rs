// src/lookup/mod.rs

pub mod events;
pub mod plugin;
pub mod state;
pub mod systems;
pub mod widget;

pub use plugin::{LookupPlugin, SelectorHub, SelectorId};
pub use state::SelectorState;
