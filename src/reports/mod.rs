// src/reports/mod.rs

pub mod assembler;
pub mod descriptor;
pub mod events;
pub mod plugin;
pub mod systems;
pub mod workbook;

pub use descriptor::{ReportDescriptor, ReportMode, ReportParams};
pub use plugin::{ReportPanelState, ReportsPlugin};
