//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the configuration form, log table, status banner, and
//! embed panel while reading/writing shared state from Leptos context
//! providers.

pub mod config_form;
pub mod logs_table;
pub mod status_banner;
pub mod trace_panel;
