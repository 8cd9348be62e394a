//! Signal-backed state structs shared across pages and components.
//!
//! DESIGN
//! ======
//! Each struct is plain data provided via `RwSignal` context so transitions
//! stay pure and natively testable; components only read and `update`.

pub mod config;
pub mod logs;
pub mod ui;
