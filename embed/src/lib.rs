//! Embed contract for the hosted trace viewer.
//!
//! This crate is UI-framework agnostic so client crates can consume it
//! directly: slug derivation, embed URL construction, the retarget message
//! shape, and a controller that drives any [`EmbedSurface`] implementation.

pub mod controller;
pub mod message;
pub mod slug;
pub mod target;

pub use controller::{EmbedController, EmbedError, EmbedSurface, EmbedUpdate};
pub use message::RetargetMessage;
pub use slug::{percent_decode, percent_encode, slugify};
pub use target::{DEFAULT_OBJECT_TYPE, TraceTarget};
