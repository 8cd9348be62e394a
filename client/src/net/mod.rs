//! Networking for the same-origin relay endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the upstream observability API directly;
//! everything goes through the relay paths the server exposes on this
//! origin, with the API key as a bearer credential.

pub mod api;
