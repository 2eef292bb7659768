//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `session`, `ui`) so individual
//! components can depend on small focused models. The structs are plain so
//! the orchestration logic tests natively; components wrap them in
//! `RwSignal`s provided via context.

pub mod auth;
pub mod chat;
pub mod session;
pub mod ui;
