//! State Management
//!
//! Global application state shared by the journal components.

pub mod global;

pub use global::{provide_global_state, GlobalState};
