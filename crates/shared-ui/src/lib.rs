//! Design-system components for the Acharya portal.
//!
//! Each component lives in its own directory with a `component.rs` and the
//! stylesheet it links. Everything is re-exported at the crate root.

pub mod components;
pub mod theme;

pub use components::*;
