//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing, so the
//! desktop host and tests can share the same state shape.

pub mod books;

pub use books::*;
