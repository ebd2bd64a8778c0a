//! lifeos-ui - Display types, stores and pure view components for LifeOS
//!
//! Components here never fetch data. The host application loads books,
//! places them in a store and handles the actions the views emit.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
