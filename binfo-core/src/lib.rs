//! Core types and query pipeline for the binfo bin collection assistant.

/// Agent facade combining resolver and formatter.
pub mod agent;
/// Deterministic rendering of resolution outcomes.
pub mod format;
/// Domain data structures shared by all components.
pub mod model;
/// Traits describing the optional external collaborators.
pub mod ports;
/// Resolution of free-text queries to district records.
pub mod resolver;
/// Loading and indexing of the reference dataset.
pub mod store;

pub use agent::*;
pub use format::*;
pub use model::*;
pub use ports::*;
pub use resolver::*;
pub use store::*;
