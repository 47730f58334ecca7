//! Typed records describing a software project.
//!
//! # Core Concepts
//!
//! - [`Project`]: Root record. Its `name` is the join key for every edge leaving it.
//! - [`Feature`]: A capability of the project, linked via `has_feature`.
//! - [`Component`]: An architectural unit, linked via `has_component`. Its
//!   dependency names drive `depends_on` edges between components.
//!
//! Records are immutable once built. Each is constructed from an `*Input`
//! struct, and construction is where validation happens: empty names and
//! unknown enum values are rejected with a [`ValidationError`] before any
//! graph call is made. Deserialization goes through the same constructors.

mod component;
mod feature;
mod metadata;
mod project;
mod validation;

pub use component::*;
pub use feature::*;
pub use metadata::*;
pub use project::*;
pub use validation::ValidationError;
