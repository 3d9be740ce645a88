//! Shared vocabulary for the extra-asserts workspace.
//!
//! Every other `xa-*` crate depends on `xa-types`.
//!
//! # Key Types
//!
//! - [`Mapping`]: A nested string-keyed mapping (`serde_json::Map`)
//! - [`Container`]: Borrowed view over a JSON object or an index-keyed array
//! - [`Kind`] / [`Typed`]: Runtime kind of a value, for strict comparison and type assertions
//! - [`KeyPath`]: Location of an entry inside a nested mapping

pub mod container;
pub mod kind;
pub mod path;

pub use container::{strictly_equal, Container, Mapping};
pub use kind::{Kind, Typed};
pub use path::KeyPath;
