//! Core types for the gridstep workspace.
//!
//! Provides the geometry primitives ([`Point`], [`Range`]) and the
//! obstacle [`Mask`] shared by the search and generation crates.
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` for the
//! public value types.

mod geom;
mod mask;

pub use geom::{Point, Range, RangeIter};
pub use mask::{Mask, MaskError};
