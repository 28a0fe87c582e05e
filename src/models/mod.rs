//! Domain models for the logbook.
//!
//! - [`Phase`]: the closed set of sidebar sections. Exactly one is selected at a time.
//! - [`Block`]: static content units rendered for a phase, in source order.
//! - [`NamedAsset`]: a script or image on disk that a block can offer for download.

mod asset;
mod block;
mod phase;

pub use asset::*;
pub use block::*;
pub use phase::*;
