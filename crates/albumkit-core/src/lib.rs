//! # AlbumKit Core
//!
//! Shared foundation for the AlbumKit spread-layout design engine:
//! error types, engine tuning constants, and the percentage-space
//! geometry primitives every other crate builds on.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{DesignError, Result};
pub use geometry::{PagePoint, PageRect};
