//! Design token tables
//!
//! Tokens are the atomic values that make up the design system:
//! - Primitive colors (family → shade → hex)
//! - Semantic colors (mode → category → token → color reference)
//! - Typography primitives (family, size, weight, line height, letter spacing)
//! - Composite typography (breakpoint → category → scale → weight → references)
//! - Spacing and sizing

mod color;
mod composite;
mod semantic;
mod sizing;
mod spacing;
mod typography;

pub use color::*;
pub use composite::*;
pub use semantic::*;
pub use sizing::*;
pub use spacing::*;
pub use typography::*;
