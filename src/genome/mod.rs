//! Genome abstractions and implementations
//!
//! This module provides the bounded `Gene` and the `Chromosome` built from it.

pub mod bounds;
pub mod chromosome;
pub mod gene;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::chromosome::*;
    pub use super::gene::*;
}
