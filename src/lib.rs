//! # geneo
//!
//! Bounded, wrap-aware real-valued genes for genetic algorithms.
//!
//! This library provides the encoding primitives an evolutionary driver
//! works with; it does not run evolution itself.
//!
//! ## Core Concepts
//!
//! - **Gene**: a normalized position in `[0, 1]` reported within `[min, max]`,
//!   optionally treating the normalized range as circular
//! - **Chromosome**: an ordered sequence of genes with positional access
//! - **Population**: individuals kept structurally in sync with a template
//!
//! Randomness is always injected as `&mut impl rand::Rng`, so seeded
//! generators give reproducible results.
//!
//! ## Quick Start
//!
//! ```rust
//! use geneo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let template: Chromosome = vec![
//!     Gene::with_bounds(0.0, 10.0, false),
//!     Gene::with_bounds(0.0, 360.0, true),
//! ]
//! .into();
//!
//! let mut population = Population::new(&template, 20)?;
//! population.randomize(&mut rng);
//!
//! let mut child = population[0].crossover(&population[1], &mut rng)?;
//! child.mutate(0.1, 0.05, &mut rng)?;
//! population.replace(2, child)?;
//! # Ok::<(), geneo::error::GeneoError>(())
//! ```

pub mod config;
pub mod error;
pub mod genome;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::genome::prelude::*;
    pub use crate::population::prelude::*;
}
