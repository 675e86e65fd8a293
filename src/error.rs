//! Error types for geneo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for gene and chromosome operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// Positional access outside `[0, length)`
    #[error("Index out of range: chromosome length {length}, requested index {index}")]
    IndexOutOfRange { index: usize, length: usize },

    /// A ratio argument outside `[0, 1]`
    #[error("Ratio must be in [0.0, 1.0], got {0}")]
    InvalidRatio(f64),

    /// Crossover between genes with different bounds or wrap settings
    #[error("Incompatible genes")]
    IncompatibleGenes,

    /// Crossover between chromosomes of different shape
    #[error("Incompatible chromosomes: expected length {expected}, got {actual}")]
    IncompatibleChromosomes { expected: usize, actual: usize },
}

/// Error type for population bookkeeping
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PopulationError {
    /// Population size must be at least one
    #[error("Population size must be greater than 0, requested {0}")]
    InvalidSize(usize),

    /// Individual index outside `[0, count)`
    #[error("Individual index out of range: population count {count}, requested index {index}")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Error type for declarative configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON input
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A gene declared with `min > max`
    #[error("Invalid bounds for gene {index}: min ({min}) must be <= max ({max})")]
    InvalidBounds { index: usize, min: f64, max: f64 },

    /// Population size of zero
    #[error("Invalid population size: {0}")]
    InvalidCount(usize),
}

/// Top-level error type
#[derive(Debug, Error)]
pub enum GeneoError {
    /// Genome error
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// Population error
    #[error("Population error: {0}")]
    Population(#[from] PopulationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for library operations
pub type GeneoResult<T> = Result<T, GeneoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_error_display() {
        let err = GenomeError::IndexOutOfRange {
            index: 7,
            length: 3,
        };
        assert_eq!(
            err.to_string(),
            "Index out of range: chromosome length 3, requested index 7"
        );

        let err = GenomeError::InvalidRatio(1.1);
        assert_eq!(err.to_string(), "Ratio must be in [0.0, 1.0], got 1.1");

        let err = GenomeError::IncompatibleChromosomes {
            expected: 4,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Incompatible chromosomes: expected length 4, got 2"
        );
    }

    #[test]
    fn test_population_error_display() {
        let err = PopulationError::InvalidSize(0);
        assert_eq!(
            err.to_string(),
            "Population size must be greater than 0, requested 0"
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_geneo_error_conversions() {
        let err: GeneoError = GenomeError::IncompatibleGenes.into();
        assert!(matches!(err, GeneoError::Genome(GenomeError::IncompatibleGenes)));

        let err: GeneoError = PopulationError::InvalidSize(0).into();
        assert!(matches!(err, GeneoError::Population(_)));

        let err: GeneoError = ConfigError::InvalidCount(0).into();
        assert!(matches!(err, GeneoError::Config(_)));
    }
}
