//! Declarative configuration
//!
//! Templates and populations can be described in JSON and built into
//! chromosomes, e.g.
//!
//! ```json
//! {
//!   "count": 20,
//!   "seed": 42,
//!   "template": {
//!     "genes": [
//!       { "min": 0.0, "max": 10.0 },
//!       { "min": 0.0, "max": 360.0, "wrap": true, "value": 90.0 }
//!     ]
//!   }
//! }
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GeneoResult};
use crate::genome::chromosome::Chromosome;
use crate::genome::gene::Gene;
use crate::population::population::Population;

/// Description of a single gene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneConfig {
    /// Lower limit
    pub min: f64,
    /// Upper limit
    pub max: f64,
    /// Circular normalized range
    #[serde(default)]
    pub wrap: bool,
    /// Initial value in `[min, max]`; centered when absent
    #[serde(default)]
    pub value: Option<f64>,
}

impl GeneConfig {
    fn build(&self, index: usize) -> Result<Gene, ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidBounds {
                index,
                min: self.min,
                max: self.max,
            });
        }
        let mut gene = Gene::with_bounds(self.min, self.max, self.wrap);
        if let Some(value) = self.value {
            gene.set_value(value);
        }
        Ok(gene)
    }
}

impl From<&Gene> for GeneConfig {
    fn from(gene: &Gene) -> Self {
        Self {
            min: gene.min(),
            max: gene.max(),
            wrap: gene.wrap(),
            value: Some(gene.value()),
        }
    }
}

/// Description of a template chromosome
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Genes in positional order
    #[serde(default)]
    pub genes: Vec<GeneConfig>,
}

impl TemplateConfig {
    /// Build the described chromosome
    pub fn build(&self) -> Result<Chromosome, ConfigError> {
        self.genes
            .iter()
            .enumerate()
            .map(|(index, gene)| gene.build(index))
            .collect()
    }
}

impl From<&Chromosome> for TemplateConfig {
    fn from(chromosome: &Chromosome) -> Self {
        Self {
            genes: chromosome.genes().iter().map(GeneConfig::from).collect(),
        }
    }
}

/// Description of a population
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Number of individuals
    pub count: usize,
    /// Random seed; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Structural template
    pub template: TemplateConfig,
}

impl PopulationConfig {
    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the described population
    pub fn build_population(&self) -> GeneoResult<Population> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount(self.count).into());
        }
        let template = self.template.build()?;
        Ok(Population::new(&template, self.count)?)
    }

    /// Random number generator for this configuration
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
