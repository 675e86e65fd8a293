//! Ordered sequence of genes
//!
//! A chromosome aggregates genes positionally. Every position may carry its
//! own limits and wrap flag; two chromosomes are compatible when they agree
//! on length and on the structure of every position.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::GenomeError;
use crate::genome::gene::Gene;

/// One candidate solution's full parameter set
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    genes: Vec<Gene>,
}

impl Chromosome {
    /// Create an empty chromosome
    pub fn new() -> Self {
        Self { genes: Vec::new() }
    }

    /// Create a chromosome of `length` default genes
    pub fn with_length(length: usize) -> Self {
        Self {
            genes: vec![Gene::new(); length],
        }
    }

    /// Deep copy of `template`, gene by gene
    pub fn from_template(template: &Chromosome) -> Self {
        Self {
            genes: template.genes.clone(),
        }
    }

    /// Number of genes
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Check if the chromosome has no genes
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Get the genes as a slice
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Gene at `index`
    pub fn gene(&self, index: usize) -> Result<&Gene, GenomeError> {
        let length = self.genes.len();
        self.genes
            .get(index)
            .ok_or(GenomeError::IndexOutOfRange { index, length })
    }

    /// Mutable gene at `index`
    pub fn gene_mut(&mut self, index: usize) -> Result<&mut Gene, GenomeError> {
        let length = self.genes.len();
        self.genes
            .get_mut(index)
            .ok_or(GenomeError::IndexOutOfRange { index, length })
    }

    /// Decoded values of all genes, in order
    pub fn values(&self) -> Vec<f64> {
        self.genes.iter().map(Gene::value).collect()
    }

    pub fn value(&self, index: usize) -> Result<f64, GenomeError> {
        Ok(self.gene(index)?.value())
    }

    pub fn set_value(&mut self, index: usize, value: f64) -> Result<(), GenomeError> {
        self.gene_mut(index)?.set_value(value);
        Ok(())
    }

    pub fn min(&self, index: usize) -> Result<f64, GenomeError> {
        Ok(self.gene(index)?.min())
    }

    pub fn set_min(&mut self, index: usize, min: f64) -> Result<(), GenomeError> {
        self.gene_mut(index)?.set_min(min);
        Ok(())
    }

    pub fn max(&self, index: usize) -> Result<f64, GenomeError> {
        Ok(self.gene(index)?.max())
    }

    pub fn set_max(&mut self, index: usize, max: f64) -> Result<(), GenomeError> {
        self.gene_mut(index)?.set_max(max);
        Ok(())
    }

    pub fn wrap(&self, index: usize) -> Result<bool, GenomeError> {
        Ok(self.gene(index)?.wrap())
    }

    pub fn set_wrap(&mut self, index: usize, wrap: bool) -> Result<(), GenomeError> {
        self.gene_mut(index)?.set_wrap(wrap);
        Ok(())
    }

    /// Append a gene
    pub fn add(&mut self, gene: Gene) {
        self.genes.push(gene);
    }

    /// Remove and return the gene at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Gene, GenomeError> {
        if index >= self.genes.len() {
            return Err(GenomeError::IndexOutOfRange {
                index,
                length: self.genes.len(),
            });
        }
        Ok(self.genes.remove(index))
    }

    /// Grow with default genes or truncate the tail to reach `length`
    pub fn set_length(&mut self, length: usize) {
        self.genes.resize_with(length, Gene::new);
    }

    /// Randomize every gene, in index order
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for gene in &mut self.genes {
            gene.randomize(rng);
        }
    }

    /// Mutate each gene independently with probability `chance`.
    ///
    /// Every gene consumes one selection draw; selected genes are passed
    /// `rate` verbatim, so an invalid rate fails at the first selected gene
    /// before anything has been changed.
    pub fn mutate<R: Rng>(
        &mut self,
        chance: f64,
        rate: f64,
        rng: &mut R,
    ) -> Result<(), GenomeError> {
        for gene in &mut self.genes {
            if rng.gen::<f64>() <= chance {
                gene.mutate(rate, rng)?;
            }
        }
        Ok(())
    }

    /// Independent copy built from [`Gene::copy`] of every gene
    pub fn copy(&self) -> Chromosome {
        Self {
            genes: self.genes.iter().map(Gene::copy).collect(),
        }
    }

    /// Same length and pairwise compatible genes
    pub fn is_compatible_with(&self, other: &Chromosome) -> bool {
        self.genes.len() == other.genes.len()
            && self
                .genes
                .iter()
                .zip(&other.genes)
                .all(|(a, b)| a.is_compatible_with(b))
    }

    /// Gene-wise crossover of two compatible chromosomes.
    ///
    /// Each position draws its own ratio, see [`Gene::crossover`].
    pub fn crossover<R: Rng>(
        &self,
        other: &Chromosome,
        rng: &mut R,
    ) -> Result<Chromosome, GenomeError> {
        if self.genes.len() != other.genes.len() {
            return Err(GenomeError::IncompatibleChromosomes {
                expected: self.genes.len(),
                actual: other.genes.len(),
            });
        }
        let genes = self
            .genes
            .iter()
            .zip(&other.genes)
            .map(|(a, b)| a.crossover(b, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { genes })
    }

    /// Synchronize structure with `template`.
    ///
    /// Extra genes are dropped, shared positions take the template's limits
    /// and wrap flag while keeping their normalized position, and missing
    /// positions are filled with copies of the template's genes.
    pub fn adjust_by_template(&mut self, template: &Chromosome) {
        let target = template.genes.len();
        if self.genes.len() > target {
            debug!(
                from = self.genes.len(),
                to = target,
                "Truncating chromosome to template length"
            );
            self.genes.truncate(target);
        }

        for (gene, model) in self.genes.iter_mut().zip(&template.genes) {
            gene.adjust_by_template(model);
        }

        let current = self.genes.len();
        if current < target {
            trace!(appended = target - current, "Extending chromosome from template");
            self.genes.extend(template.genes[current..].iter().cloned());
        }
    }
}

impl std::ops::Index<usize> for Chromosome {
    type Output = Gene;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl std::ops::IndexMut<usize> for Chromosome {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.genes[index]
    }
}

impl From<Vec<Gene>> for Chromosome {
    fn from(genes: Vec<Gene>) -> Self {
        Self { genes }
    }
}

impl FromIterator<Gene> for Chromosome {
    fn from_iter<I: IntoIterator<Item = Gene>>(iter: I) -> Self {
        Self {
            genes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Chromosome {
    type Item = &'a Gene;
    type IntoIter = std::slice::Iter<'a, Gene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chromosome of {} genes", self.genes.len())?;
        for gene in &self.genes {
            writeln!(f, "  {}", gene)?;
        }
        write!(f, "--- Chromosome end")
    }
}
