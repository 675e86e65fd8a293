//! Population type
//!
//! This module provides the Population container type. A population owns a
//! template chromosome and keeps every individual structurally adjusted to
//! it. It performs no selection or evaluation; an external driver pulls
//! individuals, applies genetic operators and pushes the results back.
//!
//! Individuals are only reachable by shared reference. Changes go through
//! [`Population::replace`], which adjusts the incoming chromosome to the
//! template before storing it.

use std::fmt;

use rand::Rng;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::PopulationError;
use crate::genome::chromosome::Chromosome;

/// A fixed-size collection of chromosomes sharing one template's structure
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    /// Structural reference for every individual
    template: Chromosome,
    /// The individuals in this population
    individuals: Vec<Chromosome>,
}

impl Population {
    /// Create `count` copies of `template`
    pub fn new(template: &Chromosome, count: usize) -> Result<Self, PopulationError> {
        if count == 0 {
            return Err(PopulationError::InvalidSize(count));
        }
        let individuals = (0..count)
            .map(|_| Chromosome::from_template(template))
            .collect();
        debug!(count, genes = template.len(), "Created population");
        Ok(Self {
            template: template.copy(),
            individuals,
        })
    }

    /// Get the current template
    pub fn template(&self) -> &Chromosome {
        &self.template
    }

    /// Replace the template, see [`Population::use_template`]
    pub fn set_template(&mut self, template: Chromosome) {
        self.use_template(template);
    }

    /// Replace the template and adjust every individual to it, in index order.
    ///
    /// The population takes ownership of `template`, so individuals never
    /// share genes with it.
    pub fn use_template(&mut self, template: Chromosome) {
        debug!(
            count = self.individuals.len(),
            genes = template.len(),
            "Applying new template to population"
        );
        self.template = template;
        let template = &self.template;

        #[cfg(feature = "parallel")]
        self.individuals
            .par_iter_mut()
            .for_each(|individual| individual.adjust_by_template(template));

        #[cfg(not(feature = "parallel"))]
        for individual in &mut self.individuals {
            individual.adjust_by_template(template);
        }
    }

    /// Randomize every individual
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for individual in &mut self.individuals {
            individual.randomize(rng);
        }
    }

    /// Get the population size
    pub fn count(&self) -> usize {
        self.individuals.len()
    }

    /// Grow with template copies or drop individuals from the tail
    pub fn resize(&mut self, count: usize) -> Result<(), PopulationError> {
        if count == 0 {
            return Err(PopulationError::InvalidSize(count));
        }
        debug!(from = self.individuals.len(), to = count, "Resizing population");
        let template = &self.template;
        self.individuals
            .resize_with(count, || Chromosome::from_template(template));
        Ok(())
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.individuals.get(index)
    }

    /// Store `individual` at `index` after adjusting it to the template.
    ///
    /// Returns the individual previously held in that slot.
    pub fn replace(
        &mut self,
        index: usize,
        mut individual: Chromosome,
    ) -> Result<Chromosome, PopulationError> {
        let count = self.individuals.len();
        let slot = self
            .individuals
            .get_mut(index)
            .ok_or(PopulationError::IndexOutOfRange { index, count })?;
        individual.adjust_by_template(&self.template);
        Ok(std::mem::replace(slot, individual))
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Chromosome> {
        self.individuals.iter()
    }

    /// Get the underlying individuals
    pub fn individuals(&self) -> &[Chromosome] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Chromosome> {
        self.individuals
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Chromosome;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl IntoIterator for Population {
    type Item = Chromosome;
    type IntoIter = std::vec::IntoIter<Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Population of {} chromosomes", self.individuals.len())?;
        for individual in &self.individuals {
            writeln!(f, "{}", individual)?;
        }
        write!(f, "--- Population end")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::gene::Gene;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_template() -> Chromosome {
        vec![
            Gene::with_bounds(0.0, 10.0, false),
            Gene::with_bounds(0.0, 360.0, true),
        ]
        .into()
    }

    #[test]
    fn test_population_new() {
        let template = create_template();
        let pop = Population::new(&template, 5).unwrap();

        assert_eq!(pop.count(), 5);
        assert_eq!(pop.template(), &template);
        assert!(pop.iter().all(|c| c.is_compatible_with(&template)));
    }

    #[test]
    fn test_population_invalid_size() {
        let template = create_template();
        assert_eq!(
            Population::new(&template, 0),
            Err(PopulationError::InvalidSize(0))
        );
    }

    #[test]
    fn test_population_individuals_are_independent() {
        let template = create_template();
        let mut pop = Population::new(&template, 3).unwrap();

        let mut changed = pop[0].clone();
        changed.set_value(0, 9.0).unwrap();
        pop.replace(0, changed).unwrap();

        assert_relative_eq!(pop[0].value(0).unwrap(), 9.0);
        assert_relative_eq!(pop[1].value(0).unwrap(), 5.0);
        assert_relative_eq!(pop.template().value(0).unwrap(), 5.0);
    }

    #[test]
    fn test_population_use_longer_template() {
        let mut pop = Population::new(&create_template(), 4).unwrap();

        let mut longer = create_template();
        longer.add(Gene::with_bounds(-1.0, 1.0, false));
        longer.set_max(0, 20.0).unwrap();
        pop.use_template(longer.clone());

        assert_eq!(pop.template(), &longer);
        for individual in pop.iter() {
            assert_eq!(individual.len(), 3);
            assert!(individual.is_compatible_with(&longer));
            // Shared position keeps its normalized value and rescales
            assert_relative_eq!(individual.value(0).unwrap(), 10.0);
        }

        // Appended genes are independent of the template
        let mut changed = pop[0].clone();
        changed.set_value(2, 0.9).unwrap();
        pop.replace(0, changed).unwrap();
        assert_relative_eq!(pop[0].value(2).unwrap(), 0.9);
        assert_relative_eq!(pop.template().value(2).unwrap(), 0.0);
        assert_relative_eq!(pop[1].value(2).unwrap(), 0.0);
    }

    #[test]
    fn test_population_use_shorter_template() {
        let mut pop = Population::new(&create_template(), 2).unwrap();
        let shorter: Chromosome = vec![Gene::with_bounds(0.0, 1.0, true)].into();
        pop.set_template(shorter.clone());

        assert!(pop.iter().all(|c| c.len() == 1 && c.is_compatible_with(&shorter)));
    }

    #[test]
    fn test_population_randomize() {
        let mut rng = StdRng::seed_from_u64(20);
        let template = create_template();
        let mut pop = Population::new(&template, 6).unwrap();
        pop.randomize(&mut rng);

        assert!(pop.iter().all(|c| c.is_compatible_with(&template)));
        assert_ne!(pop[0].values(), pop[1].values());
        assert_eq!(pop.template(), &template);
    }

    #[test]
    fn test_population_randomize_is_reproducible() {
        let template = create_template();
        let mut a = Population::new(&template, 3).unwrap();
        let mut b = Population::new(&template, 3).unwrap();
        a.randomize(&mut StdRng::seed_from_u64(21));
        b.randomize(&mut StdRng::seed_from_u64(21));
        assert_eq!(a, b);
    }

    #[test]
    fn test_population_resize() {
        let template = create_template();
        let mut pop = Population::new(&template, 2).unwrap();
        pop.randomize(&mut StdRng::seed_from_u64(22));
        let first = pop[0].clone();

        pop.resize(5).unwrap();
        assert_eq!(pop.count(), 5);
        assert_eq!(pop[0], first);
        assert_eq!(pop[4], template);

        pop.resize(1).unwrap();
        assert_eq!(pop.count(), 1);
        assert_eq!(pop[0], first);

        assert_eq!(pop.resize(0), Err(PopulationError::InvalidSize(0)));
        assert_eq!(pop.count(), 1);
    }

    #[test]
    fn test_population_replace() {
        let template = create_template();
        let mut pop = Population::new(&template, 2).unwrap();

        let mut rng = StdRng::seed_from_u64(23);
        let child = pop[0].crossover(&pop[1], &mut rng).unwrap();
        let mut offspring = child.clone();
        offspring.set_length(4);

        let previous = pop.replace(1, offspring).unwrap();
        assert_eq!(previous, template);
        assert_eq!(pop[1].len(), 2);
        assert!(pop[1].is_compatible_with(&template));

        assert_eq!(
            pop.replace(9, child),
            Err(PopulationError::IndexOutOfRange { index: 9, count: 2 })
        );
    }

    #[test]
    fn test_population_replace_restores_template_structure() {
        let template = create_template();
        let mut pop = Population::new(&template, 2).unwrap();

        let mut edited = pop[0].clone();
        edited.set_max(0, 50.0).unwrap();
        edited.set_wrap(1, false).unwrap();
        edited.add(Gene::with_bounds(-3.0, 3.0, true));
        assert!(!edited.is_compatible_with(&template));

        pop.replace(0, edited).unwrap();
        assert_eq!(pop[0].len(), template.len());
        assert!(pop.iter().all(|c| c.is_compatible_with(&template)));
        assert_relative_eq!(pop[0].max(0).unwrap(), 10.0);
        assert!(pop[0].wrap(1).unwrap());
    }

    #[test]
    fn test_population_get() {
        let pop = Population::new(&create_template(), 2).unwrap();
        assert!(pop.get(1).is_some());
        assert!(pop.get(2).is_none());
        assert_eq!(pop.individuals().len(), 2);
        assert_eq!(pop.into_individuals().len(), 2);
    }

    #[test]
    fn test_population_display() {
        let pop = Population::new(&create_template(), 2).unwrap();
        let rendered = pop.to_string();
        assert!(rendered.starts_with("Population of 2 chromosomes"));
        assert_eq!(rendered.matches("Chromosome of 2 genes").count(), 2);
        assert!(rendered.ends_with("--- Population end"));
    }
}
