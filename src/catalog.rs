//! Experiment catalog: construction, validation, lookup.

use std::collections::HashSet;

use crate::data;
use crate::error::CatalogError;
use crate::experiment::Experiment;

/// Immutable ordered list of experiments.
///
/// Construction validates the data; after that the catalog never changes.
/// There is no filtering or pagination, [`Catalog::list`] is always the whole
/// collection in id order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    experiments: Vec<Experiment>,
}

impl Catalog {
    /// Validate `experiments` and build a catalog.
    ///
    /// Rejects: id 0, duplicate ids, ids out of ascending order, empty
    /// title or description, step number 0, and duplicate step numbers
    /// within one experiment. An experiment without content is fine.
    pub fn new(experiments: Vec<Experiment>) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::new();
        let mut last_id = 0u32;

        for experiment in &experiments {
            let id = experiment.id;
            if id == 0 {
                return Err(CatalogError::ZeroId {
                    title: experiment.title.clone(),
                });
            }
            if !seen_ids.insert(id) {
                return Err(CatalogError::DuplicateId { id });
            }
            if id < last_id {
                return Err(CatalogError::UnsortedId { id });
            }
            last_id = id;

            if experiment.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { id });
            }
            if experiment.description.trim().is_empty() {
                return Err(CatalogError::EmptyDescription { id });
            }

            if let Some(content) = &experiment.content {
                let mut seen_numbers = HashSet::new();
                for step in &content.steps {
                    if step.number == 0 {
                        return Err(CatalogError::ZeroStepNumber { id });
                    }
                    if !seen_numbers.insert(step.number) {
                        return Err(CatalogError::DuplicateStepNumber {
                            id,
                            number: step.number,
                        });
                    }
                }
            }
        }

        Ok(Self { experiments })
    }

    /// The built-in lab manual.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in dataset violates a catalog invariant. That
    /// is a defect in this crate's data, not a runtime condition, and it is
    /// covered by tests.
    pub fn builtin() -> Self {
        Self::new(data::experiments()).expect("built-in experiment catalog is valid")
    }

    /// All experiments, in catalog (id) order.
    pub fn list(&self) -> &[Experiment] {
        &self.experiments
    }

    /// Look up one experiment by id.
    pub fn get_by_id(&self, id: u32) -> Option<&Experiment> {
        self.experiments.iter().find(|e| e.id == id)
    }

    /// The first experiment, the default selection.
    pub fn first(&self) -> Option<&Experiment> {
        self.experiments.first()
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{ExperimentContent, Step};

    fn experiment(id: u32) -> Experiment {
        Experiment::new(id, format!("Experiment {id}"), format!("Description {id}"))
    }

    fn content_with_steps(steps: Vec<Step>) -> ExperimentContent {
        ExperimentContent {
            objective: "Test objective".to_string(),
            software_requirements: vec!["A tool".to_string()],
            steps,
            expected_output: vec!["Some output".to_string()],
            key_observations: vec!["An observation".to_string()],
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 10);
        let ids: Vec<u32> = catalog.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_list_preserves_order() {
        let catalog = Catalog::new(vec![experiment(1), experiment(3), experiment(7)]).unwrap();
        let ids: Vec<u32> = catalog.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 7]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new(vec![experiment(1), experiment(2)]).unwrap();
        assert_eq!(catalog.get_by_id(2).map(|e| e.id), Some(2));
        assert!(catalog.get_by_id(9).is_none());
    }

    #[test]
    fn test_first() {
        let catalog = Catalog::new(vec![experiment(4), experiment(5)]).unwrap();
        assert_eq!(catalog.first().map(|e| e.id), Some(4));

        let empty = Catalog::new(vec![]).unwrap();
        assert!(empty.first().is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_rejects_zero_id() {
        let result = Catalog::new(vec![experiment(0)]);
        assert!(matches!(result, Err(CatalogError::ZeroId { .. })));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let result = Catalog::new(vec![experiment(1), experiment(1)]);
        assert_eq!(result, Err(CatalogError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_rejects_unsorted_ids() {
        let result = Catalog::new(vec![experiment(2), experiment(1)]);
        assert_eq!(result, Err(CatalogError::UnsortedId { id: 1 }));
    }

    #[test]
    fn test_rejects_empty_title() {
        let mut bad = experiment(1);
        bad.title = "   ".to_string();
        let result = Catalog::new(vec![bad]);
        assert_eq!(result, Err(CatalogError::EmptyTitle { id: 1 }));
    }

    #[test]
    fn test_rejects_empty_description() {
        let mut bad = experiment(1);
        bad.description = String::new();
        let result = Catalog::new(vec![bad]);
        assert_eq!(result, Err(CatalogError::EmptyDescription { id: 1 }));
    }

    #[test]
    fn test_rejects_duplicate_step_number() {
        let bad = experiment(3).with_content(content_with_steps(vec![
            Step::new(1, "First", "Do the first thing."),
            Step::new(1, "Also first", "Do it again."),
        ]));
        let result = Catalog::new(vec![bad]);
        assert_eq!(
            result,
            Err(CatalogError::DuplicateStepNumber { id: 3, number: 1 })
        );
    }

    #[test]
    fn test_rejects_zero_step_number() {
        let bad = experiment(2)
            .with_content(content_with_steps(vec![Step::new(0, "Zeroth", "Invalid.")]));
        let result = Catalog::new(vec![bad]);
        assert_eq!(result, Err(CatalogError::ZeroStepNumber { id: 2 }));
    }

    #[test]
    fn test_allows_missing_content() {
        let catalog = Catalog::new(vec![experiment(1), experiment(2)]).unwrap();
        assert!(catalog.get_by_id(1).is_some_and(|e| e.content.is_none()));
    }

    #[test]
    fn test_step_numbers_unique_per_experiment_not_globally() {
        let first = experiment(1)
            .with_content(content_with_steps(vec![Step::new(1, "One", "First experiment.")]));
        let second = experiment(2)
            .with_content(content_with_steps(vec![Step::new(1, "One", "Second experiment.")]));
        assert!(Catalog::new(vec![first, second]).is_ok());
    }
}
