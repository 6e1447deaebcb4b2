//! Catalog validation errors.

use thiserror::Error;

/// Errors detected while constructing a [`crate::Catalog`].
///
/// All of these indicate malformed experiment data and are raised at load
/// time, before anything is rendered. Once a catalog exists it is immutable,
/// so none of these can occur later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// An experiment carries id 0. Ids are positive integers.
    #[error("experiment {title:?} has id 0; ids must be positive")]
    ZeroId { title: String },
    /// The same id appears on more than one experiment.
    #[error("duplicate experiment id {id}")]
    DuplicateId { id: u32 },
    /// Ids are not in ascending order. Catalog order is id order.
    #[error("experiment id {id} is out of order; ids must ascend")]
    UnsortedId { id: u32 },
    /// An experiment has an empty title.
    #[error("experiment {id} has an empty title")]
    EmptyTitle { id: u32 },
    /// An experiment has an empty description.
    #[error("experiment {id} has an empty description")]
    EmptyDescription { id: u32 },
    /// A step carries number 0. Step numbers are positive integers.
    #[error("experiment {id} has a step with number 0; step numbers must be positive")]
    ZeroStepNumber { id: u32 },
    /// The same step number appears twice within one experiment.
    #[error("experiment {id} has duplicate step number {number}")]
    DuplicateStepNumber { id: u32, number: u32 },
}
