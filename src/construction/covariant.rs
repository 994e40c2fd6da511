//! Covariant functorial constructions.
use tracing::debug;

use super::registry::Construction;
use crate::category::{join, Category, SupportsConstruction};
use crate::error::CategoryError;
use crate::parent::ParentRef;

/// A functorial construction which is covariant: if `A` is a subcategory of `B`, then `F(A)`
/// is a subcategory of `F(B)`.
///
/// Implementors only say which [`Construction`] they are and how to build the constructed
/// parent once its category is known; the category is computed from the arguments.
pub trait CovariantFunctorialConstruction {
    /// The unique descriptor of this construction.
    fn construction(&self) -> Construction;

    /// Build the constructed parent from its arguments and the computed category.
    fn construct(
        &self,
        parents: Vec<ParentRef>,
        category: Category,
    ) -> Result<ParentRef, CategoryError>;

    /// The nested sub-definition of `category` for this construction.
    fn category_from_category(&self, category: &Category) -> Result<Category, CategoryError> {
        category.construction_category(&self.construction())
    }

    /// The join of the sub-definitions of each of `categories`.
    ///
    /// # Errors
    ///
    /// - [`CategoryError::EmptyConstruction`] if `categories` is empty
    /// - [`CategoryError::UnsupportedConstruction`] if some category does not support this
    ///   construction.
    fn category_from_categories(&self, categories: &[Category]) -> Result<Category, CategoryError> {
        let derived = categories
            .iter()
            .map(|c| self.category_from_category(c))
            .collect::<Result<Vec<_>, _>>()?;
        join(&derived).ok_or_else(|| CategoryError::EmptyConstruction {
            construction: self.construction().name().to_string(),
        })
    }

    fn category_from_parents(&self, parents: &[ParentRef]) -> Result<Category, CategoryError> {
        let categories: Vec<Category> = parents.iter().map(|p| p.category()).collect();
        self.category_from_categories(&categories)
    }

    /// Apply the construction to a non-empty sequence of parents.
    fn apply(&self, parents: Vec<ParentRef>) -> Result<ParentRef, CategoryError> {
        let category = self.category_from_parents(&parents)?;
        let construction = self.construction();
        debug!(
            construction = construction.name(),
            arguments = parents.len(),
            category = %category,
            "applying functorial construction"
        );
        self.construct(parents, category)
    }
}
