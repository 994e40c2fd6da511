//! Categories derived by functorial constructions.
use tracing::trace;

use super::lattice::{meet, non_redundant};
use super::types::{Category, CategoryKind};
use crate::construction::{registry, Construction};
use crate::error::CategoryError;
use crate::rings::Ring;

/// A category which may provide a nested sub-definition for functorial constructions.
pub trait SupportsConstruction {
    /// Does this category, or one of its super categories, declare a sub-definition for
    /// `construction`?
    fn supports(&self, construction: &Construction) -> bool;

    /// The category of objects of this kind produced by `construction`.
    ///
    /// # Errors
    ///
    /// [`CategoryError::UnsupportedConstruction`] if no category in the chain declares it.
    fn construction_category(&self, construction: &Construction)
        -> Result<Category, CategoryError>;
}

impl SupportsConstruction for Category {
    fn supports(&self, construction: &Construction) -> bool {
        if let CategoryKind::Construction(c, _) = self.kind() {
            if c == construction {
                return true;
            }
        }
        self.declares(construction)
            || self
                .strict_super_categories()
                .iter()
                .any(|c| c.declares(construction))
    }

    fn construction_category(
        &self,
        construction: &Construction,
    ) -> Result<Category, CategoryError> {
        // F(F(C)) = F(C)
        if let CategoryKind::Construction(c, _) = self.kind() {
            if c == construction {
                return Ok(self.clone());
            }
        }

        if !self.supports(construction) {
            return Err(CategoryError::UnsupportedConstruction {
                construction: construction.name().to_string(),
                category: self.to_string(),
            });
        }
        // the declarations this result depends on are now fixed
        registry::mark_in_use(construction);

        if self.declares(construction) {
            trace!(category = %self, construction = construction.name(), "nested sub-definition");
            let kind = CategoryKind::Construction(construction.clone(), self.clone());
            return Category::intern(kind, || {
                let supers = default_super_categories(self, construction)?;
                if supers.is_empty() {
                    Ok(vec![Category::objects()])
                } else {
                    Ok(supers)
                }
            });
        }

        // No sub-definition of our own: combine those of the super categories.
        Ok(meet(&default_super_categories(self, construction)?))
    }
}

// The construction applied to each supporting direct super category, together with `category`
// itself when the construction is regressive.
fn default_super_categories(
    category: &Category,
    construction: &Construction,
) -> Result<Vec<Category>, CategoryError> {
    let mut result = Vec::new();
    if construction.is_regressive() {
        result.push(category.clone());
    }
    for s in category.super_categories() {
        if s.supports(construction) {
            result.push(s.construction_category(construction)?);
        }
    }
    Ok(non_redundant(&result))
}

impl Category {
    /// Does this category itself declare a nested sub-definition for `construction`?
    pub fn declares(&self, construction: &Construction) -> bool {
        match self.kind() {
            CategoryKind::Named(base) => registry::declares(construction, base),
            _ => false,
        }
    }

    /// Shorthand for [`SupportsConstruction::construction_category`].
    pub fn construction(&self, construction: &Construction) -> Result<Category, CategoryError> {
        self.construction_category(construction)
    }

    /// The category of Cartesian products of objects of `self`.
    ///
    /// By associativity, the Cartesian products of a category of Cartesian products is itself.
    ///
    /// ```rust
    /// # use category_constructions::category::*;
    /// let c = Category::monoids().cartesian_products().unwrap();
    /// assert_eq!(c.to_string(), "Category of Cartesian products of monoids");
    /// assert_eq!(c.cartesian_products().unwrap(), c);
    /// ```
    pub fn cartesian_products(&self) -> Result<Category, CategoryError> {
        self.construction(&Construction::cartesian_product())
    }

    pub fn subquotients(&self) -> Result<Category, CategoryError> {
        self.construction(&Construction::subquotient())
    }

    pub fn subobjects(&self) -> Result<Category, CategoryError> {
        self.construction(&Construction::subobject())
    }

    pub fn duals(&self) -> Result<Category, CategoryError> {
        self.construction(&Construction::dual())
    }

    /// The category a construction category was derived from.
    pub fn base_category(&self) -> Option<&Category> {
        match self.kind() {
            CategoryKind::Construction(_, base) => Some(base),
            _ => None,
        }
    }

    /// The base ring of a module-like category, looked through constructions and intersections.
    ///
    /// ```rust
    /// # use category_constructions::category::*;
    /// # use category_constructions::rings::ZZ;
    /// let c = Category::algebras(ZZ).cartesian_products().unwrap();
    /// assert_eq!(c.base_ring(), Some(ZZ));
    /// ```
    pub fn base_ring(&self) -> Option<Ring> {
        match self.kind() {
            CategoryKind::Named(base) => base.base_ring(),
            CategoryKind::Construction(_, base) => base.base_ring(),
            CategoryKind::Intersection(components) => {
                components.iter().find_map(Category::base_ring)
            }
        }
    }
}
