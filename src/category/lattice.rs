//! The subcategory order: linearization of super categories, joins and meets.
//!
//! We order categories by inclusion, so `A ≤ B` when `A` is a subcategory of `B`. Then
//!
//! - the [`join`] of some categories is their least upper bound: the most specific category
//!   every one of them is a subcategory of (e.g. the join of monoids and fields is monoids),
//! - the [`meet`] is their greatest lower bound: the category of objects lying in all of them,
//!   represented as an intersection category when no named category fits.
use super::types::{Category, CategoryKind};

impl Category {
    /// All super categories excluding `self`, in method resolution order.
    pub fn strict_super_categories(&self) -> &[Category] {
        self.strict_super_categories_cell()
            .get_or_init(|| c3_merge(self))
    }

    /// `self` followed by all its super categories, in method resolution order.
    ///
    /// ```rust
    /// # use category_constructions::category::*;
    /// let names: Vec<String> = Category::monoids()
    ///     .all_super_categories()
    ///     .iter()
    ///     .map(|c| c.to_string())
    ///     .collect();
    /// assert_eq!(names, [
    ///     "Category of monoids",
    ///     "Category of semigroups",
    ///     "Category of unital magmas",
    ///     "Category of magmas",
    ///     "Category of sets",
    ///     "Category of sets with partial maps",
    ///     "Category of objects",
    /// ]);
    /// ```
    pub fn all_super_categories(&self) -> Vec<Category> {
        let mut result = vec![self.clone()];
        result.extend(self.strict_super_categories().iter().cloned());
        result
    }

    /// Alias of [`Category::all_super_categories`].
    pub fn categories(&self) -> Vec<Category> {
        self.all_super_categories()
    }

    /// Is `self` a subcategory of `other`? Every category is a subcategory of itself.
    pub fn is_subcategory(&self, other: &Category) -> bool {
        if self == other {
            return true;
        }
        if let CategoryKind::Intersection(components) = other.kind() {
            return components.iter().all(|c| self.is_subcategory(c));
        }
        self.strict_super_categories().contains(other)
    }
}

// C3 linearization of the super categories of `category`, as used for method resolution order.
// When the local orders are inconsistent we fall back to the first available head rather than
// failing.
fn c3_merge(category: &Category) -> Vec<Category> {
    let supers = category.super_categories();
    let mut sequences: Vec<Vec<Category>> = supers
        .iter()
        .map(Category::all_super_categories)
        .collect();
    sequences.push(supers.to_vec());

    let mut result: Vec<Category> = Vec::new();
    loop {
        sequences.retain(|s| !s.is_empty());
        let Some(first) = sequences.first() else {
            break;
        };

        let candidate = sequences
            .iter()
            .map(|s| &s[0])
            .find(|head| !sequences.iter().any(|s| s[1..].contains(head)))
            .unwrap_or(&first[0])
            .clone();

        for s in sequences.iter_mut() {
            s.retain(|c| c != &candidate);
        }
        result.push(candidate);
    }
    result
}

/// Flatten intersections and drop every category which is a super category of another one.
/// The relative order of the survivors is kept.
pub(crate) fn non_redundant(categories: &[Category]) -> Vec<Category> {
    let mut flat: Vec<Category> = Vec::new();
    for c in categories {
        let parts = match c.kind() {
            CategoryKind::Intersection(components) => components.clone(),
            _ => vec![c.clone()],
        };
        for p in parts {
            if !flat.contains(&p) {
                flat.push(p);
            }
        }
    }

    flat.iter()
        .filter(|c| !flat.iter().any(|d| d != *c && d.is_subcategory(c)))
        .cloned()
        .collect()
}

/// The greatest lower bound: the category of objects lying in all of `categories`.
///
/// The meet of no categories is the category of all objects.
pub fn meet(categories: &[Category]) -> Category {
    let mut components = non_redundant(categories);
    match components.len() {
        0 => Category::objects(),
        1 => components.remove(0),
        _ => Category::intersection(components),
    }
}

/// The least upper bound: the most specific category which all of `categories` are
/// subcategories of.
///
/// When several incomparable categories are minimal among the common super categories, the
/// join is their meet. The join of no categories is undefined.
///
/// ```rust
/// # use category_constructions::category::*;
/// let j = join(&[Category::monoids(), Category::fields()]).unwrap();
/// assert_eq!(j, Category::monoids());
/// ```
pub fn join(categories: &[Category]) -> Option<Category> {
    let (first, rest) = categories.split_first()?;
    let common: Vec<Category> = first
        .all_super_categories()
        .into_iter()
        .filter(|c| rest.iter().all(|other| other.is_subcategory(c)))
        .collect();

    let minimal: Vec<Category> = common
        .iter()
        .filter(|c| !common.iter().any(|d| d != *c && d.is_subcategory(c)))
        .cloned()
        .collect();
    Some(meet(&minimal))
}
