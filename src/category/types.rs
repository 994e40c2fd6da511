use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::cell::OnceCell;
use std::rc::Rc;

use crate::construction::Construction;
use crate::error::CategoryError;
use crate::rings::Ring;
use crate::unique::UniqueCache;

/// The named categories of the hierarchy.
///
/// Ring-parameterized variants are distinct categories for distinct rings: `Modules(ZZ)` and
/// `Modules(QQ)` are incomparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseCategory {
    Objects,
    SetsWithPartialMaps,
    Sets,
    EnumeratedSets,
    FiniteEnumeratedSets,
    InfiniteEnumeratedSets,
    Magmas,
    UnitalMagmas,
    Semigroups,
    Monoids,
    Rings,
    EuclideanDomains,
    Fields,
    Modules(Ring),
    ModulesWithBasis(Ring),
    Algebras(Ring),
    LieAlgebras(Ring),
    LieAlgebrasWithBasis(Ring),
    FiniteDimensionalLieAlgebras(Ring),
    FiniteDimensionalLieAlgebrasWithBasis(Ring),
}

impl BaseCategory {
    /// The direct super categories.
    pub fn super_categories(&self) -> Vec<BaseCategory> {
        use BaseCategory::*;
        match *self {
            Objects => vec![],
            SetsWithPartialMaps => vec![Objects],
            Sets => vec![SetsWithPartialMaps],
            EnumeratedSets => vec![Sets],
            FiniteEnumeratedSets => vec![EnumeratedSets],
            InfiniteEnumeratedSets => vec![EnumeratedSets],
            Magmas => vec![Sets],
            UnitalMagmas => vec![Magmas],
            Semigroups => vec![Magmas],
            Monoids => vec![Semigroups, UnitalMagmas],
            Rings => vec![Monoids],
            EuclideanDomains => vec![Rings],
            Fields => vec![EuclideanDomains],
            Modules(_) => vec![Sets],
            ModulesWithBasis(r) => vec![Modules(r)],
            Algebras(r) => vec![Rings, Modules(r)],
            LieAlgebras(r) => vec![Modules(r)],
            LieAlgebrasWithBasis(r) => vec![LieAlgebras(r), ModulesWithBasis(r)],
            FiniteDimensionalLieAlgebras(r) => vec![LieAlgebras(r)],
            FiniteDimensionalLieAlgebrasWithBasis(r) => {
                vec![LieAlgebrasWithBasis(r), FiniteDimensionalLieAlgebras(r)]
            }
        }
    }

    /// The name of the category without its parameters; declarations of nested
    /// sub-definitions are made per family.
    pub fn family(&self) -> &'static str {
        use BaseCategory::*;
        match self {
            Objects => "Objects",
            SetsWithPartialMaps => "SetsWithPartialMaps",
            Sets => "Sets",
            EnumeratedSets => "EnumeratedSets",
            FiniteEnumeratedSets => "FiniteEnumeratedSets",
            InfiniteEnumeratedSets => "InfiniteEnumeratedSets",
            Magmas => "Magmas",
            UnitalMagmas => "UnitalMagmas",
            Semigroups => "Semigroups",
            Monoids => "Monoids",
            Rings => "Rings",
            EuclideanDomains => "EuclideanDomains",
            Fields => "Fields",
            Modules(_) => "Modules",
            ModulesWithBasis(_) => "ModulesWithBasis",
            Algebras(_) => "Algebras",
            LieAlgebras(_) => "LieAlgebras",
            LieAlgebrasWithBasis(_) => "LieAlgebrasWithBasis",
            FiniteDimensionalLieAlgebras(_) => "FiniteDimensionalLieAlgebras",
            FiniteDimensionalLieAlgebrasWithBasis(_) => "FiniteDimensionalLieAlgebrasWithBasis",
        }
    }

    pub fn base_ring(&self) -> Option<Ring> {
        use BaseCategory::*;
        match *self {
            Modules(r)
            | ModulesWithBasis(r)
            | Algebras(r)
            | LieAlgebras(r)
            | LieAlgebrasWithBasis(r)
            | FiniteDimensionalLieAlgebras(r)
            | FiniteDimensionalLieAlgebrasWithBasis(r) => Some(r),
            _ => None,
        }
    }

    /// The plural noun used in `Category of ...`.
    pub fn object_names(&self) -> String {
        use BaseCategory::*;
        // modules over a field are vector spaces
        let modules = |r: Ring| {
            if r.is_field() {
                "vector spaces"
            } else {
                "modules"
            }
        };
        match *self {
            Objects => "objects".to_string(),
            SetsWithPartialMaps => "sets with partial maps".to_string(),
            Sets => "sets".to_string(),
            EnumeratedSets => "enumerated sets".to_string(),
            FiniteEnumeratedSets => "finite enumerated sets".to_string(),
            InfiniteEnumeratedSets => "infinite enumerated sets".to_string(),
            Magmas => "magmas".to_string(),
            UnitalMagmas => "unital magmas".to_string(),
            Semigroups => "semigroups".to_string(),
            Monoids => "monoids".to_string(),
            Rings => "rings".to_string(),
            EuclideanDomains => "euclidean domains".to_string(),
            Fields => "fields".to_string(),
            Modules(r) => format!("{} over {r}", modules(r)),
            ModulesWithBasis(r) => format!("{} with basis over {r}", modules(r)),
            Algebras(r) => format!("algebras over {r}"),
            LieAlgebras(r) => format!("lie algebras over {r}"),
            LieAlgebrasWithBasis(r) => format!("lie algebras with basis over {r}"),
            FiniteDimensionalLieAlgebras(r) => format!("finite dimensional lie algebras over {r}"),
            FiniteDimensionalLieAlgebrasWithBasis(r) => {
                format!("finite dimensional lie algebras with basis over {r}")
            }
        }
    }

    pub fn latex(&self) -> String {
        match self.base_ring() {
            Some(r) => format!("\\mathbf{{{}}}_{{{}}}", self.family(), r.latex()),
            None => format!("\\mathbf{{{}}}", self.family()),
        }
    }
}

/// What a [`Category`] is, and the key under which it is uniquely represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryKind {
    /// A category of the named hierarchy
    Named(BaseCategory),
    /// The nested sub-definition a named category declares for a construction, e.g.
    /// `Monoids().CartesianProducts()`.
    Construction(Construction, Category),
    /// The category of objects lying in each of the (pairwise incomparable, sorted) components.
    Intersection(Vec<Category>),
}

pub(crate) struct CategoryNode {
    kind: CategoryKind,
    super_categories: Vec<Category>,
    // Excludes the category itself, which would otherwise make a reference cycle.
    strict_super_categories: OnceCell<Vec<Category>>,
}

/// A uniquely represented category.
///
/// Two categories built from the same [`CategoryKind`] are the same shared node, so cloning is
/// cheap and equality is usually decided by pointer.
#[derive(Clone)]
pub struct Category(Rc<CategoryNode>);

thread_local! {
    static CATEGORIES: UniqueCache<CategoryKind, CategoryNode> = UniqueCache::new();
}

impl Category {
    /// Intern a category, computing its direct super categories only when it is new.
    pub(crate) fn intern(
        kind: CategoryKind,
        super_categories: impl FnOnce() -> Result<Vec<Category>, CategoryError>,
    ) -> Result<Category, CategoryError> {
        let node = CATEGORIES.with(|cache| {
            cache.try_get_or_insert_with(kind.clone(), || {
                Ok(CategoryNode {
                    kind,
                    super_categories: super_categories()?,
                    strict_super_categories: OnceCell::new(),
                })
            })
        })?;
        Ok(Category(node))
    }

    pub fn named(base: BaseCategory) -> Category {
        let node = CATEGORIES.with(|cache| {
            cache.get_or_insert_with(CategoryKind::Named(base), || CategoryNode {
                kind: CategoryKind::Named(base),
                super_categories: base
                    .super_categories()
                    .into_iter()
                    .map(Category::named)
                    .collect(),
                strict_super_categories: OnceCell::new(),
            })
        });
        Category(node)
    }

    /// An intersection of already reduced, pairwise incomparable components.
    pub(crate) fn intersection(mut components: Vec<Category>) -> Category {
        components.sort();
        let supers = components.clone();
        let node = CATEGORIES.with(|cache| {
            cache.get_or_insert_with(CategoryKind::Intersection(components), || {
                let kind = CategoryKind::Intersection(supers.clone());
                CategoryNode {
                    kind,
                    super_categories: supers,
                    strict_super_categories: OnceCell::new(),
                }
            })
        });
        Category(node)
    }

    pub fn kind(&self) -> &CategoryKind {
        &self.0.kind
    }

    /// The direct super categories.
    pub fn super_categories(&self) -> &[Category] {
        &self.0.super_categories
    }

    pub(crate) fn strict_super_categories_cell(&self) -> &OnceCell<Vec<Category>> {
        &self.0.strict_super_categories
    }

    pub fn objects() -> Category {
        Category::named(BaseCategory::Objects)
    }

    pub fn sets_with_partial_maps() -> Category {
        Category::named(BaseCategory::SetsWithPartialMaps)
    }

    pub fn sets() -> Category {
        Category::named(BaseCategory::Sets)
    }

    pub fn enumerated_sets() -> Category {
        Category::named(BaseCategory::EnumeratedSets)
    }

    pub fn finite_enumerated_sets() -> Category {
        Category::named(BaseCategory::FiniteEnumeratedSets)
    }

    pub fn infinite_enumerated_sets() -> Category {
        Category::named(BaseCategory::InfiniteEnumeratedSets)
    }

    pub fn magmas() -> Category {
        Category::named(BaseCategory::Magmas)
    }

    pub fn unital_magmas() -> Category {
        Category::named(BaseCategory::UnitalMagmas)
    }

    pub fn semigroups() -> Category {
        Category::named(BaseCategory::Semigroups)
    }

    pub fn monoids() -> Category {
        Category::named(BaseCategory::Monoids)
    }

    pub fn rings() -> Category {
        Category::named(BaseCategory::Rings)
    }

    pub fn euclidean_domains() -> Category {
        Category::named(BaseCategory::EuclideanDomains)
    }

    pub fn fields() -> Category {
        Category::named(BaseCategory::Fields)
    }

    pub fn modules(ring: Ring) -> Category {
        Category::named(BaseCategory::Modules(ring))
    }

    pub fn modules_with_basis(ring: Ring) -> Category {
        Category::named(BaseCategory::ModulesWithBasis(ring))
    }

    pub fn algebras(ring: Ring) -> Category {
        Category::named(BaseCategory::Algebras(ring))
    }

    pub fn lie_algebras(ring: Ring) -> Category {
        Category::named(BaseCategory::LieAlgebras(ring))
    }

    /// The `WithBasis` variant of a module-like category.
    pub fn with_basis(&self) -> Option<Category> {
        use BaseCategory::*;
        let base = match self.kind() {
            CategoryKind::Named(base) => *base,
            _ => return None,
        };
        let result = match base {
            Modules(r) | ModulesWithBasis(r) => ModulesWithBasis(r),
            LieAlgebras(r) | LieAlgebrasWithBasis(r) => LieAlgebrasWithBasis(r),
            FiniteDimensionalLieAlgebras(r) | FiniteDimensionalLieAlgebrasWithBasis(r) => {
                FiniteDimensionalLieAlgebrasWithBasis(r)
            }
            _ => return None,
        };
        Some(Category::named(result))
    }

    /// The `FiniteDimensional` variant of a Lie algebra category.
    pub fn finite_dimensional(&self) -> Option<Category> {
        use BaseCategory::*;
        let base = match self.kind() {
            CategoryKind::Named(base) => *base,
            _ => return None,
        };
        let result = match base {
            LieAlgebras(r) | FiniteDimensionalLieAlgebras(r) => FiniteDimensionalLieAlgebras(r),
            LieAlgebrasWithBasis(r) | FiniteDimensionalLieAlgebrasWithBasis(r) => {
                FiniteDimensionalLieAlgebrasWithBasis(r)
            }
            _ => return None,
        };
        Some(Category::named(result))
    }

    /// The plural noun phrase naming the objects of this category.
    pub fn object_names(&self) -> String {
        match self.kind() {
            CategoryKind::Named(base) => base.object_names(),
            CategoryKind::Construction(construction, base) => {
                format!("{} of {}", construction.plural(), base.object_names())
            }
            CategoryKind::Intersection(components) => components
                .iter()
                .map(Category::object_names)
                .collect::<Vec<_>>()
                .join(" and "),
        }
    }

    pub fn latex(&self) -> String {
        match self.kind() {
            CategoryKind::Named(base) => base.latex(),
            CategoryKind::Construction(construction, base) => format!(
                "\\mathbf{{{}}}({})",
                construction.category_name(),
                base.latex()
            ),
            CategoryKind::Intersection(components) => components
                .iter()
                .map(Category::latex)
                .collect::<Vec<_>>()
                .join(" \\cap "),
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0.kind == other.0.kind
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.kind.hash(state)
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An arbitrary total order, used to normalize intersections. Not the subcategory order.
impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        if Rc::ptr_eq(&self.0, &other.0) {
            return Ordering::Equal;
        }
        self.0.kind.cmp(&other.0.kind)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            CategoryKind::Intersection(components) => {
                write!(f, "Join of ")?;
                for (i, c) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, " and ")?;
                    }
                    write!(f, "{c}")?;
                }
                Ok(())
            }
            _ => write!(f, "Category of {}", self.object_names()),
        }
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
