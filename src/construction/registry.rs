//! The registry of functorial constructions.
//!
//! Each construction is identified by its name (e.g. `cartesian_product`) and has exactly one
//! descriptor, shared by every [`Construction`] handle. The registry also records which named
//! categories declare a nested sub-definition for which construction: this explicit table is
//! what [`Category::declares`] consults.
//!
//! The process registry is thread-local and starts with the built-in constructions and their
//! declarations already registered. Once a category has been derived by a construction, the set
//! of categories declaring it is frozen: a later declaration for a new family is refused, so a
//! derived category never depends on when it was built.
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::category::{BaseCategory, Category, CategoryKind};
use crate::error::CategoryError;

/// Static description of a functorial construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionDescriptor {
    /// Name of the construction, e.g. `cartesian_product`
    pub name: String,
    /// Name of the nested sub-definition categories provide, e.g. `CartesianProducts`
    pub category_name: String,
    /// Noun used when naming constructed categories, e.g. `Cartesian products`
    pub plural: String,
    /// Infix symbol for the construction, if it has one
    pub symbol: Option<String>,
    /// Whether `F(C)` is a subcategory of `C`
    pub regressive: bool,
}

impl ConstructionDescriptor {
    /// A descriptor whose sub-definition name follows the naming convention:
    /// `foo_bar` provides `FooBars`, and constructed categories are named `foo bars of ...`.
    pub fn new(name: &str) -> Self {
        let camel: String = name
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect();
        Self {
            name: name.to_string(),
            category_name: format!("{camel}s"),
            plural: format!("{}s", name.replace('_', " ")),
            symbol: None,
            regressive: false,
        }
    }

    pub fn with_category_name(mut self, category_name: &str) -> Self {
        self.category_name = category_name.to_string();
        self
    }

    pub fn with_plural(mut self, plural: &str) -> Self {
        self.plural = plural.to_string();
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn regressive(mut self, regressive: bool) -> Self {
        self.regressive = regressive;
        self
    }

    pub fn cartesian_product() -> Self {
        Self::new("cartesian_product")
            .with_plural("Cartesian products")
            .with_symbol(" (+) ")
            .regressive(true)
    }

    pub fn subquotient() -> Self {
        Self::new("subquotient").regressive(true)
    }

    pub fn subobject() -> Self {
        Self::new("subobject").regressive(true)
    }

    pub fn dual() -> Self {
        Self::new("dual")
            .with_category_name("DualObjects")
            .with_plural("duals")
    }
}

/// Handle to the unique descriptor of a registered construction.
///
/// Handles compare, hash and order by construction name.
#[derive(Clone)]
pub struct Construction(Rc<ConstructionDescriptor>);

impl Construction {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn category_name(&self) -> &str {
        &self.0.category_name
    }

    pub fn plural(&self) -> &str {
        &self.0.plural
    }

    pub fn symbol(&self) -> Option<&str> {
        self.0.symbol.as_deref()
    }

    pub fn is_regressive(&self) -> bool {
        self.0.regressive
    }

    pub fn descriptor(&self) -> &ConstructionDescriptor {
        &self.0
    }

    /// Is this the very same descriptor instance as `other`?
    pub fn is(&self, other: &Construction) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn cartesian_product() -> Construction {
        with_registry(|r| r.register_descriptor(ConstructionDescriptor::cartesian_product()))
    }

    pub fn subquotient() -> Construction {
        with_registry(|r| r.register_descriptor(ConstructionDescriptor::subquotient()))
    }

    pub fn subobject() -> Construction {
        with_registry(|r| r.register_descriptor(ConstructionDescriptor::subobject()))
    }

    pub fn dual() -> Construction {
        with_registry(|r| r.register_descriptor(ConstructionDescriptor::dual()))
    }
}

impl PartialEq for Construction {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for Construction {}

impl Hash for Construction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state)
    }
}

impl PartialOrd for Construction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Construction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.name.cmp(&other.0.name)
    }
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The {} functorial construction", self.0.name)
    }
}

impl fmt::Debug for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Construction").field(&self.0.name).finish()
    }
}

pub struct ConstructionRegistry {
    constructions: RefCell<IndexMap<String, Construction>>,
    // construction name -> families of named categories declaring a sub-definition for it
    declarations: RefCell<HashMap<String, HashSet<&'static str>>>,
    // constructions for which a category has been derived
    in_use: RefCell<HashSet<String>>,
}

impl ConstructionRegistry {
    /// A registry with no constructions at all.
    pub fn new() -> Self {
        Self {
            constructions: RefCell::new(IndexMap::new()),
            declarations: RefCell::new(HashMap::new()),
            in_use: RefCell::new(HashSet::new()),
        }
    }

    /// A registry with the built-in constructions and the sub-definitions of the named
    /// categories.
    pub fn with_defaults() -> Self {
        use BaseCategory::*;
        let ring = crate::rings::QQ;
        let registry = Self::new();

        let defaults = [
            (
                ConstructionDescriptor::cartesian_product(),
                vec![
                    Sets,
                    EnumeratedSets,
                    FiniteEnumeratedSets,
                    Magmas,
                    UnitalMagmas,
                    Semigroups,
                    Monoids,
                    Modules(ring),
                    ModulesWithBasis(ring),
                    Algebras(ring),
                ],
            ),
            (
                ConstructionDescriptor::subquotient(),
                vec![Sets, Magmas, Semigroups, Monoids],
            ),
            (ConstructionDescriptor::subobject(), vec![Sets, Magmas]),
            (
                ConstructionDescriptor::dual(),
                vec![Modules(ring), ModulesWithBasis(ring)],
            ),
        ];

        for (descriptor, families) in defaults {
            let construction = registry.register_descriptor(descriptor);
            for base in families {
                registry.declare_family(&construction, base.family());
            }
        }
        registry
    }

    /// Return the construction called `name`, registering it by naming convention if needed.
    pub fn register(&self, name: &str) -> Construction {
        if let Some(existing) = self.constructions.borrow().get(name) {
            return existing.clone();
        }
        self.register_descriptor(ConstructionDescriptor::new(name))
    }

    /// Register `descriptor`, unless a construction of the same name already exists, in which
    /// case the existing one is returned.
    pub fn register_descriptor(&self, descriptor: ConstructionDescriptor) -> Construction {
        let mut constructions = self.constructions.borrow_mut();
        if let Some(existing) = constructions.get(&descriptor.name) {
            if existing.descriptor() != &descriptor {
                warn!(
                    construction = descriptor.name.as_str(),
                    "construction already registered with a different descriptor"
                );
            }
            return existing.clone();
        }
        debug!(
            construction = descriptor.name.as_str(),
            category_name = descriptor.category_name.as_str(),
            "registered functorial construction"
        );
        let construction = Construction(Rc::new(descriptor));
        constructions.insert(construction.name().to_string(), construction.clone());
        construction
    }

    /// # Errors
    ///
    /// [`CategoryError::UnknownConstruction`] if nothing was registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Construction, CategoryError> {
        self.constructions
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| CategoryError::UnknownConstruction {
                name: name.to_string(),
            })
    }

    /// Names of the registered constructions, in registration order.
    pub fn constructions(&self) -> Vec<String> {
        self.constructions.borrow().keys().cloned().collect()
    }

    /// Record that `category` provides a nested sub-definition for `construction`.
    ///
    /// The declaration applies to the whole family of `category` (all base rings). Repeating a
    /// declaration is a no-op.
    ///
    /// # Errors
    ///
    /// [`CategoryError::NotDeclarable`] unless `category` is a named category, and
    /// [`CategoryError::DeclaredAfterUse`] for a new family once a category has been derived by
    /// `construction`.
    pub fn declare(
        &self,
        construction: &Construction,
        category: &Category,
    ) -> Result<(), CategoryError> {
        let CategoryKind::Named(base) = category.kind() else {
            return Err(CategoryError::NotDeclarable {
                construction: construction.name().to_string(),
                category: category.to_string(),
            });
        };
        if self.declares(construction, base) {
            return Ok(());
        }
        if self.is_in_use(construction) {
            warn!(
                construction = construction.name(),
                family = base.family(),
                "declaration refused, construction categories already built"
            );
            return Err(CategoryError::DeclaredAfterUse {
                construction: construction.name().to_string(),
                category: category.to_string(),
            });
        }
        self.declare_family(construction, base.family());
        Ok(())
    }

    fn declare_family(&self, construction: &Construction, family: &'static str) {
        debug!(
            construction = construction.name(),
            family, "declared nested sub-definition"
        );
        self.declarations
            .borrow_mut()
            .entry(construction.name().to_string())
            .or_default()
            .insert(family);
    }

    pub fn declares(&self, construction: &Construction, base: &BaseCategory) -> bool {
        self.declarations
            .borrow()
            .get(construction.name())
            .is_some_and(|families| families.contains(base.family()))
    }

    /// Has a category been derived by `construction`?
    pub fn is_in_use(&self, construction: &Construction) -> bool {
        self.in_use.borrow().contains(construction.name())
    }

    pub(crate) fn mark_in_use(&self, construction: &Construction) {
        if !self.is_in_use(construction) {
            self.in_use
                .borrow_mut()
                .insert(construction.name().to_string());
        }
    }
}

impl Default for ConstructionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

thread_local! {
    static REGISTRY: ConstructionRegistry = ConstructionRegistry::with_defaults();
}

/// Run `f` against the process registry.
pub fn with_registry<R>(f: impl FnOnce(&ConstructionRegistry) -> R) -> R {
    REGISTRY.with(f)
}

/// [`ConstructionRegistry::register`] on the process registry.
pub fn register(name: &str) -> Construction {
    with_registry(|r| r.register(name))
}

/// [`ConstructionRegistry::resolve`] on the process registry.
///
/// ```rust
/// # use category_constructions::construction::registry::*;
/// let c = resolve("cartesian_product").unwrap();
/// assert_eq!(c.to_string(), "The cartesian_product functorial construction");
/// assert_eq!(c.category_name(), "CartesianProducts");
/// assert!(resolve("tensor").is_err());
/// ```
pub fn resolve(name: &str) -> Result<Construction, CategoryError> {
    with_registry(|r| r.resolve(name))
}

/// [`ConstructionRegistry::declare`] on the process registry.
pub fn declare(construction: &Construction, category: &Category) -> Result<(), CategoryError> {
    with_registry(|r| r.declare(construction, category))
}

pub fn declares(construction: &Construction, base: &BaseCategory) -> bool {
    with_registry(|r| r.declares(construction, base))
}

pub(crate) fn mark_in_use(construction: &Construction) {
    with_registry(|r| r.mark_in_use(construction))
}
