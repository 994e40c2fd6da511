use {
    category_constructions::prelude::*,
    proptest::prelude::{prop_oneof, Just, Strategy},
    proptest::sample::select,
};

pub(crate) fn ring_strategy() -> impl Strategy<Value = Ring> {
    prop_oneof![Just(ZZ), Just(QQ)]
}

/// Every named category over `ring`.
pub(crate) fn named_categories(ring: Ring) -> Vec<BaseCategory> {
    use BaseCategory::*;
    vec![
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
        Modules(ring),
        ModulesWithBasis(ring),
        Algebras(ring),
        LieAlgebras(ring),
        LieAlgebrasWithBasis(ring),
        FiniteDimensionalLieAlgebras(ring),
        FiniteDimensionalLieAlgebrasWithBasis(ring),
    ]
}

// Categories are `Rc`-based, so strategies produce their names and tests build them.
pub(crate) fn base_category_strategy() -> impl Strategy<Value = BaseCategory> {
    ring_strategy().prop_flat_map(|ring| select(named_categories(ring)))
}

/// A pair `(a, b)` of named categories with `a` a subcategory of `b`.
pub(crate) fn subcategory_pair_strategy() -> impl Strategy<Value = (BaseCategory, BaseCategory)> {
    base_category_strategy().prop_flat_map(|a| {
        let supers: Vec<BaseCategory> = Category::named(a)
            .all_super_categories()
            .iter()
            .filter_map(|c| match c.kind() {
                CategoryKind::Named(base) => Some(*base),
                _ => None,
            })
            .collect();
        (Just(a), select(supers))
    })
}

pub(crate) fn construction_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("cartesian_product"),
        Just("subquotient"),
        Just("subobject"),
        Just("dual"),
    ]
}
