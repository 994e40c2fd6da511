use category_constructions::prelude::*;

use super::strategy::{base_category_strategy, construction_strategy, subcategory_pair_strategy};

use proptest::{prop_assert, prop_assert_eq, prop_assume, proptest};

proptest! {
    #[test]
    fn construction_is_idempotent(base in base_category_strategy(), name in construction_strategy()) {
        let construction = resolve(name).unwrap();
        let c = Category::named(base);
        prop_assume!(c.supports(&construction));
        let once = c.construction(&construction).unwrap();
        let twice = once.construction(&construction).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn construction_of_a_meet_is_idempotent(
        a in base_category_strategy(),
        b in base_category_strategy(),
        name in construction_strategy(),
    ) {
        let construction = resolve(name).unwrap();
        let c = meet(&[Category::named(a), Category::named(b)]);
        prop_assume!(c.supports(&construction));
        let once = c.construction(&construction).unwrap();
        let twice = once.construction(&construction).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn construction_is_covariant((a, b) in subcategory_pair_strategy(), name in construction_strategy()) {
        let construction = resolve(name).unwrap();
        let (a, b) = (Category::named(a), Category::named(b));
        prop_assume!(b.supports(&construction));
        // supporting is inherited by subcategories
        prop_assert!(a.supports(&construction));
        let fa = a.construction(&construction).unwrap();
        let fb = b.construction(&construction).unwrap();
        prop_assert!(fa.is_subcategory(&fb));
    }

    #[test]
    fn regressive_constructions_stay_below(base in base_category_strategy(), name in construction_strategy()) {
        let construction = resolve(name).unwrap();
        let c = Category::named(base);
        prop_assume!(construction.is_regressive() && c.supports(&construction));
        prop_assert!(c.construction(&construction).unwrap().is_subcategory(&c));
    }

    #[test]
    fn construction_category_is_shared(base in base_category_strategy()) {
        let c = Category::named(base);
        prop_assume!(c.supports(&Construction::cartesian_product()));
        let a = c.cartesian_products().unwrap();
        let b = Category::named(base).cartesian_products().unwrap();
        prop_assert_eq!(a.to_string(), b.to_string());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn unsupported_construction_fails(base in base_category_strategy(), name in construction_strategy()) {
        let construction = resolve(name).unwrap();
        let c = Category::named(base);
        prop_assume!(!c.supports(&construction));
        let is_unsupported = matches!(
            c.construction(&construction),
            Err(CategoryError::UnsupportedConstruction { .. })
        );
        prop_assert!(is_unsupported);
    }
}

#[test]
fn cartesian_products_of_monoids() {
    let c = Category::monoids().cartesian_products().unwrap();
    assert_eq!(c.base_category(), Some(&Category::monoids()));
    assert!(c.is_subcategory(&Category::monoids()));
    assert!(c.is_subcategory(&Category::semigroups().cartesian_products().unwrap()));
    assert!(c.is_subcategory(&Category::sets().cartesian_products().unwrap()));
    assert!(!c.is_subcategory(&Category::sets().subquotients().unwrap()));
}

#[test]
fn undeclared_category_combines_its_super_categories() {
    // rings declare no Cartesian products of their own
    let c = Category::rings().cartesian_products().unwrap();
    assert!(matches!(c.kind(), CategoryKind::Intersection(_)));
    assert!(c.is_subcategory(&Category::rings()));
    assert!(c.is_subcategory(&Category::monoids().cartesian_products().unwrap()));
}

#[test]
fn duals_only_exist_for_modules() {
    assert_eq!(
        Category::sets().duals(),
        Err(CategoryError::UnsupportedConstruction {
            construction: "dual".to_string(),
            category: "Category of sets".to_string(),
        })
    );
    let d = Category::modules_with_basis(QQ).duals().unwrap();
    assert!(d.is_subcategory(&Category::modules(QQ).duals().unwrap()));
    // duality is not regressive
    assert!(!d.is_subcategory(&Category::modules_with_basis(QQ)));
}

#[test]
fn declared_constructions_are_per_family() {
    let cp = Construction::cartesian_product();
    assert!(Category::modules(ZZ).declares(&cp));
    assert!(Category::modules(QQ).declares(&cp));
    assert!(!Category::rings().declares(&cp));
    assert!(!Category::monoids().cartesian_products().unwrap().declares(&cp));
    assert_eq!(
        Category::algebras(ZZ).cartesian_products().unwrap().base_ring(),
        Some(ZZ)
    );
}

#[test]
fn cartesian_products_of_intersections_are_idempotent() {
    let categories = [
        Category::rings(),
        IntegerRing::new().category(),
        RationalField::new().category(),
    ];
    for c in categories {
        let once = c.cartesian_products().unwrap();
        assert!(matches!(once.kind(), CategoryKind::Intersection(_)), "{once}");
        assert_eq!(once.cartesian_products().unwrap(), once);
        assert!(once.is_subcategory(&Category::monoids().cartesian_products().unwrap()));
    }
}
