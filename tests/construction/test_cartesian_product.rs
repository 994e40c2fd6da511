use std::rc::Rc;

use category_constructions::prelude::*;
use num_rational::Rational64;

fn letters_and_digits() -> ParentRef {
    let a = FiniteEnumeratedSet::new(["a", "b", "c"]);
    let b = FiniteEnumeratedSet::new([1, 2]);
    cartesian_product([Factor::from(a), Factor::from(b)]).unwrap()
}

#[test]
fn product_of_finite_sets() {
    let c = letters_and_digits();
    assert_eq!(c.to_string(), "The cartesian product of ({'a', 'b', 'c'}, {1, 2})");
    assert_eq!(c.an_element().unwrap().to_string(), "('a', 1)");
    assert_eq!(c.cardinality(), Cardinality::Finite(6));
    let listed: Vec<String> = c.list().unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(
        listed,
        ["('a', 1)", "('a', 2)", "('b', 1)", "('b', 2)", "('c', 1)", "('c', 2)"]
    );
    assert!(c.contains(&Element::tuple(["b".into(), 2.into()])));
    assert!(!c.contains(&Element::tuple(["b".into(), 3.into()])));
    assert!(!c.contains(&Element::tuple(["b".into()])));
}

#[test]
fn product_of_monoids_is_a_monoid() {
    let m = FreeMonoid::example();
    let c = cartesian_product([
        Factor::from(m.clone()),
        Factor::from(IntegerRing::new()),
        Factor::from(RationalField::new()),
    ])
    .unwrap();
    assert_eq!(
        c.to_string(),
        format!("The cartesian product of ({m}, Integer Ring, Rational Field)")
    );
    assert_eq!(c.category().to_string(), "Category of Cartesian products of monoids");
    assert!(c.is_in(&Category::monoids()));

    let x = c.an_element().unwrap();
    assert_eq!(x.to_string(), "('abcd', 1, 1/2)");
    assert_eq!(c.power(&x, 2).unwrap().to_string(), "('abcdabcd', 1, 1/4)");
    assert_eq!(c.one().unwrap().to_string(), "('', 1, 1)");
    assert_eq!(c.power(&x, 0).unwrap(), c.one().unwrap());
    assert_eq!(c.cardinality(), Cardinality::Infinite);
    assert!(c.list().is_none());
}

#[test]
fn renamed_factor_changes_only_the_repr() {
    let m = FreeMonoid::new("xy".chars());
    let before = cartesian_product([Factor::from(m.clone())]).unwrap();
    m.rename("M");
    let after = cartesian_product([Factor::from(m.clone())]).unwrap();
    assert!(same_parent(&before, &after));
    assert_eq!(after.to_string(), "The cartesian product of (M,)");
    m.reset_name();
    assert!(after.to_string().starts_with("The cartesian product of (An example of a monoid"));
}

#[test]
fn empty_product() {
    for _ in 0..2 {
        let e = cartesian_product([]).unwrap();
        assert_eq!(e.to_string(), "The cartesian product of ()");
        assert_eq!(e.category(), Category::sets().cartesian_products().unwrap());
        assert_eq!(e.cardinality(), Cardinality::Finite(1));
        assert_eq!(e.an_element().unwrap(), Element::Tuple(vec![]));
        assert_eq!(e.an_element().unwrap().to_string(), "()");
        assert_eq!(e.list().unwrap(), vec![Element::Tuple(vec![])]);
    }
    // an empty factor makes the product empty instead
    let with_empty = cartesian_product([Factor::list(Vec::<i64>::new())]).unwrap();
    assert_eq!(with_empty.cardinality(), Cardinality::Finite(0));
    assert_eq!(with_empty.list().unwrap(), vec![]);
    assert!(matches!(
        with_empty.an_element(),
        Err(CategoryError::EmptyParent { .. })
    ));
}

#[test]
fn plain_containers_become_finite_enumerated_sets() {
    let c = cartesian_product([Factor::list([0, 1]), Factor::tuple(["a", "b", "c"])]).unwrap();
    assert_eq!(c.to_string(), "The cartesian product of ({0, 1}, {'a', 'b', 'c'})");
    assert_eq!(
        c.category().to_string(),
        "Category of Cartesian products of finite enumerated sets"
    );

    let explicit = cartesian_product([
        Factor::from(FiniteEnumeratedSet::new([0, 1])),
        Factor::from(FiniteEnumeratedSet::new(["a", "b", "c"])),
    ])
    .unwrap();
    assert!(same_parent(&c, &explicit));
    assert_eq!(c.category(), explicit.category());

    // sets are enumerated in their own order
    let s = cartesian_product([Factor::set([3, 1, 2]), Factor::frozen_set([1])]).unwrap();
    assert_eq!(s.to_string(), "The cartesian product of ({1, 2, 3}, {1})");
}

#[test]
fn mixed_factors_join_their_categories() {
    let c = cartesian_product([
        Factor::list([1, 2]),
        Factor::from(IntegerRing::new()),
    ])
    .unwrap();
    assert_eq!(
        c.category().to_string(),
        "Category of Cartesian products of enumerated sets"
    );
    assert_eq!(c.cardinality(), Cardinality::Infinite);
    assert!(matches!(
        c.one(),
        Err(CategoryError::MissingStructure { operation: "one()", .. })
    ));
}

#[test]
fn products_of_plain_sets_have_no_multiplication() {
    let c = letters_and_digits();
    let x = c.an_element().unwrap();
    assert!(matches!(
        c.product(&x, &x),
        Err(CategoryError::MissingStructure { .. })
    ));
}

#[test]
fn products_check_membership() {
    let c = cartesian_product([
        Factor::from(FreeMonoid::example()),
        Factor::from(IntegerRing::new()),
    ])
    .unwrap();
    let good = Element::tuple(["ab".into(), 3.into()]);
    let bad = Element::tuple(["xyz".into(), 3.into()]);
    assert_eq!(
        c.product(&good, &good).unwrap(),
        Element::tuple(["abab".into(), 9.into()])
    );
    assert!(matches!(
        c.product(&good, &bad),
        Err(CategoryError::NotAnElement { .. })
    ));
    assert!(c.power(&bad, 2).is_err());
}

#[test]
fn projections_and_element_construction() {
    let a = FiniteEnumeratedSet::new(["a", "b", "c"]);
    let b = FiniteEnumeratedSet::new([1, 2]);
    let product = CartesianProduct::new(
        vec![a.clone() as ParentRef, b.clone() as ParentRef],
        Category::finite_enumerated_sets().cartesian_products().unwrap(),
    );
    assert_eq!(product.cartesian_factors().len(), 2);
    let x = product.element(vec!["c".into(), 2.into()]).unwrap();
    assert_eq!(product.cartesian_projection(0, &x).unwrap(), Element::from("c"));
    assert_eq!(product.cartesian_projection(1, &x).unwrap(), Element::from(2));
    assert!(product.cartesian_projection(2, &x).is_err());
    assert!(product.element(vec!["c".into()]).is_err());
    assert!(product.element(vec!["d".into(), 2.into()]).is_err());

    // the same arguments give the same instance
    let again = CartesianProduct::new(
        vec![a as ParentRef, b as ParentRef],
        Category::finite_enumerated_sets().cartesian_products().unwrap(),
    );
    assert!(Rc::ptr_eq(&product, &again));
}

#[test]
fn factors_of_integer_and_rational_elements() {
    let c = cartesian_product([
        Factor::from(RationalField::new()),
        Factor::from(RationalField::new()),
    ])
    .unwrap();
    let x = Element::tuple([Rational64::new(2, 3).into(), 5.into()]);
    assert!(c.contains(&x));
    assert_eq!(
        c.product(&x, &x).unwrap().to_string(),
        "(4/9, 25)"
    );
}

#[test]
fn functor_repr() {
    assert_eq!(
        CartesianProductFunctor.to_string(),
        "The cartesian_product functorial construction"
    );
    assert_eq!(CartesianProductFunctor.symbol(), " (+) ");
}
