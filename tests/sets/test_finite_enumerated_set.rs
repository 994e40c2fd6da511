use std::rc::Rc;

use category_constructions::prelude::*;

use super::strategy::elements_strategy;

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn elements_are_distinct_and_ordered(xs in elements_strategy(true)) {
        let s = FiniteEnumeratedSet::new(xs.clone());
        prop_assert!(s.len() <= xs.len());
        for x in &xs {
            prop_assert!(s.contains(&Element::from(*x)));
        }
        for (i, x) in s.elements().iter().enumerate() {
            prop_assert_eq!(s.rank(x), Some(i));
            prop_assert_eq!(s.unrank(i), Some(x));
        }
        prop_assert_eq!(s.cardinality(), Cardinality::Finite(s.len() as u128));
        prop_assert_eq!(s.list().unwrap(), s.elements().to_vec());
    }

    #[test]
    fn equal_arguments_give_the_same_set(xs in elements_strategy(true)) {
        let a = FiniteEnumeratedSet::new(xs.clone());
        let b = FiniteEnumeratedSet::new(xs.iter().chain(&xs).copied());
        prop_assert!(Rc::ptr_eq(&a, &b));
    }
}

#[test]
fn finite_enumerated_set_repr() {
    let s = FiniteEnumeratedSet::new(["b", "a", "b"]);
    assert_eq!(s.to_string(), "{'b', 'a'}");
    assert_eq!(s.an_element().unwrap(), Element::from("b"));
    assert_eq!(s.category(), Category::finite_enumerated_sets());
    s.rename("S");
    assert_eq!(s.to_string(), "S");
    s.reset_name();
    assert_eq!(FiniteEnumeratedSet::new(Vec::<i64>::new()).to_string(), "{}");
}

#[test]
fn finite_sets_are_not_monoids() {
    let s = FiniteEnumeratedSet::new([1]);
    assert!(matches!(
        s.one(),
        Err(CategoryError::MissingStructure { .. })
    ));
    assert!(s.power(&Element::from(1), 2).is_err());
}
