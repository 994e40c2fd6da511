use category_constructions::prelude::*;

use super::strategy::{base_category_strategy, subcategory_pair_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn linearization_starts_with_self_and_ends_with_objects(base in base_category_strategy()) {
        let c = Category::named(base);
        let all = c.all_super_categories();
        prop_assert_eq!(&all[0], &c);
        prop_assert_eq!(all.last().unwrap(), &Category::objects());
        for (i, x) in all.iter().enumerate() {
            prop_assert!(!all[i + 1..].contains(x));
            prop_assert!(c.is_subcategory(x));
        }
    }

    #[test]
    fn join_is_an_upper_bound(a in base_category_strategy(), b in base_category_strategy()) {
        let (a, b) = (Category::named(a), Category::named(b));
        let j = join(&[a.clone(), b.clone()]).unwrap();
        prop_assert!(a.is_subcategory(&j));
        prop_assert!(b.is_subcategory(&j));
    }

    #[test]
    fn meet_is_a_lower_bound(a in base_category_strategy(), b in base_category_strategy()) {
        let (a, b) = (Category::named(a), Category::named(b));
        let m = meet(&[a.clone(), b.clone()]);
        prop_assert!(m.is_subcategory(&a));
        prop_assert!(m.is_subcategory(&b));
        prop_assert_eq!(m, meet(&[b, a]));
    }

    #[test]
    fn join_and_meet_of_comparable_categories((a, b) in subcategory_pair_strategy()) {
        let (a, b) = (Category::named(a), Category::named(b));
        prop_assert_eq!(join(&[a.clone(), b.clone()]).unwrap(), b.clone());
        prop_assert_eq!(meet(&[a.clone(), b]), a);
    }
}

#[test]
fn join_of_nothing_is_undefined() {
    assert_eq!(join(&[]), None);
    assert_eq!(meet(&[]), Category::objects());
}

#[test]
fn join_of_incomparable_categories() {
    assert_eq!(
        join(&[Category::fields(), Category::finite_enumerated_sets()]).unwrap(),
        Category::sets()
    );
    assert_eq!(
        join(&[Category::modules(QQ), Category::modules(ZZ)]).unwrap(),
        Category::sets()
    );
}

#[test]
fn meet_of_incomparable_categories() {
    let m = meet(&[Category::monoids(), Category::finite_enumerated_sets()]);
    assert!(matches!(m.kind(), CategoryKind::Intersection(components) if components.len() == 2));
    assert_eq!(m, meet(&[Category::finite_enumerated_sets(), Category::monoids()]));
    // nested intersections are flattened
    assert_eq!(meet(&[m.clone(), Category::sets()]), m);
}

#[test]
fn categories_of_a_parent() {
    let zz = IntegerRing::new();
    assert!(zz.is_in(&Category::euclidean_domains()));
    assert!(zz.is_in(&Category::infinite_enumerated_sets()));
    assert!(!zz.is_in(&Category::fields()));
    assert!(zz.categories().contains(&Category::monoids()));
}
