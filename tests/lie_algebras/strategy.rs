use num_rational::Rational64;
use proptest::collection::vec;
use proptest::prelude::Strategy;

/// Coordinates of an element of the 3-dimensional example.
pub(crate) fn coordinates_strategy() -> impl Strategy<Value = Vec<Rational64>> {
    vec((-20i64..20, 1i64..5), 3).prop_map(|xs| {
        xs.into_iter()
            .map(|(n, d)| Rational64::new(n, d))
            .collect()
    })
}
